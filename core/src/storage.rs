use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::*;

/// Associates a value type with the key it is persisted under.
pub trait StorageKey {
    const KEY: &'static str;
}

/// Synchronous string key/value store that survives page reloads.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// A value that is stored as a plain string under its [`StorageKey`].
///
/// Loading never fails: unreadable storage and unrecognized values both
/// resolve to [`Default::default`].
pub trait Preference: StorageKey + Default + Sized {
    fn decode(raw: &str) -> Option<Self>;
    fn encode(&self) -> &str;

    fn load<S: PreferenceStorage + ?Sized>(storage: &S) -> Result<Option<Self>, StorageError> {
        let Some(raw) = storage.read(Self::KEY)? else {
            return Ok(None);
        };
        let value = Self::decode(&raw);
        if value.is_none() {
            log::warn!("ignoring unrecognized {:?} value: {:?}", Self::KEY, raw);
        }
        Ok(value)
    }

    fn load_or_default<S: PreferenceStorage + ?Sized>(storage: &S) -> Self {
        match Self::load(storage) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("no {:?} preference stored", Self::KEY);
                Self::default()
            }
            Err(err) => {
                log::warn!("could not load {:?}: {}", Self::KEY, err);
                Self::default()
            }
        }
    }

    fn save<S: PreferenceStorage + ?Sized>(&self, storage: &mut S) -> Result<(), StorageError> {
        storage.write(Self::KEY, self.encode())
    }
}

/// In-memory [`PreferenceStorage`], with switches to simulate a browser that
/// blocks storage entirely or refuses writes (quota, private mode).
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    available: bool,
    writable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            available: true,
            writable: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        if !self.writable {
            return Err(StorageError::WriteFailed);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_or_default_uses_stored_scheme() {
        for theme in Theme::ALL {
            let storage = MemoryStorage::new().with_entry("theme", theme.scheme());
            assert_eq!(Theme::load_or_default(&storage), theme);
        }
    }

    #[test]
    fn load_or_default_falls_back_on_missing_value() {
        assert_eq!(Theme::load_or_default(&MemoryStorage::new()), Theme::Light);
    }

    #[test]
    fn load_or_default_falls_back_on_unrecognized_value() {
        let storage = MemoryStorage::new().with_entry("theme", "sepia");
        assert_eq!(Theme::load(&storage), Ok(None));
        assert_eq!(Theme::load_or_default(&storage), Theme::Light);
    }

    #[test]
    fn load_or_default_falls_back_when_storage_is_unavailable() {
        let storage = MemoryStorage::unavailable();
        assert_eq!(Theme::load(&storage), Err(StorageError::Unavailable));
        assert_eq!(Theme::load_or_default(&storage), Theme::Light);
    }

    #[test]
    fn save_writes_raw_scheme_under_theme_key() {
        let mut storage = MemoryStorage::new();
        Theme::Dark.save(&mut storage).unwrap();
        assert_eq!(storage.get("theme"), Some("dark"));
    }

    #[test]
    fn save_reports_refused_write() {
        let mut storage = MemoryStorage::new().read_only();
        assert_eq!(Theme::Dark.save(&mut storage), Err(StorageError::WriteFailed));
        assert_eq!(storage.get("theme"), None);
    }
}
