use landing_theme_core::{PreferenceStorage, StorageError};

/// `window.localStorage`, or nothing when the browser refuses access to it.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = match gloo::utils::window().local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage is not available");
                None
            }
            Err(err) => {
                log::warn!("localStorage access denied: {:?}", err);
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|err| {
            log::debug!("getItem({:?}) failed: {:?}", key, err);
            StorageError::ReadFailed
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|err| {
            log::debug!("setItem({:?}) failed: {:?}", key, err);
            StorageError::WriteFailed
        })
    }
}
