use core::fmt;
use core::str::FromStr;

use crate::*;

/// The two color palettes a page can be rendered with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.scheme() == s)
            .ok_or(ThemeError::UnknownScheme)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "theme";
}

impl Preference for Theme {
    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn encode(&self) -> &str {
        self.scheme()
    }
}
