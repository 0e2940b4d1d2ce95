use std::fmt;

use anyhow::Result;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    // anything other than the two exact literals (including nothing at all) is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// durable key-value storage for the theme
//
// in the browser this is local storage, but anything that survives a restart works
pub trait ThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

// theme setting
//
// the in-memory preference plus its backing store.  every change is written through
// before toggle() returns, so nothing can observe one without the other.  storage
// failures never propagate: the theme is cosmetic, so a failed read means light and
// a failed write still leaves the new value in place for this session
#[derive(Debug)]
pub struct ThemeSetting<S: ThemeStore> {
    current: ThemePreference,
    key: String,
    store: S,
}

impl<S: ThemeStore> ThemeSetting<S> {
    pub fn load(store: S, key: &str) -> Self {
        let current = match store.load(key) {
            Ok(value) => ThemePreference::from_stored(value.as_deref()),
            Err(err) => {
                warn!("failed to read theme preference, using light: {err}");
                ThemePreference::Light
            }
        };

        debug!(%current, "loaded theme preference");

        ThemeSetting {
            current,
            key: key.to_owned(),
            store,
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();

        if let Err(err) = self.store.save(&self.key, self.current.as_str()) {
            warn!("failed to persist theme preference {}: {err}", self.current);
        }

        debug!(current = %self.current, "toggled theme");
        self.current
    }
}
