pub mod theme;

pub use theme::*;

/// Storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "campsearch-theme";

/// Stored theme preference.
///
/// `System` defers to the OS dark-mode signal and re-evaluates live while it
/// stays selected.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Unknown stored values fall back to `System`.
    pub fn from_stored(s: &str) -> Self {
        match s.trim() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    StorageUnavailable,
    Io(String),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::StorageUnavailable => write!(f, "browser storage unavailable"),
            PrefsError::Io(msg) => write!(f, "preference storage error: {msg}"),
        }
    }
}

impl std::error::Error for PrefsError {}

/// Key-value store for the theme preference.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<ThemeMode>, PrefsError>;
    fn save(&mut self, mode: ThemeMode) -> Result<(), PrefsError>;
}

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    stored: Option<ThemeMode>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self) -> Result<Option<ThemeMode>, PrefsError> {
        Ok(self.stored)
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), PrefsError> {
        self.stored = Some(mode);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{PreferenceStore, PrefsError, ThemeMode};

    /// localStorage-backed preference store.
    #[derive(Debug)]
    pub struct LocalStoragePreferenceStore {
        key: String,
    }

    impl LocalStoragePreferenceStore {
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }
    }

    impl PreferenceStore for LocalStoragePreferenceStore {
        fn load(&self) -> Result<Option<ThemeMode>, PrefsError> {
            let storage = window_local_storage()?;
            let raw = storage
                .get_item(&self.key)
                .map_err(|e| PrefsError::Io(format!("get_item failed: {:?}", e)))?;
            Ok(raw.map(|s| ThemeMode::from_stored(&s)))
        }

        fn save(&mut self, mode: ThemeMode) -> Result<(), PrefsError> {
            let storage = window_local_storage()?;
            storage
                .set_item(&self.key, mode.as_str())
                .map_err(|e| PrefsError::Io(format!("set_item failed: {:?}", e)))
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, PrefsError> {
        let win = web_sys::window().ok_or(PrefsError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e| PrefsError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(PrefsError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStoragePreferenceStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct LocalStoragePreferenceStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStoragePreferenceStore {
    pub fn new(_key: impl Into<String>) -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalStoragePreferenceStore {
    fn load(&self) -> Result<Option<ThemeMode>, PrefsError> {
        Err(PrefsError::StorageUnavailable)
    }

    fn save(&mut self, _mode: ThemeMode) -> Result<(), PrefsError> {
        Err(PrefsError::StorageUnavailable)
    }
}
