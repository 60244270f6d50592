use crate::{PreferenceStore, ThemeMode};

/// Theme actually shown to the user; `System` has already been resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

/// Applies a theme to the page.
///
/// Gets both the active preference (to highlight the matching toggle button)
/// and the resolved effective theme (to set on the document root).
pub trait ThemeSink {
    fn apply(&mut self, mode: ThemeMode, effective: EffectiveTheme);
}

/// Sink that records applications, for tests.
#[derive(Debug, Default)]
pub struct RecordingThemeSink {
    pub applied: Vec<(ThemeMode, EffectiveTheme)>,
}

impl ThemeSink for RecordingThemeSink {
    fn apply(&mut self, mode: ThemeMode, effective: EffectiveTheme) {
        self.applied.push((mode, effective));
    }
}

/// Orchestrates loading, persisting, and applying the theme preference.
///
/// The OS dark-mode signal arrives through [`system_signal_changed`]; the
/// hosting app owns the actual listener registration and should keep it
/// registered only while [`wants_system_signal`] holds, per the explicit
/// subscription model.
///
/// [`system_signal_changed`]: ThemeController::system_signal_changed
/// [`wants_system_signal`]: ThemeController::wants_system_signal
#[derive(Debug)]
pub struct ThemeController<S, K> {
    store: S,
    sink: K,
    system_is_dark: bool,
}

impl<S: PreferenceStore, K: ThemeSink> ThemeController<S, K> {
    pub fn new(store: S, sink: K, system_is_dark: bool) -> Self {
        Self {
            store,
            sink,
            system_is_dark,
        }
    }

    /// Current preference; storage errors and absence both mean `System`.
    pub fn mode(&self) -> ThemeMode {
        self.store.load().ok().flatten().unwrap_or_default()
    }

    /// Whether the OS signal listener should currently be registered.
    pub fn wants_system_signal(&self) -> bool {
        self.mode() == ThemeMode::System
    }

    fn resolve(&self, mode: ThemeMode) -> EffectiveTheme {
        match mode {
            ThemeMode::Light => EffectiveTheme::Light,
            ThemeMode::Dark => EffectiveTheme::Dark,
            ThemeMode::System => {
                if self.system_is_dark {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        }
    }

    /// Applies the stored preference on page load.
    pub fn init(&mut self) {
        let mode = self.mode();
        let effective = self.resolve(mode);
        self.sink.apply(mode, effective);
    }

    /// Persists a user's choice and applies it. The save is best-effort: a
    /// storage failure still applies the theme for this page view.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        let _ = self.store.save(mode);
        let effective = self.resolve(mode);
        self.sink.apply(mode, effective);
    }

    /// OS dark-mode signal changed. Only re-applies while the stored
    /// preference is `System`; explicit light/dark choices are unaffected.
    pub fn system_signal_changed(&mut self, is_dark: bool) {
        self.system_is_dark = is_dark;
        let mode = self.mode();
        if mode == ThemeMode::System {
            let effective = self.resolve(mode);
            self.sink.apply(mode, effective);
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}
