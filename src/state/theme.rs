use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Class placed on the root element; tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

impl ThemePreference {
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_prefers_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }

    /// The toggle always lands on an explicit choice opposite to what's shown.
    pub fn toggled(self, system_prefers_dark: bool) -> ThemePreference {
        match self.resolve(system_prefers_dark) {
            ResolvedTheme::Dark => ThemePreference::Light,
            ResolvedTheme::Light => ThemePreference::Dark,
        }
    }
}

/// Where the preference survives between visits.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, pref: ThemePreference);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore(Arc<Mutex<Option<ThemePreference>>>);

impl MemoryThemeStore {
    pub fn with(pref: ThemePreference) -> Self {
        Self(Arc::new(Mutex::new(Some(pref))))
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        *self.0.lock().expect("should be able to lock theme store")
    }

    fn save(&self, pref: ThemePreference) {
        *self.0.lock().expect("should be able to lock theme store") = Some(pref);
    }
}

/// Reads the stored preference, falling back to the default.
pub fn initial_preference(store: &dyn ThemeStore) -> ThemePreference {
    store.load().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemePreference::Dark.toggled(false), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(true), ThemePreference::Dark);
        assert_eq!(ThemePreference::System.toggled(true), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(false), ThemePreference::Dark);
    }

    #[test]
    fn test_store_round_trip() {
        let store = MemoryThemeStore::default();
        assert_eq!(initial_preference(&store), ThemePreference::Dark);
        store.save(ThemePreference::System);
        assert_eq!(initial_preference(&store), ThemePreference::System);

        let seeded = MemoryThemeStore::with(ThemePreference::Light);
        assert_eq!(seeded.load(), Some(ThemePreference::Light));
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::System).unwrap(),
            "\"system\""
        );
        assert_eq!(
            serde_json::from_str::<ThemePreference>("\"light\"").unwrap(),
            ThemePreference::Light
        );
    }
}
