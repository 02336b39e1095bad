use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} mode")
    }

    pub fn pick<'a>(self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        match self.store.get(&self.key) {
            Ok(value) => value.and_then(|value| Theme::from_stored(&value)),
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                None
            }
        }
    }

    /// Stored preference, else the host's colour-scheme hint.
    pub fn load(&self, system_prefers_dark: bool) -> Theme {
        self.stored().unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn persist(&self, theme: Theme) {
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.persist(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "quota".to_string(),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn stored_flag_wins_over_system_hint() {
        let preference = ThemePreference::new(MemoryStore::with_entry("theme", "light"), "theme");
        assert_eq!(preference.load(true), Theme::Light);
    }

    #[test]
    fn missing_or_unknown_flag_follows_system_hint() {
        let preference = ThemePreference::new(MemoryStore::new(), "theme");
        assert_eq!(preference.load(true), Theme::Dark);
        assert_eq!(preference.load(false), Theme::Light);

        let preference = ThemePreference::new(MemoryStore::with_entry("theme", "sepia"), "theme");
        assert_eq!(preference.load(false), Theme::Light);
    }

    #[test]
    fn toggle_persists_new_theme() {
        let store = MemoryStore::new();
        let preference = ThemePreference::new(&store, "theme");

        let next = preference.toggle(Theme::Light);
        assert_eq!(next, Theme::Dark);
        assert_eq!(
            store.get("theme").expect("memory reads succeed").as_deref(),
            Some("dark")
        );

        assert_eq!(preference.toggle(next), Theme::Light);
        assert_eq!(preference.stored(), Some(Theme::Light));
    }

    #[test]
    fn broken_store_degrades_to_defaults() {
        let preference = ThemePreference::new(BrokenStore, "theme");
        assert_eq!(preference.load(false), Theme::Light);
        assert_eq!(preference.toggle(Theme::Light), Theme::Dark);
    }

    #[test]
    fn only_known_flags_are_recognised() {
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::from_stored("Dark"), None);
        assert_eq!(Theme::from_stored(""), None);
    }

    #[test]
    fn labels_name_the_next_mode() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.pick("bg-white", "bg-gray-900"), "bg-gray-900");
    }
}
