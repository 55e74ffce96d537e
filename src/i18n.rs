//! Internationalization (i18n) support
//!
//! The Arquantix brand publishes in English and French; all visible copy
//! goes through a `Locale` so the navbar toggle can switch languages live.
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - fr.rs: French translations

mod en;
mod fr;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Parse a stored language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        if code == "fr" {
            Language::French
        } else {
            Language::English
        }
    }

    /// The other supported language (navbar toggle)
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navbar
    ComingSoon,

    // Hero
    HeroTitle,
    HeroPrevious,
    HeroNext,

    // Footer
    FooterRights,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::French => fr::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_translated_in_both_languages() {
        let keys = [
            Key::AppName,
            Key::ComingSoon,
            Key::HeroTitle,
            Key::HeroPrevious,
            Key::HeroNext,
            Key::FooterRights,
        ];
        for lang in [Language::English, Language::French] {
            for key in keys {
                assert_ne!(t(lang, key), "???", "{lang:?} missing {key:?}");
            }
        }
    }

    #[test]
    fn toggle_is_involutive() {
        assert_eq!(Language::English.toggled().toggled(), Language::English);
        assert_eq!(Language::French.toggled(), Language::English);
    }

    #[test]
    fn codes_round_trip() {
        for lang in [Language::English, Language::French] {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code("de"), Language::English);
    }
}
