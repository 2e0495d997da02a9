use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{parse_asset, ContentError};

pub static DICTIONARY: LazyLock<Dictionary> = LazyLock::new(|| match Dictionary::load() {
    Ok(dict) => dict,
    Err(e) => {
        log::error!("translations unavailable, using fallbacks: {e}");
        Dictionary::default()
    }
});

/// Local storage key holding the chosen language.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(String);

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    /// Picks the first supported language from browser tags such as `fr-CA` or `en-US`.
    pub fn from_browser<S: AsRef<str>>(tags: &[S]) -> Self {
        tags.iter()
            .find_map(|tag| {
                let primary = tag.as_ref().split(['-', '_']).next().unwrap_or_default();
                primary.parse().ok()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub en: Option<String>,
    pub fr: Option<String>,
}

impl Translation {
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => self.en.as_deref(),
            Language::Fr => self.fr.as_deref(),
        }
    }
}

/// Flat key to per-language string table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Translation>,
}

impl Dictionary {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            entries: parse_asset("translations.json")?,
        })
    }

    pub fn from_entries(entries: HashMap<String, Translation>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, key: &str, language: Language) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|t| t.get(language))
            .filter(|s| !s.is_empty())
    }

    /// The authored string for `language`, else `fallback`, else `key` itself.
    pub fn translate<'a>(&'a self, key: &'a str, fallback: &'a str, language: Language) -> &'a str {
        match self.lookup(key, language) {
            Some(s) => s,
            None if !fallback.is_empty() => fallback,
            None => key,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
