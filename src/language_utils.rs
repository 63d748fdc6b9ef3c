use isolang::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnsupportedLanguageError;

/// Language utilities for the report language pair
///
/// Reports are authored in Portuguese (the glossary's key language) and can
/// be localized to English. Tags are matched case-insensitively and accept
/// ISO 639-1 and ISO 639-2 codes, region subtags and the generic
/// `source`/`target` aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportLanguage {
    /// Portuguese, the glossary's source side
    #[default]
    #[serde(rename = "pt")]
    Portuguese,
    /// English, the glossary's target side
    #[serde(rename = "en")]
    English,
}

impl ReportLanguage {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Portuguese => "pt",
            Self::English => "en",
        }
    }

    /// The corresponding isolang entry
    pub fn iso(&self) -> Language {
        match self {
            Self::Portuguese => Language::Por,
            Self::English => Language::Eng,
        }
    }

    /// English name of the language
    pub fn english_name(&self) -> &'static str {
        self.iso().to_name()
    }

    /// Name of the language in the language itself, capitalized
    pub fn native_name(&self) -> String {
        let autonym = self.iso().to_autonym().unwrap_or_else(|| self.english_name());
        capitalize_first(autonym)
    }

    /// The other side of the pair
    pub fn opposite(&self) -> Self {
        match self {
            Self::Portuguese => Self::English,
            Self::English => Self::Portuguese,
        }
    }

    /// Parse a language tag, failing on anything outside the pair
    pub fn parse(tag: &str) -> Result<Self, UnsupportedLanguageError> {
        let normalized = tag.trim().to_lowercase();

        match normalized.as_str() {
            "source" => return Ok(Self::Portuguese),
            "target" => return Ok(Self::English),
            _ => {}
        }

        // Drop region subtags such as pt-BR or en_US
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        let language = match primary.len() {
            2 => Language::from_639_1(primary),
            3 => Language::from_639_3(primary),
            _ => None,
        };

        match language {
            Some(Language::Por) => Ok(Self::Portuguese),
            Some(Language::Eng) => Ok(Self::English),
            _ => Err(UnsupportedLanguageError::new(tag)),
        }
    }
}

impl fmt::Display for ReportLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ReportLanguage {
    type Err = UnsupportedLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A language offered for report output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// ISO 639-1 code
    pub code: &'static str,
    /// Native display name
    pub name: String,
}

/// Languages a report can be produced in, authoring language first
pub fn available_languages() -> Vec<LanguageOption> {
    [ReportLanguage::Portuguese, ReportLanguage::English]
        .iter()
        .map(|lang| LanguageOption {
            code: lang.code(),
            name: lang.native_name(),
        })
        .collect()
}

/// Uppercase the first character of a string, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character of a string, leaving the rest untouched
pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
