//! Bilingual résumé text: a static table keyed by language.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

const EMBEDDED_CONTENT: &str = include_str!("../../assets/resume.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Es => "Español (ES)",
            Language::En => "English (EN)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(SceneError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactLine {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Entry {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Everything the panel shows in one language.
#[derive(Clone, Debug, Deserialize)]
pub struct ResumeContent {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub contact: Vec<ContactLine>,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub reveal_hint: String,
}

#[derive(Resource, Clone, Debug, Deserialize)]
pub struct ContentTable {
    pub es: ResumeContent,
    pub en: ResumeContent,
}

impl ContentTable {
    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self, SceneError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, language: Language) -> &ResumeContent {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}
