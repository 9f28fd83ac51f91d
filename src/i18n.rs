//! Message lookup for localized UI strings.
//!
//! Components receive a [`Translator`] instead of reaching for a global catalog,
//! so tests can substitute their own lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::connector::ReleaseStage;

/// English messages shipped with the crate.
const EN_MESSAGES: &str = include_str!("../locales/en.json");

/// Resolves a message key to display text.
pub trait Translator: Send + Sync {
    /// Look up `key`. Implementations decide what a missing key renders as.
    fn resolve(&self, key: &str) -> String;
}

/// Shared handle to a translator.
pub type SharedTranslator = Arc<dyn Translator>;

/// Message key for a stage's short label.
#[must_use]
pub fn release_stage_label_key(stage: &ReleaseStage) -> String {
    format!("connector.releaseStage.{stage}")
}

/// Message key for a stage's longer description.
#[must_use]
pub fn release_stage_description_key(stage: &ReleaseStage) -> String {
    format!("connector.releaseStage.{stage}.description")
}

/// Errors that can occur while loading a message catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not a flat JSON object of strings.
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog is not a flat YAML mapping of strings.
    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is neither json nor yaml.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// Flat key → message map for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create a catalog from an existing map.
    pub fn new(locale: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            messages,
        }
    }

    /// Built-in English catalog.
    ///
    /// An unparsable embedded file yields an empty catalog, so every key falls
    /// back to itself.
    pub fn english() -> Self {
        Self::from_json_str("en", EN_MESSAGES).unwrap_or_else(|err| {
            warn!(
                name: "i18n.catalog.invalid",
                locale = "en",
                error = %err,
                "Built-in catalog is invalid, using an empty one"
            );
            Self::new("en", HashMap::new())
        })
    }

    /// Parse a JSON object of strings.
    pub fn from_json_str(locale: impl Into<String>, json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(locale, serde_json::from_str(json)?))
    }

    /// Parse a YAML mapping of strings.
    pub fn from_yaml_str(locale: impl Into<String>, yaml: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(locale, serde_yaml::from_str(yaml)?))
    }

    /// Load a catalog file, picking the parser from its extension.
    pub fn load(locale: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(locale, &txt),
            Some("yaml" | "yml") => Self::from_yaml_str(locale, &txt),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    #[must_use]
    pub fn merged_with(mut self, other: Self) -> Self {
        self.messages.extend(other.messages);
        self.locale = other.locale;
        self
    }

    /// Locale tag of the catalog.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Message for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MessageCatalog {
    /// Missing keys render as the key itself.
    fn resolve(&self, key: &str) -> String {
        if let Some(message) = self.get(key) {
            return message.to_string();
        }
        warn!(
            name: "i18n.message.missing",
            locale = %self.locale,
            key = %key,
            "Missing message, falling back to key"
        );
        key.to_string()
    }
}
