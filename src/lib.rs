//! Connector release-stage badge
//!
//! A Leptos SSR component that shows a connector's release stage as a small
//! localized chip (or an icon for generally available connectors), optionally
//! wrapped in a description tooltip, plus an Axum server that previews it.
//!
//! # Modules
//!
//! - [`connector`]: Release stage enumeration
//! - [`i18n`]: Translator trait and message catalogs
//! - [`theme`]: Theme tokens used by components
//! - [`ui`]: Leptos components and the preview page
//! - [`server`]: Axum routes serving the preview

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod connector;
pub mod i18n;
pub mod server;
pub mod theme;
pub mod ui;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::i18n::{CatalogError, MessageCatalog, SharedTranslator};
use crate::theme::SharedTheme;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Message lookup for badge labels and descriptions.
    pub i18n: SharedTranslator,
    /// Theme tokens for badge chips.
    pub theme: SharedTheme,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state from configuration, loading the message catalog.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, CatalogError> {
        let mut catalog = MessageCatalog::english();

        if let Some(path) = &config.i18n.catalog_path {
            let overlay = MessageCatalog::load(config.i18n.locale.clone(), path)?;
            info!(
                name: "i18n.catalog.loaded",
                locale = %overlay.locale(),
                path = %path,
                messages = overlay.len(),
                "Message catalog loaded"
            );
            catalog = catalog.merged_with(overlay);
        } else if config.i18n.locale != catalog.locale() {
            warn!(
                name: "i18n.catalog.fallback",
                locale = %config.i18n.locale,
                "No catalog configured for locale, using built-in English messages"
            );
        }

        Ok(Self {
            i18n: Arc::new(catalog),
            theme: Arc::new(config.theme.clone()),
            config,
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
