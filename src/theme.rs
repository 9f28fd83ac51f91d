//! Theme tokens consumed by UI components.

use std::sync::Arc;

use serde::Deserialize;

/// Source of the semantic colors a component needs.
pub trait ThemeProvider: Send + Sync {
    /// Light grey fill used behind stage chips.
    fn grey_color_20(&self) -> &str;
    /// Default foreground text color.
    fn text_color(&self) -> &str;
}

/// Shared handle to a theme.
pub type SharedTheme = Arc<dyn ThemeProvider>;

/// Static theme, typically loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub grey_color_20: String,
    pub text_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grey_color_20: "#e8e8ed".to_string(),
            text_color: "#1a194d".to_string(),
        }
    }
}

impl ThemeProvider for Theme {
    fn grey_color_20(&self) -> &str {
        &self.grey_color_20
    }

    fn text_color(&self) -> &str {
        &self.text_color
    }
}
