use crate::theme::Theme;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Locale tag of the message catalog
    #[arg(long, env = "LOCALE")]
    pub locale: Option<String>,

    /// Message catalog file (json or yaml) merged over the built-in English messages
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub i18n: I18nConfig,
    #[serde(default)]
    pub theme: Theme,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct I18nConfig {
    pub locale: String,
    #[serde(default)]
    pub catalog_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Theme::default();
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("i18n.locale", "en")?
            .set_default("theme.grey_color_20", defaults.grey_color_20)?
            .set_default("theme.text_color", defaults.text_color)?
            .set_default("logging.json", false)?;

        // Explicit file must exist; the working-directory fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE));
        }

        // E.g. BADGE_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("BADGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // clap already folded its env vars into `cli`, so these win over everything above.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(locale) = cli.locale {
            builder = builder.set_override("i18n.locale", locale)?;
        }
        if let Some(catalog) = cli.catalog {
            builder = builder.set_override("i18n.catalog_path", catalog)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
