//! Configuration for the flashcard viewer.
//!
//! Loaded with figment from, in order of precedence (highest first):
//! 1. Environment variables prefixed with `OROPIC_`, nested with `__`
//!    (e.g. `OROPIC_ENDPOINT__HOST=10.0.0.5`)
//! 2. TOML file at `<config dir>/oropic-read/config.toml`
//! 3. Default values

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "oropic-read";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub window: WindowConfig,
    pub card: CardConfig,
}

/// Where the flashcard payload is fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Edge length of the square image on the front face.
    pub image_size: f32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: "192.168.149.76".to_string(),
            port: 5555,
            path: "/read_data".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 700.0,
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self { image_size: 200.0 }
    }
}

impl EndpointConfig {
    /// Full URL of the payload, e.g. `http://192.168.149.76:5555/read_data`.
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    /// A missing file is not an error; defaults and env vars still apply.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("OROPIC_").split("__"))
            .extract()?;

        config.validate()?;
        log::debug!("Loaded configuration (file: {:?})", config_file);
        Ok(config)
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.host.trim().is_empty() {
            return Err(Error::invalid_config("endpoint host must not be empty"));
        }
        if self.endpoint.port == 0 {
            return Err(Error::invalid_config("endpoint port must be greater than 0"));
        }
        if !self.endpoint.path.starts_with('/') {
            return Err(Error::invalid_config(format!(
                "endpoint path must start with '/': {}",
                self.endpoint.path
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(Error::invalid_config("window size must be positive"));
        }
        if self.card.image_size <= 0.0 {
            return Err(Error::invalid_config("card image_size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.endpoint.host, "192.168.149.76");
        assert_eq!(config.endpoint.port, 5555);
        assert_eq!(config.endpoint.path, "/read_data");
        assert_eq!(config.window.width, 500.0);
        assert_eq!(config.window.height, 700.0);
        assert_eq!(config.card.image_size, 200.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_url() {
        assert_eq!(
            EndpointConfig::default().url(),
            "http://192.168.149.76:5555/read_data"
        );
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.endpoint.host = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigValidation { .. })
        ));

        let mut config = Config::default();
        config.endpoint.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.endpoint.path = "read_data".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let mut config = Config::default();
        config.card.image_size = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.window.height = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[endpoint]
host = "127.0.0.1"
port = 8080

[card]
image_size = 120.0
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.endpoint.host, "127.0.0.1");
        assert_eq!(config.endpoint.port, 8080);
        // Unset keys keep their defaults
        assert_eq!(config.endpoint.path, "/read_data");
        assert_eq!(config.card.image_size, 120.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.endpoint, EndpointConfig::default());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[endpoint]\nport = 0\n").unwrap();

        assert!(matches!(
            Config::load_from(Some(path)),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.ends_with("oropic-read/config.toml"));
    }
}
