use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Where and how cocktail pages are fetched
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Site root that relative links are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the cocktail index page, relative to `base_url`
    #[serde(default = "default_list_path")]
    pub list_path: String,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_path: default_list_path(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://www.iba-world.com".to_string()
}

fn default_list_path() -> String {
    "index.php?option=com_content&view=article&id=88&Itemid=532".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; IbaImport/1.0)".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with IBA__ prefix
    /// 2. iba.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: IBA__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("iba")
    }

    /// Same as [`Settings::load`], reading the optional file `name` (extension
    /// inferred) instead of `iba`.
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name(name).required(false))
            // Use double underscore as separator: IBA__BASE_URL
            .add_source(
                Environment::with_prefix("IBA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
