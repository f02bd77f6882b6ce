use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "storefront.config.json";

/// Storefront configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing the authored .html pages
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Where decorated pages are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Indent rendered markup
    #[serde(default)]
    pub pretty: bool,

    /// Store root prefixed to storefront links (e.g. "/en")
    #[serde(default)]
    pub root_path: String,

    /// Placeholders JSON file for translated messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<String>,

    /// Cart JSON file rendered into mini-cart blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart: Option<String>,
}

fn default_src_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", DEFAULT_CONFIG_NAME))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            pretty: false,
            root_path: String::new(),
            placeholders: None,
            cart: None,
        }
    }
}
