use anyhow::Context;
use deckguard_security::{RedactionRule, RedactionRuleSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for deckguard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub redaction: RedactionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Applied in the order listed
    #[serde(default = "default_rules")]
    pub rules: Vec<RedactionRule>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_rules() -> Vec<RedactionRule> {
    RedactionRuleSet::default_rules()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Compile the configured rules; an invalid rule fails the whole set
    pub fn rule_set(&self) -> anyhow::Result<RedactionRuleSet> {
        RedactionRuleSet::new(self.redaction.rules.iter().cloned())
            .context("Invalid redaction rule in config")
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "deckguard", "deckguard") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.deckguard/config.toml")
        }
    }
}
