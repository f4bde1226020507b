use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

// Texts and tokenizer options live next to the code that uses them
use phonebook_core::{Messages, ParseOptions};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub parser: ParseOptions,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("phonebook"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/phonebook/config.json`, falling back to defaults when it is absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::write_default(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - messages.prompt: text printed before every command");
        println!("   - messages.help: text printed by the help command");
        println!("   - messages.error: line printed for a malformed command");
        println!("   - parser.collapse_whitespace: treat runs of spaces as one separator");
        println!();
        Ok(())
    }

    /// Write the default configuration to `config_path`, refusing to overwrite.
    pub fn write_default(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}
