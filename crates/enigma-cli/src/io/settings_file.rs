// crates/enigma-cli/src/io/settings_file.rs

use anyhow::{Context, Result};
use enigma_core::EncryptionSettings;

/// Load a TOML settings file.
pub fn load_settings(path: &str) -> Result<EncryptionSettings> {
    let content = std::fs::read_to_string(path).with_context(|| format!("read settings {path}"))?;
    let settings: EncryptionSettings =
        toml::from_str(&content).with_context(|| format!("parse settings {path}"))?;
    Ok(settings)
}

pub fn to_toml(settings: &EncryptionSettings) -> Result<String> {
    toml::to_string_pretty(settings).context("serialize settings")
}

/// Save settings as TOML, replacing any existing file.
pub fn save_settings(path: &str, settings: &EncryptionSettings) -> Result<()> {
    let text = to_toml(settings)?;
    std::fs::write(path, text).with_context(|| format!("write settings {path}"))?;
    Ok(())
}
