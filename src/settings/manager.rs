use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::paths;
use crate::provider::ProviderKind;

/// Settings persisted per provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Language code translations are produced in.
    pub target_lang: Option<String>,
}

/// The complete settings file structure.
///
/// Corresponds to `~/.config/quicktr/settings.toml`. API keys are never
/// written here; they live in the credential store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Selected translation service, stored under its wire tag.
    pub provider: Option<ProviderKind>,
    #[serde(default)]
    pub google: ProviderSettings,
    #[serde(default)]
    pub microsoft: ProviderSettings,
}

impl SettingsFile {
    pub fn target_lang(&self, provider: ProviderKind) -> Option<&str> {
        match provider {
            ProviderKind::Google => self.google.target_lang.as_deref(),
            ProviderKind::Microsoft => self.microsoft.target_lang.as_deref(),
        }
    }

    pub fn set_target_lang(&mut self, provider: ProviderKind, code: impl Into<String>) {
        let settings = match provider {
            ProviderKind::Google => &mut self.google,
            ProviderKind::Microsoft => &mut self.microsoft,
        };
        settings.target_lang = Some(code.into());
    }
}

/// Manages loading and saving the settings file.
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManager {
    /// Creates a settings manager over `$XDG_CONFIG_HOME/quicktr/settings.toml`
    /// (or `~/.config/quicktr/settings.toml`).
    pub fn new() -> Self {
        Self {
            settings_path: paths::config_dir().join("settings.toml"),
        }
    }

    pub const fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    pub fn load(&self) -> Result<SettingsFile> {
        let contents = fs::read_to_string(&self.settings_path).with_context(|| {
            format!(
                "Failed to read settings file: {}",
                self.settings_path.display()
            )
        })?;

        let settings: SettingsFile =
            toml::from_str(&contents).context("Failed to parse settings file")?;

        Ok(settings)
    }

    pub fn load_or_default(&self) -> SettingsFile {
        self.load().unwrap_or_default()
    }

    pub fn save(&self, settings: &SettingsFile) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;

        atomic_write(&self.settings_path, &contents).with_context(|| {
            format!(
                "Failed to write settings file: {}",
                self.settings_path.display()
            )
        })?;

        Ok(())
    }
}
