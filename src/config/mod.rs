mod config_import;

use crate::{
    app_dir,
    domain::Selection,
    error::{PlaybackError, Result},
};
use config_import::{AssetsImport, ConfigImport, GeneralImport};
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub selection: Selection,
    pub shutdown: bool,
    pub folder: String,
    pub reciter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::from(&ConfigImport::default())
    }
}

impl From<&ConfigImport> for AppConfig {
    fn from(import: &ConfigImport) -> Self {
        let selection = match Selection::from_label(&import.config.selection) {
            Some(s) => s,
            None => {
                tracing::warn!(
                    "Unknown selection {:?} in config, using default",
                    import.config.selection
                );
                Selection::default()
            }
        };

        AppConfig {
            selection,
            shutdown: import.config.shutdown.enabled(),
            folder: import.assets.folder.clone(),
            reciter: import.assets.reciter.clone(),
        }
    }
}

impl From<&AppConfig> for ConfigImport {
    fn from(config: &AppConfig) -> Self {
        ConfigImport {
            config: GeneralImport {
                selection: config.selection.label(),
                shutdown: config.shutdown.into(),
            },
            assets: AssetsImport {
                folder: config.folder.clone(),
                reciter: config.reciter.clone(),
            },
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_str = std::fs::read_to_string(path.as_ref())?;
        let import = toml::from_str::<ConfigImport>(&file_str)
            .map_err(|e| PlaybackError::ConfigParse(e.to_string()))?;

        Ok(Self::from(&import))
    }

    /// Reads the config, writing defaults first if the file does not exist.
    /// A malformed file is logged and replaced by defaults in memory.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!("Creating default config at {}", path.display());
            let config = AppConfig::default();
            config.save_to_file(path)?;
            return Ok(config);
        }

        match Self::load_from_file(path) {
            Err(PlaybackError::ConfigParse(e)) => {
                tracing::warn!("{e}; falling back to defaults");
                Ok(AppConfig::default())
            }
            other => other,
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(&ConfigImport::from(self))
            .map_err(|e| PlaybackError::ConfigParse(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml_str)?;

        Ok(())
    }
}

pub fn default_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILENAME))
}
