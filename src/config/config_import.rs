use serde::{Deserialize, Serialize};

/// On-disk shape of `config.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigImport {
    #[serde(default)]
    pub config: GeneralImport,
    #[serde(default)]
    pub assets: AssetsImport,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneralImport {
    #[serde(default)]
    pub selection: String,
    #[serde(default)]
    pub shutdown: FlagImport,
}

impl Default for GeneralImport {
    fn default() -> Self {
        GeneralImport {
            selection: crate::domain::Selection::default().label(),
            shutdown: FlagImport::default(),
        }
    }
}

/// Accepts both `shutdown = 1` and `shutdown = true`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagImport {
    Int(i64),
    Bool(bool),
}

impl Default for FlagImport {
    fn default() -> Self {
        FlagImport::Int(0)
    }
}

impl FlagImport {
    pub fn enabled(&self) -> bool {
        match *self {
            FlagImport::Int(i) => i != 0,
            FlagImport::Bool(b) => b,
        }
    }
}

impl From<bool> for FlagImport {
    fn from(value: bool) -> Self {
        FlagImport::Int(value as i64)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssetsImport {
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default = "default_reciter")]
    pub reciter: String,
}

impl Default for AssetsImport {
    fn default() -> Self {
        AssetsImport {
            folder: default_folder(),
            reciter: default_reciter(),
        }
    }
}

fn default_folder() -> String {
    crate::resolver::DEFAULT_FOLDER.to_string()
}

fn default_reciter() -> String {
    crate::resolver::DEFAULT_RECITER.to_string()
}
