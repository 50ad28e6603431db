use crate::{
    domain::Selection,
    error::{PlaybackError, Result},
};
use std::path::{Path, PathBuf};

pub const DEFAULT_FOLDER: &str = "Saad Al-Ghamidi";
pub const DEFAULT_RECITER: &str = "Shaikh Saad Al-Ghamdi";

/// Narrow view of the filesystem used to locate assets
pub trait AssetProbe {
    fn exists(&self, path: &Path) -> bool;
}

pub struct FsProbe;
impl AssetProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Maps a [`Selection`] onto an audio file.
///
/// Candidate roots are checked in order and the first one holding the asset
/// folder wins. Only the folder is probed; a missing file inside a present
/// folder surfaces later when the player tries to load it.
pub struct TrackResolver {
    probe: Box<dyn AssetProbe>,
    roots: Vec<PathBuf>,
    folder: String,
    reciter: String,
}

impl TrackResolver {
    pub fn new(probe: Box<dyn AssetProbe>, roots: Vec<PathBuf>) -> Self {
        TrackResolver {
            probe,
            roots,
            folder: DEFAULT_FOLDER.to_string(),
            reciter: DEFAULT_RECITER.to_string(),
        }
    }

    /// Working directory first, then the desktop
    pub fn with_default_roots() -> Self {
        let mut roots = Vec::with_capacity(2);

        if let Ok(cwd) = std::env::current_dir() {
            roots.push(cwd);
        }
        if let Some(desktop) = desktop_dir() {
            roots.push(desktop);
        }

        Self::new(Box::new(FsProbe), roots)
    }

    pub fn with_naming(mut self, folder: &str, reciter: &str) -> Self {
        self.folder = folder.to_string();
        self.reciter = reciter.to_string();
        self
    }

    pub fn file_name(&self, selection: Selection) -> String {
        format!("{} - {}.mp3", self.reciter, selection.label())
    }

    pub fn resolve(&self, selection: Selection) -> Result<PathBuf> {
        let candidates = self
            .roots
            .iter()
            .map(|root| root.join(&self.folder))
            .collect::<Vec<_>>();

        match candidates.iter().find(|dir| self.probe.exists(dir)) {
            Some(dir) => {
                tracing::debug!("Asset folder found: {}", dir.display());
                Ok(dir.join(self.file_name(selection)))
            }
            None => Err(PlaybackError::ResourceNotFound(candidates)),
        }
    }
}

fn desktop_dir() -> Option<PathBuf> {
    dirs::desktop_dir().or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
}
