//! Favorites persisted as a JSON array in a single file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{Favorite, Quote};

/// File name used when no explicit path is configured
pub const FAVORITES_FILE_NAME: &str = "favoriteQuotes.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write favorites: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted list. A missing or unreadable file yields an empty list.
    pub fn load(&self) -> Vec<Favorite> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No favorites file yet");
                return vec![];
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not read favorites");
                return vec![];
            }
        };

        match serde_json::from_str::<Option<Vec<Favorite>>>(&content) {
            Ok(favorites) => {
                let favorites = favorites.unwrap_or_default();
                tracing::info!(count = favorites.len(), "Favorites loaded");
                favorites
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Favorites file is corrupt, starting empty");
                vec![]
            }
        }
    }

    /// Replace the persisted list with `favorites`.
    pub fn save(&self, favorites: &[Favorite]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string(favorites)?;
        fs::write(&self.path, content)?;
        tracing::debug!(count = favorites.len(), "Favorites saved");
        Ok(())
    }
}

/// Remove `current` if it is already a favorite, otherwise append it.
pub fn toggle(current: &Quote, favorites: &[Favorite]) -> Vec<Favorite> {
    if favorites.iter().any(|f| f.matches(current)) {
        favorites
            .iter()
            .filter(|f| !f.matches(current))
            .cloned()
            .collect()
    } else {
        let mut updated = favorites.to_vec();
        updated.push(Favorite::from(current));
        updated
    }
}
