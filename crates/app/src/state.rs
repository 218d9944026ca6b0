//! Application state management

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fitfizz_core::{Database, Error, Result, WellnessStore};

use crate::config::AppConfig;

/// Main application state
pub struct AppState {
    pub store: WellnessStore<Database>,
    data_dir: PathBuf,
}

impl AppState {
    /// Open the store inside `data_dir`, creating the directory if needed
    pub fn open(data_dir: &Path, config: &AppConfig) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;

        let db = Database::open(data_dir.join(&config.database_file))?;
        tracing::debug!(
            data_dir = %data_dir.display(),
            schema_version = db.schema_version(),
            "Store opened"
        );

        Ok(Self {
            store: WellnessStore::new(db),
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the data directory: an explicit override or the platform default
    pub fn data_path(override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir);
        }

        let dirs = ProjectDirs::from("dev", "fitfizz", "fitfizz").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }
}
