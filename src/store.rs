use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::model::FrequencyModel;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no model named {0:?} in the store")]
    NotFound(String),

    #[error("stored model {name:?} failed to deserialize: {source}")]
    Corrupt {
        name: String,
        source: serde_json::Error,
    },

    #[error("model store I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// Durable storage for named frequency models.
///
/// Each logical name maps to one JSON artifact inside the store directory.
/// Saving replaces the artifact atomically, so a crash mid-save leaves the
/// previous version intact rather than a truncated file.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Whether a model is persisted under `name`, without loading it.
    pub fn exists(&self, name: &str) -> bool {
        self.artifact_path(name).is_file()
    }

    /// Write `model` under `name`, overwriting any prior artifact.
    pub fn save(&self, model: &FrequencyModel, name: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let tmp = NamedTempFile::new_in(&self.dir)?;
        let mut writer = BufWriter::new(&tmp);
        serde_json::to_writer(&mut writer, model).map_err(io::Error::from)?;
        writer.flush()?;
        drop(writer);

        tmp.persist(self.artifact_path(name))
            .map_err(|e| StoreError::Io(e.error))?;

        debug!("saved model {:?} ({} distinct tokens)", name, model.len());
        Ok(())
    }

    /// Read the model persisted under `name`.
    ///
    /// A missing artifact is `NotFound`; an artifact that exists but does
    /// not decode is `Corrupt`. Callers must not conflate the two.
    pub fn load(&self, name: &str) -> Result<FrequencyModel, StoreError> {
        let file = match File::open(self.artifact_path(name)) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Corrupt {
            name: name.to_string(),
            source,
        })
    }
}
