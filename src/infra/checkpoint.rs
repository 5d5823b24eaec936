// ============================================================
// Layer 6 — Checkpoint Store
// ============================================================
// Saves and restores corpus snapshots as JSON files.
//
// What lives in the saves directory:
//   <step>.checkpoint.json   ← corpus after a filter step
//   extracted_tokens.json    ← parsed corpus cache (not a checkpoint)
//   settings.json            ← effective settings of the last run
//
// Every write goes to a hidden temp file in the same directory and
// is renamed into place, so a reader never sees a half-written
// snapshot. Listing rescans the directory on every call; files
// dropped in by hand show up on the next call.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::domain::corpus::Corpus;
use crate::domain::error::CheckpointError;

/// Suffix that marks a file in the saves directory as a checkpoint
pub const CHECKPOINT_SUFFIX: &str = ".checkpoint.json";

/// File name of the parsed corpus cache
pub const CACHE_FILE: &str = "extracted_tokens.json";

/// Can `name` be used as a checkpoint name (and therefore a file name)?
pub fn is_valid_checkpoint_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[derive(Serialize)]
struct CheckpointFileRef<'a> {
    name:  &'a str,
    lines: &'a Corpus,
}

// `name` is informational only; the file name is authoritative.
#[derive(Deserialize)]
struct CheckpointFile {
    lines: Corpus,
}

/// Manages the checkpoint directory.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    /// Open the store, creating the directory (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CheckpointError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| CheckpointError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn checkpoint_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{CHECKPOINT_SUFFIX}"))
    }

    /// Persist `corpus` under `name`, replacing an older checkpoint of the
    /// same name. Returns the file written.
    pub fn save(&self, name: &str, corpus: &Corpus) -> Result<PathBuf, CheckpointError> {
        if !is_valid_checkpoint_name(name) {
            return Err(CheckpointError::InvalidName(name.to_string()));
        }
        let path = self.checkpoint_path(name);
        self.write_json(&path, &CheckpointFileRef { name, lines: corpus })?;
        tracing::debug!("Saved checkpoint '{}' ({} lines)", name, corpus.len());
        Ok(path)
    }

    /// Names of all checkpoints currently on disk, sorted.
    pub fn list(&self) -> Result<Vec<String>, CheckpointError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| CheckpointError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CheckpointError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(CHECKPOINT_SUFFIX) {
                if is_valid_checkpoint_name(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load the checkpoint `name`.
    ///
    /// Fails with [`CheckpointError::NotFound`] if it is not listed, or if
    /// the file disappears between listing and reading.
    pub fn load(&self, name: &str) -> Result<Corpus, CheckpointError> {
        if !self.list()?.iter().any(|n| n == name) {
            return Err(CheckpointError::NotFound(name.to_string()));
        }
        let path = self.checkpoint_path(name);
        tracing::debug!("Restoring checkpoint from: {}", path.display());

        match self.read_json::<CheckpointFile>(&path) {
            Ok(Some(file)) => Ok(file.lines),
            Ok(None) => Err(CheckpointError::NotFound(name.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Cache the freshly parsed corpus.
    pub fn save_cache(&self, corpus: &Corpus) -> Result<PathBuf, CheckpointError> {
        let path = self.dir.join(CACHE_FILE);
        self.write_json(&path, corpus)?;
        Ok(path)
    }

    /// The cached parsed corpus, if one was written before.
    pub fn load_cache(&self) -> Result<Option<Corpus>, CheckpointError> {
        self.read_json(&self.dir.join(CACHE_FILE))
    }

    /// Write any serialisable value next to the checkpoints.
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), CheckpointError> {
        let bytes = serde_json::to_vec(value).map_err(|source| CheckpointError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("snapshot");
        let tmp = self.dir.join(format!(".{file_name}.tmp"));

        fs::write(&tmp, bytes)
            .and_then(|_| fs::rename(&tmp, path))
            .map_err(|source| CheckpointError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Read a JSON file; `Ok(None)` when it does not exist.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, CheckpointError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CheckpointError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CheckpointError::Format {
                path: path.to_path_buf(),
                source,
            })
    }
}
