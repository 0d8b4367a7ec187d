use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot use {path:?} as download directory: {reason}")]
    Unusable { path: PathBuf, reason: String },
    #[error("writing {path:?} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Download directory for one batch.
///
/// Opened once before the first image is fetched. Every image is staged in
/// a temp file next to its target and renamed into place, so a name in the
/// directory always refers to a complete image. Saving the same name again
/// replaces the earlier image.
#[derive(Debug)]
pub struct DownloadDir {
    root: PathBuf,
}

impl DownloadDir {
    /// Creates `root` (and parents) if missing.
    pub fn open(root: &Path) -> Result<Self, PersistError> {
        let unusable = |reason: String| PersistError::Unusable {
            path: root.to_path_buf(),
            reason,
        };
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(unusable("not a directory".into())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(root).map_err(|e| unusable(e.to_string()))?;
            }
            Err(err) => return Err(unusable(err.to_string())),
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn save_image(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
        let target = self.root.join(filename);
        let failed = |source: io::Error| PersistError::Write {
            path: target.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.root).map_err(failed)?;
        staged.write_all(bytes).map_err(failed)?;
        staged.as_file().sync_all().map_err(failed)?;
        staged.persist(&target).map_err(|e| failed(e.error))?;
        Ok(target)
    }
}
