use super::BlobStore;
use crate::error::{CataError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based blob storage. Each key maps to `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CataError::Io)?;
        }
        Ok(())
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(CataError::Io)?;
        Ok(Some(content))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.blob_path(key), value).map_err(CataError::Io)?;
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.blob_path(key).exists()
    }
}
