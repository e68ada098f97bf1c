// On-disk byte store keyed by resolved paths under two well-known roots.

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use crate::config::{FetchOptions, StoreConfig};

/// Path-keyed byte store over the caches and documents roots.
///
/// Carries no metadata: an entry exists exactly when a file is present at the
/// resolved path. Writes are whole-file overwrites; concurrent writers to the
/// same path race at the filesystem level and the last one wins.
#[derive(Debug, Clone)]
pub struct DiskStore {
    caches_root: PathBuf,
    documents_root: PathBuf,
}

impl DiskStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            caches_root: config.caches_dir.clone(),
            documents_root: config.documents_dir.clone(),
        }
    }

    /// Join the root selected by `options.store_in_caches` with a file name.
    /// Pure, no I/O.
    pub fn resolve(&self, name: &str, options: &FetchOptions) -> PathBuf {
        let root = if options.store_in_caches {
            &self.caches_root
        } else {
            &self.documents_root
        };
        root.join(name)
    }

    pub async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    pub async fn read(&self, path: &Path) -> io::Result<Bytes> {
        let data = fs::read(path).await?;
        debug!("store read {} bytes from {}", data.len(), path.display());
        Ok(Bytes::from(data))
    }

    /// Overwrite `path` with `bytes`, creating the root directory if needed.
    pub async fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, bytes).await?;
        debug!("store wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    pub async fn delete(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await?;
        debug!("store deleted {}", path.display());
        Ok(())
    }
}
