//! Public file store for uploaded pictures.
//!
//! Files are written under a configurable root with a UUID-derived name
//! (original extension kept) and addressed by the relative path that gets
//! persisted on the owning row, e.g. `spots/0be4…c1.jpg`. The root is served
//! read-only at `/storage` by the router.

use std::path::{Path, PathBuf};

use uuid::Uuid;

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    /// Store `bytes` under `folder/`, returning the relative path.
    ///
    /// The stored name is a fresh UUID so concurrent uploads of identically
    /// named files never collide. The original extension is preserved so the
    /// static file server can infer a content type.
    pub async fn put_file(
        &self,
        folder: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        let ext = Path::new(original_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let relative = format!("{folder}/{}{ext}", Uuid::new_v4());

        let full = self.root.join(&relative);
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full, bytes).await?;

        Ok(relative)
    }

    /// Absolute path of a stored relative path.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
