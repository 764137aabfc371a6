//! The filesystem-facing contract implemented by [`PathStore`](crate::PathStore).

use crate::config::Config;
use crate::error::{Result, SqlError};
use crate::path;
use crate::schema::EntryType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tokio::io::AsyncRead;

/// Metadata for one file or directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Row identity; `None` for implicit directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub path: String,
    pub dirname: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Seconds since the Unix epoch; `None` for implicit directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Metadata {
    /// Synthetic entry for a directory that only exists through its descendants.
    pub fn implicit_dir(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: None,
            dirname: path::dirname(&path).to_string(),
            path,
            kind: EntryType::Dir,
            size: None,
            mimetype: None,
            timestamp: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryType::Dir
    }

    /// True when the entry was synthesized rather than read from a row.
    pub fn is_implicit(&self) -> bool {
        self.id.is_none()
    }
}

/// Filesystem adapter contract
///
/// Absence is reported through `Ok(None)` / `Ok(false)`; `Err` always means
/// the operation itself failed.
#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// Store `contents` at `path`, replacing any existing file there.
    async fn write(&self, path: &str, contents: &[u8], config: &Config) -> Result<Metadata>;

    /// Buffer `stream` fully and [`write`](Self::write) it.
    async fn write_stream(
        &self,
        path: &str,
        stream: &mut (dyn AsyncRead + Send + Unpin),
        config: &Config,
    ) -> Result<Metadata>;

    /// Replace the contents of an existing file.
    async fn update(&self, path: &str, contents: &[u8], config: &Config) -> Result<Metadata>;

    async fn update_stream(
        &self,
        path: &str,
        stream: &mut (dyn AsyncRead + Send + Unpin),
        config: &Config,
    ) -> Result<Metadata>;

    /// Move an entry, and for directories every entry below it.
    async fn rename(&self, path: &str, new_path: &str) -> Result<()>;

    /// Duplicate an entry (recursively for directories). `false` when the
    /// source does not exist.
    async fn copy(&self, path: &str, new_path: &str) -> Result<bool>;

    /// Remove exactly the entry at `path`.
    async fn delete(&self, path: &str) -> Result<bool>;

    /// Remove a directory and everything below it.
    async fn delete_dir(&self, dirname: &str) -> Result<bool>;

    async fn create_dir(&self, dirname: &str, config: &Config) -> Result<Metadata>;

    async fn has(&self, path: &str) -> Result<bool>;

    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>>;

    async fn read_stream(&self, path: &str) -> Result<Option<Cursor<Vec<u8>>>>;

    async fn list_contents(&self, directory: &str, recursive: bool) -> Result<Vec<Metadata>>;

    async fn get_metadata(&self, path: &str) -> Result<Option<Metadata>>;

    async fn get_size(&self, path: &str) -> Result<Option<Metadata>> {
        self.get_metadata(path).await
    }

    async fn get_mimetype(&self, path: &str) -> Result<Option<Metadata>> {
        self.get_metadata(path).await
    }

    async fn get_timestamp(&self, path: &str) -> Result<Option<Metadata>> {
        self.get_metadata(path).await
    }

    async fn get_visibility(&self, path: &str) -> Result<Option<Metadata>> {
        Err(SqlError::Unsupported(format!(
            "visibility is not stored for {}",
            path
        )))
    }

    async fn set_visibility(&self, path: &str, _visibility: &str) -> Result<Metadata> {
        Err(SqlError::Unsupported(format!(
            "visibility is not stored for {}",
            path
        )))
    }
}
