//! # PathStore - A Virtual Filesystem in a SQL Table
//!
//! PathStore stores files and directories as rows of a single table and
//! emulates a directory tree on top of the flat `path` column. SQLite,
//! PostgreSQL, and MySQL are supported via SQLx.
//!
//! ## Semantics
//!
//! - **Paths**: normalized, `/`-delimited, unique per table
//! - **Directories**: explicit rows from `create_dir`, or implied by the
//!   paths of their descendants; both behave the same
//! - **Subtrees**: `rename`, `copy`, and `delete_dir` act on an entry and
//!   every entry below it
//! - **Listing**: non-recursive listings materialize implied directories
//!
//! ## Example
//!
//! ```rust,ignore
//! use pathstore::{Config, FilesystemAdapter, PathStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PathStore::sqlite("files.db").await?;
//!
//!     store.write("notes/todo.txt", b"buy milk", &Config::new()).await?;
//!     store.rename("notes", "archive/notes").await?;
//!
//!     for entry in store.list_contents("", false).await? {
//!         println!("{} ({})", entry.path, entry.kind);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod backend;
pub mod config;
pub mod error;
pub mod listing;
pub mod mime;
pub mod path;
pub mod schema;
mod sql;

pub use adapter::{FilesystemAdapter, Metadata};
pub use backend::{BackendType, PathStore, PathStoreConfig, SqlBackendConfig};
pub use config::Config;
pub use error::{Result, SqlError};
pub use mime::{DefaultMimeGuesser, MimeGuesser};
pub use schema::EntryType;
