//! Table schema definitions for PathStore
//!
//! One table holds every entry. Columns: `id`, `path` (unique), `contents`,
//! `size`, `type`, `mimetype`, `timestamp`. The DDL for each dialect lives in
//! `migrations/`, with `{{table}}` standing in for the configured table name.

use crate::error::{Result, SqlError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default storage table name
pub const DEFAULT_TABLE: &str = "file_storage";

/// Token replaced by the table name in migration files
pub const TABLE_TOKEN: &str = "{{table}}";

/// Path segment delimiter
pub const DELIMITER: char = '/';

/// Kind of entry stored in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "file",
            EntryType::Dir => "dir",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryType::Dir)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(EntryType::File),
            "dir" => Ok(EntryType::Dir),
            other => Err(SqlError::InvalidEntryType(other.to_string())),
        }
    }
}

/// Check that a table name is a plain SQL identifier.
///
/// The name is interpolated into every statement, so anything beyond
/// `[A-Za-z_][A-Za-z0-9_]*` is rejected.
pub fn validate_table_name(table: &str) -> Result<()> {
    let mut chars = table.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(SqlError::Config(format!("invalid table name '{}'", table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_round_trips_through_str() {
        assert_eq!("file".parse::<EntryType>().unwrap(), EntryType::File);
        assert_eq!("dir".parse::<EntryType>().unwrap(), EntryType::Dir);
        assert!("symlink".parse::<EntryType>().is_err());
        assert_eq!(EntryType::Dir.to_string(), "dir");
    }

    #[test]
    fn test_table_names() {
        assert!(validate_table_name(DEFAULT_TABLE).is_ok());
        assert!(validate_table_name("_files2").is_ok());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("2files").is_err());
        assert!(validate_table_name("files; DROP TABLE x").is_err());
        assert!(validate_table_name("{{%file_storage}}").is_err());
    }
}
