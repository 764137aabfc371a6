//! SQL statements for each supported dialect.
//!
//! Statements are rendered once per store, with the table name and the
//! dialect's placeholder and escape syntax already applied.

use crate::backend::BackendType;

const META_COLUMNS: &str = "id, path, size, type, mimetype, timestamp";
const FULL_COLUMNS: &str = "id, path, contents, size, type, mimetype, timestamp";

/// Rendered statement set for one table
#[derive(Debug, Clone)]
pub(crate) struct Statements {
    /// (path, contents, size, mimetype, timestamp)
    pub upsert_file: String,
    /// (path, contents, size, type, mimetype, timestamp)
    pub insert_entry: String,
    /// (contents, size, mimetype, timestamp, id)
    pub update_file: String,
    /// (path, id)
    pub update_path: String,
    /// (path)
    pub select_metadata: String,
    /// (path)
    pub select_contents: String,
    /// (path)
    pub select_exists: String,
    /// (path)
    pub delete_path: String,
    /// (id)
    pub delete_id: String,
    /// ()
    pub list_all: String,
    /// (path, descendant pattern)
    pub list_under: String,
    /// (path, descendant pattern)
    pub select_subtree: String,
    /// (descendant pattern)
    pub select_descendant_paths: String,
}

impl Statements {
    pub fn new(backend: BackendType, table: &str) -> Self {
        let p = |n: usize| backend.placeholder(n);
        let escape = backend.like_escape();
        let under = format!(
            "path = {} OR path LIKE {} ESCAPE {}",
            p(1),
            p(2),
            escape
        );

        let upsert_tail = match backend {
            #[cfg(feature = "sqlite")]
            BackendType::Sqlite => UPSERT_EXCLUDED,
            #[cfg(feature = "postgres")]
            BackendType::Postgres => UPSERT_EXCLUDED,
            #[cfg(feature = "mysql")]
            BackendType::Mysql => {
                "ON DUPLICATE KEY UPDATE contents = VALUES(contents), size = VALUES(size), \
                 type = VALUES(type), mimetype = VALUES(mimetype), timestamp = VALUES(timestamp)"
            }
        };

        Self {
            upsert_file: format!(
                "INSERT INTO {table} (path, contents, size, type, mimetype, timestamp) \
                 VALUES ({}, {}, {}, 'file', {}, {}) {upsert_tail}",
                p(1),
                p(2),
                p(3),
                p(4),
                p(5)
            ),
            insert_entry: format!(
                "INSERT INTO {table} (path, contents, size, type, mimetype, timestamp) \
                 VALUES ({}, {}, {}, {}, {}, {})",
                p(1),
                p(2),
                p(3),
                p(4),
                p(5),
                p(6)
            ),
            update_file: format!(
                "UPDATE {table} SET contents = {}, size = {}, mimetype = {}, timestamp = {} WHERE id = {}",
                p(1),
                p(2),
                p(3),
                p(4),
                p(5)
            ),
            update_path: format!("UPDATE {table} SET path = {} WHERE id = {}", p(1), p(2)),
            select_metadata: format!("SELECT {META_COLUMNS} FROM {table} WHERE path = {}", p(1)),
            select_contents: format!(
                "SELECT contents FROM {table} WHERE path = {} AND type = 'file'",
                p(1)
            ),
            select_exists: format!("SELECT id FROM {table} WHERE path = {} LIMIT 1", p(1)),
            delete_path: format!("DELETE FROM {table} WHERE path = {}", p(1)),
            delete_id: format!("DELETE FROM {table} WHERE id = {}", p(1)),
            list_all: format!("SELECT {META_COLUMNS} FROM {table} ORDER BY path"),
            list_under: format!("SELECT {META_COLUMNS} FROM {table} WHERE {under} ORDER BY path"),
            select_subtree: format!("SELECT {FULL_COLUMNS} FROM {table} WHERE {under} ORDER BY path"),
            select_descendant_paths: format!(
                "SELECT path FROM {table} WHERE path LIKE {} ESCAPE {}",
                p(1),
                escape
            ),
        }
    }
}

#[cfg(any(feature = "sqlite", feature = "postgres"))]
const UPSERT_EXCLUDED: &str = "ON CONFLICT (path) DO UPDATE SET contents = excluded.contents, \
     size = excluded.size, type = excluded.type, mimetype = excluded.mimetype, \
     timestamp = excluded.timestamp";

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_statements() {
        let stmts = Statements::new(BackendType::Sqlite, "file_storage");
        assert_eq!(
            stmts.select_metadata,
            "SELECT id, path, size, type, mimetype, timestamp FROM file_storage WHERE path = ?"
        );
        assert_eq!(
            stmts.list_under,
            "SELECT id, path, size, type, mimetype, timestamp FROM file_storage \
             WHERE path = ? OR path LIKE ? ESCAPE '\\' ORDER BY path"
        );
        assert!(stmts.upsert_file.contains("ON CONFLICT (path) DO UPDATE"));
        assert!(stmts.update_path.ends_with("WHERE id = ?"));
        assert_eq!(
            stmts.select_descendant_paths,
            "SELECT path FROM file_storage WHERE path LIKE ? ESCAPE '\\'"
        );
    }
}
