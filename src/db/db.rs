use crate::db::migrations;
use crate::libs::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "worklogs.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file, enables foreign keys and applies any
    /// pending migrations.
    pub fn new(path: &Path) -> Result<Db> {
        let conn = Self::open(path)?;
        let mut db = Db { conn };
        migrations::init_with_migrations(&mut db.conn)?;
        Ok(db)
    }

    /// Opens the database file without running migrations.
    ///
    /// Used by the migration inspection commands, which must be able to
    /// read the version table as-is.
    pub fn new_without_migrations(path: &Path) -> Result<Connection> {
        Self::open(path)
    }

    fn open(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        // Cascade deletes depend on this pragma; it is off by default.
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }
}
