//! Workplace storage operations. Mirrors the employee storage: unique
//! names, cascade delete of referencing work logs.

use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use std::path::Path;

const INSERT_WORKPLACE: &str = "INSERT INTO workplaces (name) VALUES (?1)";
const DELETE_WORKPLACE: &str = "DELETE FROM workplaces WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, name FROM workplaces ORDER BY name";
const SELECT_BY_ID: &str = "SELECT id, name FROM workplaces WHERE id = ?1";
const SELECT_BY_NAME: &str = "SELECT id, name FROM workplaces WHERE name = ?1";

#[derive(Debug, Clone, Serialize)]
pub struct Workplace {
    pub id: i64,
    pub name: String,
}

pub struct Workplaces {
    conn: Connection,
}

impl Workplaces {
    pub fn new(db_path: &Path) -> Result<Self> {
        let db = Db::new(db_path)?;
        Ok(Self { conn: db.conn })
    }

    pub fn create(&mut self, name: &str) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if self.get_by_name(name)?.is_some() {
            return Err(Error::DuplicateName(format!("workplace '{}'", name)));
        }
        self.conn.execute(INSERT_WORKPLACE, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Workplace>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let rows = stmt
            .query_map([], |row| Ok(Workplace { id: row.get(0)?, name: row.get(1)? }))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Workplace>> {
        let workplace = self
            .conn
            .query_row(SELECT_BY_ID, params![id], |row| Ok(Workplace { id: row.get(0)?, name: row.get(1)? }))
            .optional()?;
        Ok(workplace)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Workplace>> {
        let workplace = self
            .conn
            .query_row(SELECT_BY_NAME, params![name], |row| Ok(Workplace { id: row.get(0)?, name: row.get(1)? }))
            .optional()?;
        Ok(workplace)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_WORKPLACE, params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("workplace {}", id)));
        }
        Ok(())
    }
}
