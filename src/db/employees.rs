//! Employee storage operations.

use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use std::path::Path;

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name) VALUES (?1)";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, name FROM employees ORDER BY name";
const SELECT_BY_ID: &str = "SELECT id, name FROM employees WHERE id = ?1";
const SELECT_BY_NAME: &str = "SELECT id, name FROM employees WHERE name = ?1";

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}

pub struct Employees {
    conn: Connection,
}

impl Employees {
    pub fn new(db_path: &Path) -> Result<Self> {
        let db = Db::new(db_path)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new employee and returns its id.
    ///
    /// Fails with [`Error::DuplicateName`] when an employee with exactly
    /// that name already exists (case-sensitive, as in the original forms).
    pub fn create(&mut self, name: &str) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if self.get_by_name(name)?.is_some() {
            return Err(Error::DuplicateName(format!("employee '{}'", name)));
        }
        self.conn.execute(INSERT_EMPLOYEE, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let rows = stmt
            .query_map([], |row| Ok(Employee { id: row.get(0)?, name: row.get(1)? }))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(SELECT_BY_ID, params![id], |row| Ok(Employee { id: row.get(0)?, name: row.get(1)? }))
            .optional()?;
        Ok(employee)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(SELECT_BY_NAME, params![name], |row| Ok(Employee { id: row.get(0)?, name: row.get(1)? }))
            .optional()?;
        Ok(employee)
    }

    /// Deletes an employee; referencing work logs are removed by cascade.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_EMPLOYEE, params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("employee {}", id)));
        }
        Ok(())
    }
}
