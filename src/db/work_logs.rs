//! Work log storage: transactional inserts, filtered queries with resolved
//! names, the hours aggregate, and deletion.
//!
//! All filter criteria are optional and conjunctive; the WHERE clause is
//! assembled from whichever criteria are present. Two orderings exist on
//! purpose: listings show newest entries first, exports read oldest first.

use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use crate::libs::worklog::{LogFilter, LogOrder, LogRow, NewLog, DATE_FORMAT};
use rusqlite::{params, params_from_iter, types::Value, Connection, OptionalExtension};
use std::path::Path;

const INSERT_LOG: &str = "INSERT INTO work_logs (date, hours, description, employee_id, workplace_id, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const DELETE_LOG: &str = "DELETE FROM work_logs WHERE id = ?1";
const EXISTS_EMPLOYEE: &str = "SELECT 1 FROM employees WHERE id = ?1";
const EXISTS_WORKPLACE: &str = "SELECT 1 FROM workplaces WHERE id = ?1";

const SELECT_LOGS: &str = "SELECT l.id, e.name, w.name, l.date, l.hours, l.description, l.created_at
    FROM work_logs l
    JOIN employees e ON e.id = l.employee_id
    JOIN workplaces w ON w.id = l.workplace_id";
const SUM_HOURS: &str = "SELECT COALESCE(SUM(l.hours), 0)
    FROM work_logs l
    JOIN employees e ON e.id = l.employee_id
    JOIN workplaces w ON w.id = l.workplace_id";
const ORDER_DISPLAY: &str = "ORDER BY l.date DESC, l.created_at DESC, l.id DESC";
const ORDER_EXPORT: &str = "ORDER BY l.date ASC, l.created_at ASC, l.id ASC";

pub struct WorkLogs {
    conn: Connection,
}

impl WorkLogs {
    pub fn new(db_path: &Path) -> Result<Self> {
        let db = Db::new(db_path)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a validated log entry and returns its id.
    ///
    /// Parent lookups and the insert run in one transaction; a missing
    /// employee or workplace rolls the whole operation back with
    /// [`Error::NotFound`]. Orphan creation is therefore impossible.
    pub fn insert(&mut self, log: &NewLog) -> Result<i64> {
        let tx = self.conn.transaction()?;

        let employee = tx.query_row(EXISTS_EMPLOYEE, params![log.employee_id], |_| Ok(())).optional()?;
        if employee.is_none() {
            return Err(Error::NotFound(format!("employee {}", log.employee_id)));
        }
        let workplace = tx.query_row(EXISTS_WORKPLACE, params![log.workplace_id], |_| Ok(())).optional()?;
        if workplace.is_none() {
            return Err(Error::NotFound(format!("workplace {}", log.workplace_id)));
        }

        tx.execute(
            INSERT_LOG,
            params![
                log.date.format(DATE_FORMAT).to_string(),
                log.hours,
                log.description,
                log.employee_id,
                log.workplace_id
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    /// Fetches matching rows with employee and workplace names resolved.
    pub fn fetch(&mut self, filter: &LogFilter, order: LogOrder) -> Result<Vec<LogRow>> {
        let (clause, filter_params) = build_filter_clause(filter);
        let order_by = match order {
            LogOrder::Display => ORDER_DISPLAY,
            LogOrder::Export => ORDER_EXPORT,
        };

        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_LOGS, clause, order_by))?;
        let log_iter = stmt.query_map(params_from_iter(filter_params.iter()), |row| {
            Ok(LogRow {
                id: row.get(0)?,
                employee: row.get(1)?,
                workplace: row.get(2)?,
                date: row.get(3)?,
                hours: row.get(4)?,
                description: row.get(5)?,
                submitted_at: row.get(6)?,
            })
        })?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }
        Ok(logs)
    }

    /// Sum of hours over the filtered set, 0 when nothing matches.
    pub fn sum_hours(&mut self, filter: &LogFilter) -> Result<f64> {
        let (clause, filter_params) = build_filter_clause(filter);
        let sum = self
            .conn
            .query_row(&format!("{} {}", SUM_HOURS, clause), params_from_iter(filter_params.iter()), |row| row.get(0))?;
        Ok(sum)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_LOG, params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("work log {}", id)));
        }
        Ok(())
    }
}

/// Builds the conjunctive WHERE clause for the present filter criteria.
///
/// Returns an empty clause when no criterion is set. Date parameters are
/// bound as `YYYY-MM-DD` text, which compares correctly against the stored
/// date column.
fn build_filter_clause(filter: &LogFilter) -> (String, Vec<Value>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(employee_id) = filter.employee_id {
        values.push(Value::Integer(employee_id));
        conditions.push(format!("l.employee_id = ?{}", values.len()));
    }
    if let Some(workplace_id) = filter.workplace_id {
        values.push(Value::Integer(workplace_id));
        conditions.push(format!("l.workplace_id = ?{}", values.len()));
    }
    if let Some(name) = filter.name.as_deref() {
        values.push(Value::Text(name.to_lowercase()));
        conditions.push(format!("LOWER(e.name) LIKE '%' || ?{} || '%'", values.len()));
    }
    if let Some(from) = filter.from {
        values.push(Value::Text(from.format(DATE_FORMAT).to_string()));
        conditions.push(format!("l.date >= ?{}", values.len()));
    }
    if let Some(to) = filter.to {
        values.push(Value::Text(to.format(DATE_FORMAT).to_string()));
        conditions.push(format!("l.date <= ?{}", values.len()));
    }

    if conditions.is_empty() {
        (String::new(), values)
    } else {
        (format!("WHERE {}", conditions.join(" AND ")), values)
    }
}
