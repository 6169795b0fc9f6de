//! Database schema migration management and versioning.
//!
//! Maintains a `migrations` tracking table and applies pending schema
//! changes in version order during database initialization. Each run of
//! pending migrations executes inside a single transaction: either every
//! migration commits together with its tracking record, or none do.
//!
//! Seeding of the default employee and workplace lives here as well, as an
//! explicit step separate from schema evolution: it runs once at startup,
//! never lazily on a request path, and is idempotent.

use crate::libs::error::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Name given to the employee seeded into an empty database.
pub const SEED_EMPLOYEE: &str = "John Doe";
/// Name given to the workplace seeded into an empty database.
pub const SEED_WORKPLACE: &str = "Office";

/// A single schema change with its version and transformation logic.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: the three core tables.
        //
        // Work logs reference exactly one employee and one workplace; both
        // foreign keys cascade so that deleting a parent removes its logs
        // rather than leaving dangling references. `created_at` breaks ties
        // when several logs share a date.
        self.add_migration(1, "create_core_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS workplaces (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS work_logs (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    hours REAL NOT NULL CHECK (hours >= 0),
                    description TEXT NOT NULL,
                    employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
                    workplace_id INTEGER NOT NULL REFERENCES workplaces(id) ON DELETE CASCADE,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            Ok(())
        });

        // Version 2: indices for the common query shapes.
        self.add_migration(2, "add_work_log_indices", |tx| {
            // Date-range filtering and both orderings hit the date column.
            tx.execute("CREATE INDEX IF NOT EXISTS idx_work_logs_date ON work_logs(date)", [])?;
            // Foreign-key filters from the admin view.
            tx.execute("CREATE INDEX IF NOT EXISTS idx_work_logs_employee ON work_logs(employee_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_work_logs_workplace ON work_logs(workplace_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations within a single transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            tracing::debug!("database schema is up to date");
            return Ok(());
        }

        tracing::info!(count = pending.len(), "applying pending migrations");

        let tx = conn.transaction()?;
        for migration in pending {
            tracing::info!(version = migration.version, name = migration.name, "running migration");
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        tracing::info!("all migrations completed");
        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));
        Ok(version.unwrap_or(0))
    }

    /// Complete migration history as (version, name, applied_at) tuples.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies all pending migrations to the given connection.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version, 0 when no migration has been applied.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

/// Whether the database is behind the latest registered migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}

/// Inserts the default employee and workplace into empty tables.
///
/// Idempotent: tables that already hold rows are left untouched, so
/// repeated startups never duplicate or reset data. Both inserts commit
/// atomically.
pub fn seed_defaults(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;

    let employees: i64 = tx.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    if employees == 0 {
        tracing::info!(name = SEED_EMPLOYEE, "seeding default employee");
        tx.execute("INSERT INTO employees (name) VALUES (?1)", params![SEED_EMPLOYEE])?;
    }

    let workplaces: i64 = tx.query_row("SELECT COUNT(*) FROM workplaces", [], |row| row.get(0))?;
    if workplaces == 0 {
        tracing::info!(name = SEED_WORKPLACE, "seeding default workplace");
        tx.execute("INSERT INTO workplaces (name) VALUES (?1)", params![SEED_WORKPLACE])?;
    }

    tx.commit()?;
    Ok(())
}
