//! Database layer for the worklog application.
//!
//! SQLite persistence for the three core entities, with a versioned
//! migration system and one storage module per table. Storage handles open
//! their own connection from an explicit database path, so the persistence
//! context is always passed in rather than kept in a global.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migrations and default-data seeding.
pub mod migrations;

/// Employee storage operations.
pub mod employees;

/// Workplace storage operations.
pub mod workplaces;

/// Work log storage: inserts, filtered queries, aggregate, deletion.
pub mod work_logs;
