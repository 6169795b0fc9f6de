//! # Worklog - Work-Hour Logging Service
//!
//! A small service for recording hours worked by employees at workplaces,
//! with filtered listings, aggregation, and spreadsheet export.
//!
//! ## Features
//!
//! - **Log Submission**: Validated work log entries (date, hours, description)
//! - **Filtering**: Conjunctive filters by employee, workplace, name substring and date range
//! - **Export**: Excel and CSV downloads with a computed total-hours trailer row
//! - **Management**: Create and delete employees and workplaces with uniqueness checks
//! - **Persistence**: Single local SQLite file with versioned migrations and idempotent seeding
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
