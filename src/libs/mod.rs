//! Core library modules: configuration, domain types, validation, errors
//! and the export builder.

pub mod config;
pub mod error;
pub mod export;
pub mod worklog;
