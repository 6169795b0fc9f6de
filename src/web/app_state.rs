use crate::db::{employees::Employees, work_logs::WorkLogs, workplaces::Workplaces};
use crate::libs::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared state for request handlers.
///
/// Holds the database file path rather than a live connection: each request
/// opens its own short-lived connection through a storage handle, which
/// keeps every request's work inside its own implicit transaction scope.
#[derive(Clone)]
pub struct AppState {
    db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path: Arc::new(db_path) }
    }

    pub fn employees(&self) -> Result<Employees> {
        Employees::new(&self.db_path)
    }

    pub fn workplaces(&self) -> Result<Workplaces> {
        Workplaces::new(&self.db_path)
    }

    pub fn work_logs(&self) -> Result<WorkLogs> {
        WorkLogs::new(&self.db_path)
    }
}
