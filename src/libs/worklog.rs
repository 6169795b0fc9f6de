//! Work log domain types: the stored entry, its resolved display form,
//! the filter applied to queries, and submission validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Calendar date format used throughout the application.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated work log entry ready for insertion.
#[derive(Debug, Clone)]
pub struct NewLog {
    pub employee_id: i64,
    pub workplace_id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
}

/// A work log row with employee and workplace names already resolved.
///
/// Query results are returned in this form so that callers never traverse
/// lazy references; a listed row is always renderable as-is.
#[derive(Debug, Clone, Serialize)]
pub struct LogRow {
    pub id: i64,
    pub employee: String,
    pub workplace: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub submitted_at: NaiveDateTime,
}

/// Optional, conjunctive constraints on work log queries.
///
/// An absent field imposes no constraint. `name` is a case-insensitive
/// substring match on the employee name; both date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub employee_id: Option<i64>,
    pub workplace_id: Option<i64>,
    pub name: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Row ordering for the two query use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOrder {
    /// Newest first, for listings.
    Display,
    /// Oldest first, for export documents.
    Export,
}

/// A raw log submission as received from the form, before validation.
///
/// `date` and `hours` stay textual here so that a malformed value is
/// reported as a violation instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSubmission {
    pub employee_id: i64,
    pub workplace_id: i64,
    pub date: String,
    pub hours: String,
    pub description: String,
}

impl LogSubmission {
    /// Validates the submission, accumulating every violation.
    ///
    /// Returns the parsed [`NewLog`] only when no field is in violation;
    /// otherwise returns the full list of problems so the caller can report
    /// them all at once.
    pub fn validate(&self) -> Result<NewLog, Vec<String>> {
        let mut violations = Vec::new();

        let date = match NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(format!("date '{}' is not a valid YYYY-MM-DD date", self.date));
                None
            }
        };

        let hours = match self.hours.trim().parse::<f64>() {
            Ok(hours) if !hours.is_finite() => {
                violations.push(format!("hours '{}' is not a number", self.hours));
                None
            }
            Ok(hours) if hours < 0.0 => {
                violations.push("hours must not be negative".to_string());
                None
            }
            Ok(hours) => Some(hours),
            Err(_) => {
                violations.push(format!("hours '{}' is not a number", self.hours));
                None
            }
        };

        let description = self.description.trim();
        if description.is_empty() {
            violations.push("description must not be empty".to_string());
        }

        if let (Some(date), Some(hours)) = (date, hours) {
            if violations.is_empty() {
                return Ok(NewLog {
                    employee_id: self.employee_id,
                    workplace_id: self.workplace_id,
                    date,
                    hours,
                    description: description.to_string(),
                });
            }
        }

        Err(violations)
    }
}
