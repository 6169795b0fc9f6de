//! Export builder for filtered work log data.
//!
//! Materializes query results into a downloadable tabular document. Every
//! document carries the same column set and ends with a synthetic trailer
//! row whose `Hours` cell holds the aggregate sum and whose `Description`
//! cell is the literal `Total Hours` label. An empty result set still
//! produces a valid document: header plus a zero-hours trailer.
//!
//! Documents are built entirely in memory so the web layer can stream them
//! as attachments without touching the filesystem.

use crate::libs::error::{Error, Result};
use crate::libs::worklog::{LogRow, DATE_FORMAT};
use rust_xlsxwriter::{Format, Workbook};
use std::str::FromStr;

/// Label placed in the trailer row's description cell.
pub const TRAILER_LABEL: &str = "Total Hours";

/// Worksheet name for the Excel export.
const SHEET_NAME: &str = "Work Logs";

const COLUMNS: [&str; 6] = ["Employee", "Workplace", "Date", "Hours", "Description", "Submitted"];

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Excel workbook with header formatting.
    Xlsx,
}

impl ExportFormat {
    /// Fixed attachment filename for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "work_logs.csv",
            ExportFormat::Xlsx => "work_logs.xlsx",
        }
    }

    /// MIME type served alongside the attachment.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            other => Err(format!("unsupported export format '{}'", other)),
        }
    }
}

/// Builds export documents from already-filtered rows.
pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Produces the document bytes for the given rows and their aggregate.
    ///
    /// The caller computes `total_hours` over the same filter that produced
    /// `rows`, so the trailer always matches exactly the exported set.
    pub fn build(&self, rows: &[LogRow], total_hours: f64) -> Result<Vec<u8>> {
        match self.format {
            ExportFormat::Csv => self.build_csv(rows, total_hours),
            ExportFormat::Xlsx => self.build_xlsx(rows, total_hours),
        }
    }

    fn build_csv(&self, rows: &[LogRow], total_hours: f64) -> Result<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        wtr.write_record(COLUMNS).map_err(|e| Error::Export(e.to_string()))?;
        for row in rows {
            wtr.write_record(&[
                row.employee.clone(),
                row.workplace.clone(),
                row.date.format(DATE_FORMAT).to_string(),
                row.hours.to_string(),
                row.description.clone(),
                row.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ])
            .map_err(|e| Error::Export(e.to_string()))?;
        }

        // Trailer row: only the hours and description cells are populated.
        wtr.write_record(&["".to_string(), "".to_string(), "".to_string(), total_hours.to_string(), TRAILER_LABEL.to_string(), "".to_string()])
            .map_err(|e| Error::Export(e.to_string()))?;

        wtr.into_inner().map_err(|e| Error::Export(e.to_string()))
    }

    fn build_xlsx(&self, rows: &[LogRow], total_hours: f64) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(|e| Error::Export(e.to_string()))?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        let write = |e: rust_xlsxwriter::XlsxError| Error::Export(e.to_string());

        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format).map_err(write)?;
        }

        let mut row_idx = 1u32;
        for row in rows {
            worksheet.write_string(row_idx, 0, &row.employee).map_err(write)?;
            worksheet.write_string(row_idx, 1, &row.workplace).map_err(write)?;
            worksheet.write_string(row_idx, 2, &row.date.format(DATE_FORMAT).to_string()).map_err(write)?;
            worksheet.write_number(row_idx, 3, row.hours).map_err(write)?;
            worksheet.write_string(row_idx, 4, &row.description).map_err(write)?;
            worksheet
                .write_string(row_idx, 5, &row.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string())
                .map_err(write)?;
            row_idx += 1;
        }

        // Trailer row.
        worksheet.write_number(row_idx, 3, total_hours).map_err(write)?;
        worksheet.write_string_with_format(row_idx, 4, TRAILER_LABEL, &header_format).map_err(write)?;

        worksheet.autofit();
        workbook.save_to_buffer().map_err(|e| Error::Export(e.to_string()))
    }
}
