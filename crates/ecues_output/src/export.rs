use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use ecues_core::ReportDocument;
use ecues_logging::ecues_info;
use serde_json::json;

use crate::filename::report_filename;
use crate::layout::{paginate, PageLayout};
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub prefix: String,
    pub layout: PageLayout,
    /// Also write the structured document as JSON next to the paged text.
    pub write_json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            prefix: "ECUES".to_string(),
            layout: PageLayout::default(),
            write_json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub page_count: usize,
    pub report_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Header timestamp of the printed report, e.g. `19/10/2026 - 14:03:00`.
pub fn format_generated_at(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y - %H:%M:%S").to_string()
}

/// Lays out the document and writes it into `output_dir`.
pub fn export_report(
    output_dir: &Path,
    document: &ReportDocument,
    incident: &str,
    generated_at: NaiveDateTime,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let stamp = format_generated_at(generated_at);
    let paged = paginate(document, &options.layout, &stamp);
    let date = generated_at.date();

    let writer = AtomicFileWriter::new(output_dir);
    let report_name = report_filename(&options.prefix, incident, date, "txt");
    let report_path = writer.write(&report_name, paged.render_text())?;

    let json_path = if options.write_json {
        let body = json!({
            "generated_at": generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "page_count": paged.page_count(),
            "document": document,
        });
        let json_name = report_filename(&options.prefix, incident, date, "json");
        Some(writer.write(&json_name, serde_json::to_string_pretty(&body)?)?)
    } else {
        None
    };

    ecues_info!(
        "Exported report pages={} path={:?}",
        paged.page_count(),
        report_path
    );
    Ok(ExportSummary {
        page_count: paged.page_count(),
        report_path,
        json_path,
    })
}
