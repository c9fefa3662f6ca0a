use crate::report::ReportDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the summary text on the clipboard sink.
    CopyToClipboard { text: String },
    /// Open the messaging deep link carrying the summary text.
    OpenShareLink { text: String },
    /// Lay out and persist the long-form report.
    ExportReport {
        document: ReportDocument,
        incident: String,
    },
    /// Ask the operator to confirm a session reset.
    ConfirmReset,
}
