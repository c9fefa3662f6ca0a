//! ECUES output: filenames, atomic writes, page layout and the share sinks
//! that consume the core's report projections.
mod export;
mod filename;
mod layout;
mod persist;
mod share;

pub use export::{export_report, format_generated_at, ExportError, ExportOptions, ExportSummary};
pub use filename::report_filename;
pub use layout::{paginate, wrap, Page, PageLayout, PageLine, PagedReport};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use share::share_link;
