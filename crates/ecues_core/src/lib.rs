//! ECUES core: tally state, reconciliation engine, report projection and the
//! pure state machine that drives them.
mod catalog;
mod effect;
mod engine;
mod msg;
mod report;
mod state;
mod tally;
mod transient;
mod update;
mod view_model;

pub use catalog::{HospitalCatalog, OTHER_SENTINEL};
pub use effect::Effect;
pub use engine::{AllocationTarget, Applied, TallyError, DEFAULT_ALLOCATION_TARGET};
pub use msg::Msg;
pub use report::{
    project, summary_text, ReportDocument, ReportField, ReportSection, REPORT_ATTRIBUTION,
    REPORT_TITLE,
};
pub use state::AppState;
pub use tally::{
    Allocation, AllocationId, AllocationMode, AuxCounter, Axis, Category, Channel, Counters,
    Delta, IncidentField, IncidentInfo, SituationField, SituationReport, TallyState,
};
pub use transient::{Notice, NoticeKind, HIGHLIGHT_TTL, NOTICE_TTL};
pub use update::update;
pub use view_model::{AllocationRowView, AppViewModel, NoticeView};
