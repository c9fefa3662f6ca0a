use crate::tally::{AllocationId, AllocationMode, Counters};
use crate::transient::NoticeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub counters: Counters,
    pub total_patients: u32,
    pub allocations: Vec<AllocationRowView>,
    pub allocated_total: u32,
    pub is_final: bool,
    /// The S/D counters should be emphasized: someone needs classifying.
    pub highlight_unknown: bool,
    pub notice: Option<NoticeView>,
    pub dirty: bool,
}

impl AppViewModel {
    /// Looks up a destination row by its 1-based display position.
    pub fn allocation_at(&self, position: usize) -> Option<&AllocationRowView> {
        self.allocations.iter().find(|row| row.position == position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRowView {
    pub position: usize,
    pub id: AllocationId,
    pub name: String,
    pub count: u32,
    pub mode: AllocationMode,
    pub removable: bool,
}
