use std::time::Duration;

use crate::catalog::HospitalCatalog;
use crate::tally::TallyState;
use crate::transient::Transients;
use crate::view_model::{AllocationRowView, AppViewModel, NoticeView};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) tally: TallyState,
    pub(crate) catalog: HospitalCatalog,
    pub(crate) transients: Transients,
    /// Time elapsed since session start, as last reported by a tick.
    pub(crate) clock: Duration,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: HospitalCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Read-only snapshot of the tally for projectors and renderers.
    pub fn tally(&self) -> &TallyState {
        &self.tally
    }

    pub fn catalog(&self) -> &HospitalCatalog {
        &self.catalog
    }

    pub fn view(&self) -> AppViewModel {
        let counters = *self.tally.counters();
        let allocations = self
            .tally
            .allocations()
            .iter()
            .enumerate()
            .map(|(index, a)| AllocationRowView {
                position: index + 1,
                id: a.id,
                name: a.name.clone(),
                count: a.count,
                mode: a.mode,
                removable: self.tally.allocations().len() > 1,
            })
            .collect();

        AppViewModel {
            total_patients: counters.total_patients(),
            counters,
            allocations,
            allocated_total: self.tally.allocated_total(),
            is_final: self.tally.is_final(),
            highlight_unknown: self.transients.is_highlighted(),
            notice: self.transients.notice().map(|n| NoticeView {
                text: n.text.clone(),
                kind: n.kind,
            }),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
