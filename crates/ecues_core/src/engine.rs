//! Reconciliation engine: the state transitions of a [`TallyState`].
//!
//! Every operation either applies completely or returns an error with the
//! state untouched. Decrements that would go below zero are not errors; they
//! are reported as [`Applied::Unchanged`].
use ecues_logging::ecues_debug;
use thiserror::Error;

use crate::catalog::HospitalCatalog;
use crate::tally::{
    Allocation, AllocationId, AllocationMode, AuxCounter, Axis, Category, Channel, Delta,
    IncidentField, SituationField, TallyState,
};

/// Which destination absorbs transport deltas issued from the intake counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationTarget {
    /// The first record in the list, whatever its position in the catalog.
    First,
}

impl AllocationTarget {
    fn resolve(self, allocations: &mut [Allocation]) -> Option<&mut Allocation> {
        match self {
            AllocationTarget::First => allocations.first_mut(),
        }
    }
}

/// Transport intake is attributed to the first listed destination, not to the
/// destination that actually received the patient.
pub const DEFAULT_ALLOCATION_TARGET: AllocationTarget = AllocationTarget::First;

/// What a successful operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Nothing changed (floor clamp or identical value).
    Unchanged,
    Updated,
    /// A new patient entered both unknown pools and awaits classification.
    Unclassified,
    /// The operator removed one entry from an unknown pool by hand.
    UnknownCleared(Axis),
}

impl Applied {
    pub fn changed(self) -> bool {
        !matches!(self, Applied::Unchanged)
    }
}

/// Recoverable validation failures. `Display` is the operator-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("No puede asignar más que el total de traslados.")]
    CapacityExceeded { requested: u32, available: u32 },
    #[error("No hay pacientes en S/D ({axis}) para clasificar.")]
    EmptyPool { axis: Axis },
    #[error("Use \"Atendidos\" o \"Trasladados\" para agregar pacientes.")]
    DirectIncrement { axis: Axis },
    #[error("Debe quedar al menos un destino.")]
    LastAllocation,
    #[error("Destino inexistente.")]
    UnknownAllocation(AllocationId),
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TallyState {
    /// Records one attended or transported patient, or takes one back.
    pub fn record_patient_event(
        &mut self,
        channel: Channel,
        delta: Delta,
    ) -> Result<Applied, TallyError> {
        let current = self.counters.channel(channel);
        let next = match delta {
            Delta::Increment => current.saturating_add(1),
            Delta::Decrement => match current.checked_sub(1) {
                Some(next) => next,
                None => return Ok(Applied::Unchanged),
            },
        };
        *self.counters.channel_mut(channel) = next;

        match delta {
            Delta::Increment => {
                for axis in [Axis::Sex, Axis::Age] {
                    let pool = self.counters.unknown_mut(axis);
                    *pool = pool.saturating_add(1);
                }
            }
            Delta::Decrement => {
                // Only the unknown pools shrink; classified patients stay put.
                for axis in [Axis::Sex, Axis::Age] {
                    let pool = self.counters.unknown_mut(axis);
                    *pool = pool.saturating_sub(1);
                }
            }
        }

        if channel == Channel::Transported {
            self.attribute_transport(delta);
        }

        Ok(match delta {
            Delta::Increment => Applied::Unclassified,
            Delta::Decrement => Applied::Updated,
        })
    }

    fn attribute_transport(&mut self, delta: Delta) {
        if let Some(target) = DEFAULT_ALLOCATION_TARGET.resolve(&mut self.allocations) {
            if target.is_named() {
                target.count = match delta {
                    Delta::Increment => target.count.saturating_add(1),
                    Delta::Decrement => target.count.saturating_sub(1),
                };
            }
        }
        if delta == Delta::Decrement {
            self.enforce_allocation_cap();
        }
    }

    /// Trims allocations from the back of the list until they fit within the
    /// transported count.
    fn enforce_allocation_cap(&mut self) {
        let mut excess = self
            .allocated_total()
            .saturating_sub(self.counters.transported);
        if excess == 0 {
            return;
        }
        ecues_debug!(
            "Allocation total exceeds transported={} by {}; trimming",
            self.counters.transported,
            excess
        );
        for allocation in self.allocations.iter_mut().rev() {
            if excess == 0 {
                break;
            }
            let trimmed = allocation.count.min(excess);
            allocation.count -= trimmed;
            excess -= trimmed;
        }
    }

    /// Moves one patient between the axis unknown pool and a named category.
    pub fn reclassify(&mut self, category: Category, delta: Delta) -> Result<Applied, TallyError> {
        let axis = category.axis();
        match delta {
            Delta::Increment => {
                if self.counters.unknown(axis) == 0 {
                    return Err(TallyError::EmptyPool { axis });
                }
                *self.counters.unknown_mut(axis) -= 1;
                *self.counters.category_mut(category) += 1;
            }
            Delta::Decrement => {
                if self.counters.category(category) == 0 {
                    return Ok(Applied::Unchanged);
                }
                *self.counters.category_mut(category) -= 1;
                *self.counters.unknown_mut(axis) += 1;
            }
        }
        Ok(Applied::Updated)
    }

    /// Manual correction of an unknown pool. Pools only grow through intake.
    pub fn adjust_unknown_direct(&mut self, axis: Axis, delta: Delta) -> Result<Applied, TallyError> {
        match delta {
            Delta::Increment => Err(TallyError::DirectIncrement { axis }),
            Delta::Decrement => {
                let pool = self.counters.unknown_mut(axis);
                if *pool == 0 {
                    return Ok(Applied::Unchanged);
                }
                *pool -= 1;
                Ok(Applied::UnknownCleared(axis))
            }
        }
    }

    pub fn adjust_auxiliary(&mut self, counter: AuxCounter, delta: Delta) -> Applied {
        let value = self.counters.auxiliary_mut(counter);
        match delta {
            Delta::Increment => *value = value.saturating_add(1),
            Delta::Decrement => {
                if *value == 0 {
                    return Applied::Unchanged;
                }
                *value -= 1;
            }
        }
        Applied::Updated
    }

    /// Sets the patient count of one destination, keeping the sum of all
    /// destinations within the transported count.
    pub fn set_allocation_count(
        &mut self,
        id: AllocationId,
        count: u32,
    ) -> Result<Applied, TallyError> {
        let index = self.allocation_index(id)?;
        let old = self.allocations[index].count;
        if count == old {
            return Ok(Applied::Unchanged);
        }
        if count > old {
            let requested = self.allocated_total().saturating_add(count - old);
            let available = self.counters.transported;
            if requested > available {
                return Err(TallyError::CapacityExceeded {
                    requested,
                    available,
                });
            }
        }
        self.allocations[index].count = count;
        Ok(Applied::Updated)
    }

    /// Sets a destination name. Choosing the catalog's "other" entry on a
    /// catalog-mode record switches it to free-text entry instead.
    pub fn set_allocation_name(
        &mut self,
        id: AllocationId,
        value: &str,
        catalog: &HospitalCatalog,
    ) -> Result<Applied, TallyError> {
        let index = self.allocation_index(id)?;
        let allocation = &mut self.allocations[index];
        if allocation.mode == AllocationMode::Catalog && catalog.is_other(value) {
            allocation.mode = AllocationMode::Custom;
            allocation.name.clear();
        } else {
            allocation.name = value.to_string();
        }
        Ok(Applied::Updated)
    }

    /// Drops a custom name and returns the record to catalog selection.
    pub fn revert_allocation_to_catalog(&mut self, id: AllocationId) -> Result<Applied, TallyError> {
        let index = self.allocation_index(id)?;
        let allocation = &mut self.allocations[index];
        allocation.mode = AllocationMode::Catalog;
        allocation.name.clear();
        Ok(Applied::Updated)
    }

    pub fn add_allocation(&mut self) -> AllocationId {
        let id = self.next_allocation_id;
        self.next_allocation_id += 1;
        self.allocations.push(Allocation::empty(id));
        id
    }

    pub fn remove_allocation(&mut self, id: AllocationId) -> Result<Applied, TallyError> {
        let index = self.allocation_index(id)?;
        if self.allocations.len() == 1 {
            return Err(TallyError::LastAllocation);
        }
        self.allocations.remove(index);
        Ok(Applied::Updated)
    }

    pub fn set_incident_field(&mut self, field: IncidentField, text: impl Into<String>) {
        *self.incident.field_mut(field) = text.into();
    }

    pub fn set_situation_field(&mut self, field: SituationField, text: impl Into<String>) {
        *self.situation.field_mut(field) = text.into();
    }

    pub fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    /// Back to session-start defaults: zero counters, one empty destination,
    /// empty metadata, not final.
    pub fn reset_session(&mut self) {
        *self = TallyState::new();
    }

    fn allocation_index(&self, id: AllocationId) -> Result<usize, TallyError> {
        self.allocations
            .iter()
            .position(|a| a.id == id)
            .ok_or(TallyError::UnknownAllocation(id))
    }
}
