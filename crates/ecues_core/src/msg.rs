use std::time::Duration;

use crate::tally::{
    AllocationId, AuxCounter, Axis, Category, Channel, Delta, IncidentField, SituationField,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session clock advanced; carries the time elapsed since session start.
    Tick(Duration),
    /// User pressed +/- on the attended or transported counter.
    PatientEvent { channel: Channel, delta: Delta },
    /// User pressed +/- on a sex or age category.
    Reclassify { category: Category, delta: Delta },
    /// User pressed +/- on an unknown (S/D) counter.
    UnknownAdjusted { axis: Axis, delta: Delta },
    /// User pressed +/- on deceased, evacuated or resource counters.
    AuxiliaryAdjusted { counter: AuxCounter, delta: Delta },
    /// User set the patient count of a destination.
    AllocationCountSet { id: AllocationId, count: u32 },
    /// User picked a catalog entry or typed a custom destination name.
    AllocationNameSet { id: AllocationId, name: String },
    /// User abandoned a custom name and went back to the catalog list.
    AllocationReverted { id: AllocationId },
    AllocationAdded,
    AllocationRemoved { id: AllocationId },
    IncidentEdited { field: IncidentField, text: String },
    SituationEdited { field: SituationField, text: String },
    /// User toggled the FINAL marker.
    FinalToggled,
    CopyClicked,
    /// The shell finished writing the summary to the clipboard sink.
    ClipboardWritten,
    ShareClicked,
    ExportClicked,
    /// User asked for a reset; needs confirmation from the shell.
    ResetClicked,
    ResetConfirmed,
}
