use ecues_logging::{ecues_debug, ecues_info};

use crate::engine::{Applied, TallyError};
use crate::report::{project, summary_text};
use crate::transient::{NoticeKind, Transients};
use crate::{AppState, Effect, Msg};

const MANUAL_CLEAR_NOTICE: &str = "Paciente retirado de S/D manualmente.";
const COPIED_NOTICE: &str = "Copiado al portapapeles";
const RESET_NOTICE: &str = "Aplicación reiniciada";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Tick(elapsed) => {
            // The clock never runs backwards, even if the shell's does.
            state.clock = state.clock.max(elapsed);
            if state.transients.expire(state.clock) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PatientEvent { channel, delta } => {
            let result = state.tally.record_patient_event(channel, delta);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::Reclassify { category, delta } => {
            let result = state.tally.reclassify(category, delta);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::UnknownAdjusted { axis, delta } => {
            let result = state.tally.adjust_unknown_direct(axis, delta);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::AuxiliaryAdjusted { counter, delta } => {
            let applied = state.tally.adjust_auxiliary(counter, delta);
            apply(&mut state, Ok(applied));
            Vec::new()
        }
        Msg::AllocationCountSet { id, count } => {
            let result = state.tally.set_allocation_count(id, count);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::AllocationNameSet { id, name } => {
            let result = state
                .tally
                .set_allocation_name(id, &name, &state.catalog);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::AllocationReverted { id } => {
            let result = state.tally.revert_allocation_to_catalog(id);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::AllocationAdded => {
            let id = state.tally.add_allocation();
            ecues_debug!("Added destination id={}", id);
            state.mark_dirty();
            Vec::new()
        }
        Msg::AllocationRemoved { id } => {
            let result = state.tally.remove_allocation(id);
            apply(&mut state, result);
            Vec::new()
        }
        Msg::IncidentEdited { field, text } => {
            state.tally.set_incident_field(field, text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SituationEdited { field, text } => {
            state.tally.set_situation_field(field, text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FinalToggled => {
            let is_final = !state.tally.is_final();
            state.tally.set_final(is_final);
            ecues_info!("Report marked final={}", is_final);
            state.mark_dirty();
            Vec::new()
        }
        Msg::CopyClicked => vec![Effect::CopyToClipboard {
            text: summary_text(&state.tally),
        }],
        Msg::ClipboardWritten => {
            let now = state.clock;
            state.transients.notify(now, NoticeKind::Info, COPIED_NOTICE);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ShareClicked => vec![Effect::OpenShareLink {
            text: summary_text(&state.tally),
        }],
        Msg::ExportClicked => {
            ecues_info!(
                "Export requested for {} patients",
                state.tally.total_patients()
            );
            vec![Effect::ExportReport {
                document: project(&state.tally),
                incident: state.tally.incident().description.clone(),
            }]
        }
        Msg::ResetClicked => vec![Effect::ConfirmReset],
        Msg::ResetConfirmed => {
            state.tally.reset_session();
            state.transients = Transients::default();
            let now = state.clock;
            state.transients.notify(now, NoticeKind::Info, RESET_NOTICE);
            ecues_info!("Session reset");
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}

fn apply(state: &mut AppState, result: Result<Applied, TallyError>) {
    let now = state.clock;
    match result {
        Ok(applied) => {
            match applied {
                Applied::Unclassified => state.transients.highlight(now),
                Applied::UnknownCleared(axis) => {
                    ecues_debug!("Unknown pool {:?} cleared by hand", axis);
                    state
                        .transients
                        .notify(now, NoticeKind::Info, MANUAL_CLEAR_NOTICE);
                }
                Applied::Updated | Applied::Unchanged => {}
            }
            if applied.changed() {
                state.mark_dirty();
            }
        }
        Err(err) => {
            ecues_debug!("Rejected operation: {:?}", err);
            state.transients.notify(now, NoticeKind::Error, err.to_string());
            state.mark_dirty();
        }
    }
}
