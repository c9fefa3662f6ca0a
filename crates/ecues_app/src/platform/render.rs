use std::fmt::Write as _;

use ecues_core::{AllocationMode, AllocationRowView, AppViewModel, HospitalCatalog, NoticeKind};

/// Draws the tally panel for the current view.
pub fn render(view: &AppViewModel) -> String {
    let c = &view.counters;
    let status = if view.is_final { "FINAL" } else { "Hasta ahora" };
    let unknown_marker = if view.highlight_unknown { " <<" } else { "" };

    let mut out = String::new();
    let _ = writeln!(out, "==================== ECUES ====================");
    let _ = writeln!(
        out,
        "Pacientes: {} ({status})   Atendidos: {}   Trasladados: {}",
        view.total_patients, c.attended, c.transported
    );
    let _ = writeln!(
        out,
        "Sexo   M: {:<4} F: {:<4} S/D: {}{unknown_marker}",
        c.male, c.female, c.sex_unknown
    );
    let _ = writeln!(
        out,
        "Edad   Menor: {:<4} Mayor: {:<4} S/D: {}{unknown_marker}",
        c.minors, c.adults, c.age_unknown
    );
    let _ = writeln!(
        out,
        "Óbitos: {}   Evacuados: {}   Móviles: {}   Aéreos: {}",
        c.deceased, c.evacuated, c.mobile_units, c.air_units
    );
    let _ = writeln!(
        out,
        "Destinos ({} / {} trasladados):",
        view.allocated_total, c.transported
    );
    for row in &view.allocations {
        let _ = writeln!(out, "  {}", format_allocation_row(row));
    }
    if let Some(notice) = &view.notice {
        let tag = match notice.kind {
            NoticeKind::Info => "i",
            NoticeKind::Error => "!",
        };
        let _ = writeln!(out, "[{tag}] {}", notice.text);
    }
    out
}

fn format_allocation_row(row: &AllocationRowView) -> String {
    let name = if row.name.trim().is_empty() {
        "(sin destino)"
    } else {
        row.name.as_str()
    };
    let mode = match row.mode {
        AllocationMode::Catalog => "",
        AllocationMode::Custom => " [otro]",
    };
    format!("{}. {name}{mode}: {}", row.position, row.count)
}

/// Numbered catalog listing for `dest N name INDICE`.
pub fn render_catalog(catalog: &HospitalCatalog) -> String {
    let mut out = String::new();
    for (index, option) in catalog.options().enumerate() {
        let _ = writeln!(out, "{:>3}. {option}", index + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecues_core::{update, AppState, Channel, Delta, Msg};

    #[test]
    fn panel_shows_counts_and_destinations() {
        let (state, _) = update(
            AppState::new(),
            Msg::PatientEvent {
                channel: Channel::Transported,
                delta: Delta::Increment,
            },
        );
        let panel = render(&state.view());

        assert!(panel.contains("Pacientes: 1 (Hasta ahora)"));
        assert!(panel.contains("Destinos (0 / 1 trasladados):"));
        assert!(panel.contains("1. (sin destino): 0"));
        assert!(panel.contains("S/D: 1 <<"));
    }

    #[test]
    fn catalog_lists_other_last() {
        let catalog = HospitalCatalog::new(vec!["SAME".to_string()], "OTROS");
        assert_eq!(render_catalog(&catalog), "  1. SAME\n  2. OTROS\n");
    }
}
