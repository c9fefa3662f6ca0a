use ecues_core::{
    project, summary_text, Category, Channel, Delta, HospitalCatalog, IncidentField,
    SituationField, TallyState,
};
use pretty_assertions::assert_eq;

fn busy_state() -> TallyState {
    let catalog = HospitalCatalog::default();
    let mut state = TallyState::new();
    let first = state.allocations()[0].id;
    state.set_allocation_name(first, "HOSPITAL PENNA", &catalog).unwrap();
    for _ in 0..2 {
        state
            .record_patient_event(Channel::Transported, Delta::Increment)
            .unwrap();
    }
    state
        .record_patient_event(Channel::Attended, Delta::Increment)
        .unwrap();
    state.reclassify(Category::Male, Delta::Increment).unwrap();
    state.reclassify(Category::Female, Delta::Increment).unwrap();
    state.reclassify(Category::Adults, Delta::Increment).unwrap();

    let second = state.add_allocation();
    state.set_allocation_name(second, "OTROS", &catalog).unwrap();
    state.set_allocation_name(second, "Clinica Sur", &catalog).unwrap();
    state.set_allocation_count(first, 1).unwrap();
    state.set_allocation_count(second, 1).unwrap();
    // Named but empty destinations are left out of the report.
    let third = state.add_allocation();
    state.set_allocation_name(third, "HOSPITAL DURAND", &catalog).unwrap();

    state.adjust_auxiliary(ecues_core::AuxCounter::MobileUnits, Delta::Increment);
    state.adjust_auxiliary(ecues_core::AuxCounter::MobileUnits, Delta::Increment);
    state.adjust_auxiliary(ecues_core::AuxCounter::Deceased, Delta::Increment);
    state.set_incident_field(IncidentField::Description, "Choque en autopista");
    state.set_incident_field(IncidentField::Address, "Av. General Paz 1200");
    state.set_incident_field(IncidentField::Intervention, "Triage inicial");
    state.set_final(true);
    state
}

#[test]
fn empty_session_summary_matches_operator_format() {
    let text = summary_text(&TallyState::new());
    let expected = "\
*Incidente: N/A*
*Dirección: N/A*

*Hasta ahora 0 pacientes*

Pacientes:
- Total: 0
- Óbitos: 0
- Evacuados: 0

Sexo:
- Masc: 0 | Fem: 0
- S/D: 0

Edad:
- Menores: 0 | Mayores: 0
- S/D: 0

Procedimiento:
- Atendidos: 0
- Trasladados: 0

Destinos:
Ninguno

Dotación:
- Móviles: 0 | Aéreo: 0

Intervención:


Notas:
";
    assert_eq!(text, expected);
}

#[test]
fn busy_session_summary_lists_destinations_and_final_status() {
    let text = summary_text(&busy_state());
    let expected = "\
*Incidente: Choque en autopista*
*Dirección: Av. General Paz 1200*

*FINAL 3 pacientes*

Pacientes:
- Total: 3
- Óbitos: 1
- Evacuados: 0

Sexo:
- Masc: 1 | Fem: 1
- S/D: 1

Edad:
- Menores: 0 | Mayores: 1
- S/D: 2

Procedimiento:
- Atendidos: 1
- Trasladados: 2

Destinos:
- HOSPITAL PENNA: 1
- Clinica Sur: 1

Dotación:
- Móviles: 2 | Aéreo: 0

Intervención:
Triage inicial

Notas:
";
    assert_eq!(text, expected);
}

#[test]
fn situation_block_leads_the_summary_when_any_field_is_set() {
    let mut state = TallyState::new();
    state.set_situation_field(SituationField::MajorIncident, "Sí");
    state.set_situation_field(SituationField::EmergencyServices, "Bomberos");

    let text = summary_text(&state);

    assert!(text.starts_with(
        "METHANE:\nM: Sí\nE: \nT: \nH: \nA: \nN: \nE: Bomberos\n\n*Incidente: N/A*\n"
    ));
}

#[test]
fn whitespace_situation_field_opens_summary_block_but_not_document_section() {
    let mut state = TallyState::new();
    state.set_situation_field(SituationField::Hazards, " ");

    assert!(summary_text(&state).starts_with("METHANE:\nM: \nE: \nT: \nH:  \n"));
    assert!(project(&state).section("METHANE").is_none());
}

#[test]
fn empty_situation_fields_do_not_produce_a_block() {
    let state = TallyState::new();

    assert!(summary_text(&state).starts_with("*Incidente: N/A*"));
    assert!(project(&state).section("METHANE").is_none());
}

#[test]
fn document_sections_follow_report_order() {
    let doc = project(&busy_state());

    let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Detalles del Evento",
            "Resumen de Pacientes",
            "Desglose",
            "Operativo",
            "Destinos",
            "Intervención",
        ]
    );

    let summary = doc.section("Resumen de Pacientes").unwrap();
    assert_eq!(summary.fields[0].label, "Total Pacientes:");
    assert_eq!(summary.fields[0].value, "3 (Final: Sí)");

    let destinations = doc.section("Destinos").unwrap();
    let rows: Vec<_> = destinations
        .fields
        .iter()
        .map(|f| (f.label.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(rows, vec![("HOSPITAL PENNA:", "1"), ("Clinica Sur:", "1")]);

    let narrative = doc.section("Intervención").unwrap();
    assert_eq!(narrative.fields[0].label, "");
    assert_eq!(narrative.fields[0].value, "Triage inicial");
}

#[test]
fn document_defaults_missing_values() {
    let mut state = TallyState::new();
    state.set_situation_field(SituationField::Access, "Norte");

    let doc = project(&state);

    let methane = doc.section("METHANE").unwrap();
    assert_eq!(methane.fields.len(), 7);
    assert_eq!(methane.fields[0].label, "M (Major Incident):");
    assert_eq!(methane.fields[0].value, "-");
    assert_eq!(methane.fields[4].value, "Norte");
    assert_eq!(methane.fields[6].label, "E (Emergency):");

    let details = doc.section("Detalles del Evento").unwrap();
    assert_eq!(details.fields[0].value, "N/A");
    assert!(doc.section("Destinos").is_none());
    assert!(doc.section("Notas").is_none());
    assert_eq!(doc.attribution, "Generado por App Contador ECUES");
}
