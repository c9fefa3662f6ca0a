//! Report projection: short-form summary text and the structured document
//! handed to paginated renderers.
use std::fmt::Write;

use serde::Serialize;

use crate::tally::{Allocation, SituationField, TallyState};

pub const REPORT_TITLE: &str = "INFORME ECUES";
pub const REPORT_ATTRIBUTION: &str = "Generado por App Contador ECUES";

const NOT_AVAILABLE: &str = "N/A";
const NO_DESTINATIONS: &str = "Ninguno";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    /// Empty for free-text bodies that span the whole line.
    pub label: String,
    pub value: String,
}

impl ReportField {
    fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub fields: Vec<ReportField>,
}

impl ReportSection {
    fn new(title: &str, fields: Vec<ReportField>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }
}

/// Ordered content model of the long-form report. Page geometry is left to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub attribution: String,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn reported_destinations(state: &TallyState) -> impl Iterator<Item = &Allocation> {
    state
        .allocations()
        .iter()
        .filter(|a| a.is_named() && a.count > 0)
}

/// Plain-text summary pasted into messaging channels. Wording and order are
/// relied upon by operators and must not change.
pub fn summary_text(state: &TallyState) -> String {
    let c = state.counters();
    let incident = state.incident();
    let total = c.total_patients();
    let mut out = String::new();

    let situation = state.situation();
    if situation.has_entries() {
        out.push_str("METHANE:\n");
        for field in SituationField::ALL {
            let _ = writeln!(out, "{}: {}", field.letter(), situation.field(field));
        }
        out.push('\n');
    }

    let destinations: Vec<String> = reported_destinations(state)
        .map(|a| format!("- {}: {}", a.name, a.count))
        .collect();
    let destinations = if destinations.is_empty() {
        NO_DESTINATIONS.to_string()
    } else {
        destinations.join("\n")
    };
    let status = if state.is_final() { "FINAL" } else { "Hasta ahora" };

    let _ = write!(
        out,
        "*Incidente: {incident_text}*\n\
         *Dirección: {address}*\n\
         \n\
         *{status} {total} pacientes*\n\
         \n\
         Pacientes:\n\
         - Total: {total}\n\
         - Óbitos: {deceased}\n\
         - Evacuados: {evacuated}\n\
         \n\
         Sexo:\n\
         - Masc: {male} | Fem: {female}\n\
         - S/D: {sex_unknown}\n\
         \n\
         Edad:\n\
         - Menores: {minors} | Mayores: {adults}\n\
         - S/D: {age_unknown}\n\
         \n\
         Procedimiento:\n\
         - Atendidos: {attended}\n\
         - Trasladados: {transported}\n\
         \n\
         Destinos:\n\
         {destinations}\n\
         \n\
         Dotación:\n\
         - Móviles: {mobile} | Aéreo: {air}\n\
         \n\
         Intervención:\n\
         {intervention}\n\
         \n\
         Notas:\n\
         {notes}",
        incident_text = or_default(&incident.description, NOT_AVAILABLE),
        address = or_default(&incident.address, NOT_AVAILABLE),
        deceased = c.deceased,
        evacuated = c.evacuated,
        male = c.male,
        female = c.female,
        sex_unknown = c.sex_unknown,
        minors = c.minors,
        adults = c.adults,
        age_unknown = c.age_unknown,
        attended = c.attended,
        transported = c.transported,
        mobile = c.mobile_units,
        air = c.air_units,
        intervention = incident.intervention,
        notes = incident.notes,
    );
    out
}

fn situation_label(field: SituationField) -> &'static str {
    match field {
        SituationField::MajorIncident => "M (Major Incident):",
        SituationField::ExactLocation => "E (Exact Location):",
        SituationField::IncidentType => "T (Type):",
        SituationField::Hazards => "H (Hazards):",
        SituationField::Access => "A (Access):",
        SituationField::Casualties => "N (Number):",
        SituationField::EmergencyServices => "E (Emergency):",
    }
}

/// Builds the long-form report document.
pub fn project(state: &TallyState) -> ReportDocument {
    let c = state.counters();
    let incident = state.incident();
    let mut sections = Vec::new();

    let situation = state.situation();
    if situation.has_content() {
        let fields = SituationField::ALL
            .iter()
            .map(|field| {
                ReportField::new(
                    situation_label(*field),
                    or_default(situation.field(*field), "-"),
                )
            })
            .collect();
        sections.push(ReportSection::new("METHANE", fields));
    }

    sections.push(ReportSection::new(
        "Detalles del Evento",
        vec![
            ReportField::new("Incidente:", or_default(&incident.description, NOT_AVAILABLE)),
            ReportField::new("Dirección:", or_default(&incident.address, NOT_AVAILABLE)),
        ],
    ));

    let final_label = if state.is_final() { "Sí" } else { "No" };
    sections.push(ReportSection::new(
        "Resumen de Pacientes",
        vec![
            ReportField::new(
                "Total Pacientes:",
                format!("{} (Final: {final_label})", c.total_patients()),
            ),
            ReportField::new("Óbitos:", c.deceased),
            ReportField::new("Evacuados:", c.evacuated),
        ],
    ));

    sections.push(ReportSection::new(
        "Desglose",
        vec![
            ReportField::new("Masc:", c.male),
            ReportField::new("Fem:", c.female),
            ReportField::new("Sexo S/D:", c.sex_unknown),
            ReportField::new("Menores:", c.minors),
            ReportField::new("Mayores:", c.adults),
            ReportField::new("Edad S/D:", c.age_unknown),
        ],
    ));

    sections.push(ReportSection::new(
        "Operativo",
        vec![
            ReportField::new("Atendidos en lugar:", c.attended),
            ReportField::new("Trasladados:", c.transported),
            ReportField::new("Móviles:", c.mobile_units),
            ReportField::new("Aéreos:", c.air_units),
        ],
    ));

    if state.allocations().iter().any(|a| a.count > 0) {
        let fields = reported_destinations(state)
            .map(|a| ReportField::new(format!("{}:", a.name), a.count))
            .collect();
        sections.push(ReportSection::new("Destinos", fields));
    }

    if !incident.intervention.is_empty() {
        sections.push(ReportSection::new(
            "Intervención",
            vec![ReportField::new("", &incident.intervention)],
        ));
    }
    if !incident.notes.is_empty() {
        sections.push(ReportSection::new(
            "Notas",
            vec![ReportField::new("", &incident.notes)],
        ));
    }

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        attribution: REPORT_ATTRIBUTION.to_string(),
        sections,
    }
}
