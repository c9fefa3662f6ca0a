use chrono::{NaiveDate, NaiveDateTime};
use ecues_core::{project, ReportDocument, ReportField, ReportSection, TallyState};
use ecues_output::{
    export_report, format_generated_at, paginate, report_filename, share_link, wrap,
    ExportOptions, PageLayout, PageLine,
};
use pretty_assertions::assert_eq;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn generated_at() -> NaiveDateTime {
    date().and_hms_opt(14, 3, 0).unwrap()
}

fn long_document(fields: usize) -> ReportDocument {
    ReportDocument {
        title: "INFORME ECUES".to_string(),
        attribution: "Generado por App Contador ECUES".to_string(),
        sections: vec![ReportSection {
            title: "Destinos".to_string(),
            fields: (0..fields)
                .map(|i| ReportField {
                    label: format!("HOSPITAL {i}:"),
                    value: "1".to_string(),
                })
                .collect(),
        }],
    }
}

#[test]
fn filename_collapses_whitespace_and_falls_back() {
    assert_eq!(
        report_filename("ECUES", "Choque  en\tautopista", date(), "txt"),
        "ECUES_Choque_en_autopista_2026-10-19.txt"
    );
    assert_eq!(
        report_filename("ECUES", "", date(), "pdf"),
        "ECUES_Reporte_2026-10-19.pdf"
    );
    assert_eq!(
        report_filename("ECUES", "   ", date(), "json"),
        "ECUES_Reporte_2026-10-19.json"
    );
    // Path separators never leak into the filename.
    assert_eq!(
        report_filename("ECUES", "Ruta 9 / km 3", date(), "txt"),
        "ECUES_Ruta_9___km_3_2026-10-19.txt"
    );
}

#[test]
fn wrap_respects_columns_and_newlines() {
    assert_eq!(wrap("", 10), vec![String::new()]);
    assert_eq!(
        wrap("uno dos tres cuatro", 8),
        vec!["uno dos", "tres", "cuatro"]
    );
    assert_eq!(wrap("linea\nsegunda", 40), vec!["linea", "segunda"]);
    assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
}

#[test]
fn pagination_breaks_when_space_runs_out() {
    let doc = long_document(30);
    let paged = paginate(&doc, &PageLayout::default(), "19/10/2026 - 14:03:00");

    assert_eq!(paged.page_count(), 2);
    // Banner plus the fields that start above the bottom edge.
    assert_eq!(paged.pages[0].lines.len(), 24);
    assert_eq!(paged.pages[0].lines[0], PageLine::Banner("Destinos".to_string()));
    assert_eq!(paged.pages[1].lines.len(), 8);
    assert_eq!(paged.pages[1].lines.last(), Some(&PageLine::Spacer));
    assert_eq!(
        paged.footer(&paged.pages[1]),
        "Página 2 de 2 - Generado por App Contador ECUES"
    );

    let text = paged.render_text();
    assert_eq!(text.matches('\u{0C}').count(), 1);
    assert_eq!(text.matches("INFORME ECUES").count(), 1);
    assert!(text.contains("Página 1 de 2 - Generado por App Contador ECUES"));
}

#[test]
fn multi_line_values_take_more_vertical_space() {
    let mut doc = long_document(1);
    doc.sections[0].fields[0].value = "palabra ".repeat(200);
    let layout = PageLayout {
        wrap_columns: 20,
        ..PageLayout::default()
    };

    let paged = paginate(&doc, &layout, "");
    let PageLine::Field { lines, .. } = &paged.pages[0].lines[1] else {
        panic!("expected field line");
    };
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| l.chars().count() <= 20));
}

#[test]
fn export_writes_paged_text_and_json() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("informes");
    let document = project(&TallyState::new());

    let summary = export_report(
        &dir,
        &document,
        "Incendio fabrica",
        generated_at(),
        &ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.page_count, 1);
    assert_eq!(
        summary.report_path.file_name().unwrap(),
        "ECUES_Incendio_fabrica_2026-10-19.txt"
    );
    let text = std::fs::read_to_string(&summary.report_path).unwrap();
    assert!(text.contains("INFORME ECUES    19/10/2026 - 14:03:00"));
    assert!(text.contains("== Resumen de Pacientes =="));
    assert!(text
        .lines()
        .any(|l| l.starts_with("Total Pacientes:") && l.ends_with("0 (Final: No)")));
    assert!(text.contains("Página 1 de 1 - Generado por App Contador ECUES"));

    let json_path = summary.json_path.unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(json["page_count"], 1);
    assert_eq!(json["document"]["title"], "INFORME ECUES");
    assert_eq!(json["generated_at"], "2026-10-19T14:03:00");
}

#[test]
fn export_without_json_writes_only_text() {
    let temp = tempfile::TempDir::new().unwrap();
    let options = ExportOptions {
        write_json: false,
        ..ExportOptions::default()
    };

    let summary = export_report(
        temp.path(),
        &project(&TallyState::new()),
        "",
        generated_at(),
        &options,
    )
    .unwrap();

    assert!(summary.json_path.is_none());
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn generated_at_uses_day_first_format() {
    assert_eq!(format_generated_at(generated_at()), "19/10/2026 - 14:03:00");
}

#[test]
fn share_link_carries_the_summary_text() {
    let text = "*Incidente: Choque*\n- Total: 3";

    let link = share_link(text).unwrap();

    assert!(link.as_str().starts_with("https://wa.me/?text="));
    assert!(!link.as_str().contains('\n'));
    let (key, value) = link.query_pairs().next().unwrap();
    assert_eq!(key, "text");
    assert_eq!(value, text);
}

#[test]
fn share_link_percent_encodes_spaces() {
    let link = share_link("*Hasta ahora 1 pacientes* a+b").unwrap();

    assert_eq!(
        link.as_str(),
        "https://wa.me/?text=*Hasta%20ahora%201%20pacientes*%20a%2Bb"
    );
}
