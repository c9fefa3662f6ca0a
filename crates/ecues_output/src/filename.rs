use chrono::NaiveDate;

const FALLBACK_STEM: &str = "Reporte";

/// Report filename: `{prefix}_{incident}_{YYYY-MM-DD}.{ext}`.
///
/// Whitespace runs in the incident collapse to a single `_`; a blank incident
/// becomes `Reporte`.
pub fn report_filename(prefix: &str, incident: &str, date: NaiveDate, ext: &str) -> String {
    let stem = incident_stem(incident);
    format!("{prefix}_{stem}_{}.{ext}", date.format("%Y-%m-%d"))
}

fn incident_stem(incident: &str) -> String {
    // A whitespace-only incident counts as blank and gets the fallback stem.
    let trimmed = incident.trim();
    if trimmed.is_empty() {
        return FALLBACK_STEM.to_string();
    }
    let mut stem = String::with_capacity(trimmed.len());
    let mut in_gap = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !in_gap {
                stem.push('_');
            }
            in_gap = true;
        } else {
            stem.push(if is_forbidden(c) { '_' } else { c });
            in_gap = false;
        }
    }
    stem
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
