//! Display formatting for gallery cards and form input coercion

/// Formats a weight in grams with two fixed decimals and the unit
/// suffix, e.g. `3.456` → `"3.46g"`.
pub fn format_weight(grams: f64) -> String {
    format!("{:.2}g", grams)
}

/// Renders an ISO date (`YYYY-MM-DD`, optionally with a time part) the
/// way an Italian locale does: day/month/year without zero padding.
///
/// Absent or unparseable dates render as the literal `"N/A"`.
pub fn format_date(iso: Option<&str>) -> String {
    iso.and_then(parse_iso_date)
        .map(|(year, month, day)| format!("{}/{}/{}", day, month, year))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Display name for a record, falling back to the localized
/// "unnamed" label when the backend stored an empty one.
pub fn display_name(nome: &str) -> &str {
    let trimmed = nome.trim();
    if trimmed.is_empty() {
        "Senza nome"
    } else {
        trimmed
    }
}

/// Coerces the weight form field to a number.
///
/// Empty, non-numeric, or non-finite input becomes `None`, so the
/// backend only ever sees a real number or `null`.
pub fn parse_weight(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Empty form fields are sent as `null`, not as empty strings.
pub fn none_if_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_iso_date(iso: &str) -> Option<(u32, u32, u32)> {
    let date_part = iso.split('T').next()?;
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}
