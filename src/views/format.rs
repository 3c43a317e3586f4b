use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Render a server date for display. Unparseable values are shown as-is.
pub fn format_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// Lay two text blocks next to each other, the left one padded to `width`
pub fn side_by_side(left: &str, right: &str, width: usize) -> String {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let rows = left.len().max(right.len());

    let mut out = String::new();
    for i in 0..rows {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        let pad = width.saturating_sub(l.chars().count());
        let line = format!("{}{}  {}", l, " ".repeat(pad), r);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
