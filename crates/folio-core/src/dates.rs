use chrono::NaiveDate;

/// Parse a human-entered date string into a `NaiveDate`.
///
/// Content records store dates the way their authors typed them:
/// `2025-06-27`, `July 26, 2025`, `July, 2025`, sometimes with stray
/// whitespace or a trailing comma. A month-only date resolves to the 1st.
/// Anything unparseable is `None` — an unreadable date demotes a record in
/// the sort order, it never fails a request.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let s = collapsed.trim_end_matches(',').trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%B %d, %Y", "%B %d %Y", "%b %d, %Y", "%b %d %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // "July, 2025" / "July 2025" / "Feb 2025" — pin to the first of the month.
    let month_year = s.replace(',', "");
    let padded = format!("{month_year} 1");
    for fmt in ["%B %Y %d", "%b %Y %d"] {
        if let Ok(d) = NaiveDate::parse_from_str(&padded, fmt) {
            return Some(d);
        }
    }

    None
}
