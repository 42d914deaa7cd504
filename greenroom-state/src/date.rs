use chrono::NaiveDate;

/// Format an ISO `YYYY-MM-DD` date for display, e.g. `January 2, 2026`.
///
/// Dates that do not parse are displayed as-is; release dates are opaque
/// strings everywhere else in the model.
pub fn format_release_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_release_date() {
        assert_eq!(format_release_date("2026-03-01"), "March 1, 2026");
        assert_eq!(format_release_date("2025-12-25"), "December 25, 2025");
    }

    #[test]
    fn test_unparseable_dates_pass_through() {
        assert_eq!(format_release_date("soon"), "soon");
        assert_eq!(format_release_date(""), "");
    }
}
