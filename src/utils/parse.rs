use chrono::NaiveDate;

/// Parse one table cell into a measurement value.
///
/// `-`, `/` and empty cells mean "no measurement" and yield `None`; `*`
/// annotations are discarded first. An unparseable cell is also treated as
/// absent rather than an error: historical reports carry inconsistent
/// markup and rejecting them would drop legitimate rows.
pub fn parse_value(token: &str) -> Option<f64> {
    let cleaned = token.replace('*', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "-" || cleaned == "/" {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Expand a two-digit year: below 50 is the 2000s, otherwise the 1900s.
pub fn expand_two_digit_year(yy: u32) -> i32 {
    if yy < 50 {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Parse a report date token in `DD.MM.YY` form into a calendar date.
///
/// Interior whitespace (a PDF layout artifact) is ignored. Tokens that do
/// not form a valid calendar date yield `None`.
pub fn parse_report_date(token: &str) -> Option<NaiveDate> {
    let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = compact.split('.');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let yy: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_two_digit_year(yy), month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_tokens_parse_to_none() {
        for token in ["-", "/", "", "  ", "-*", "abc"] {
            assert_eq!(parse_value(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn numeric_tokens_parse_to_floats() {
        assert_eq!(parse_value("46"), Some(46.0));
        assert_eq!(parse_value("46*"), Some(46.0));
        assert_eq!(parse_value(" 12.5 "), Some(12.5));
    }

    #[test]
    fn century_rule_splits_at_fifty() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(13), 2013);
        assert_eq!(expand_two_digit_year(49), 2049);
        assert_eq!(expand_two_digit_year(50), 1950);
        assert_eq!(expand_two_digit_year(72), 1972);
    }

    #[test]
    fn report_dates_become_iso_dates() {
        let date = parse_report_date("01.01.13").unwrap();
        assert_eq!(date.to_string(), "2013-01-01");

        let date = parse_report_date("15.06.72").unwrap();
        assert_eq!(date.to_string(), "1972-06-15");
    }

    #[test]
    fn stray_spaces_inside_dates_are_ignored() {
        let date = parse_report_date("1.6 .13").unwrap();
        assert_eq!(date.to_string(), "2013-06-01");
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert_eq!(parse_report_date("31.02.13"), None);
        assert_eq!(parse_report_date("1.1"), None);
        assert_eq!(parse_report_date("1.1.1.3"), None);
        assert_eq!(parse_report_date("x.y.zz"), None);
    }
}
