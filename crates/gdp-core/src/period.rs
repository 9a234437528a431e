//! Quarter labels for ISO date strings

// ============================================================================
// STRATEGY PATTERN: Period Formatter
// ============================================================================

/// Strategy trait for turning a raw date string into a period label
pub trait PeriodFormatter: Send + Sync {
    fn format(&self, date_string: &str) -> String;
}

/// Formats `"YYYY-MM-DD"` as `"YYYY Qn"`.
///
/// Months 1, 4 and 7 map to Q1, Q2 and Q3. Every other month value,
/// including 10 and anything malformed, labels as Q4.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarterFormatter;

impl PeriodFormatter for QuarterFormatter {
    fn format(&self, date_string: &str) -> String {
        let mut parts = date_string.split('-');
        let year = parts.next().unwrap_or(date_string);
        let month: u32 = parts
            .next()
            .and_then(|m| m.parse().ok())
            .unwrap_or(0);

        let quarter = match month {
            1 => "Q1",
            4 => "Q2",
            7 => "Q3",
            _ => "Q4",
        };

        format!("{} {}", year, quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_mapping() {
        let formatter = QuarterFormatter;
        assert_eq!(formatter.format("1947-01-01"), "1947 Q1");
        assert_eq!(formatter.format("1952-04-01"), "1952 Q2");
        assert_eq!(formatter.format("1963-07-01"), "1963 Q3");
        assert_eq!(formatter.format("1952-10-01"), "1952 Q4");
    }

    #[test]
    fn test_non_quarter_months_label_q4() {
        let formatter = QuarterFormatter;
        assert_eq!(formatter.format("1990-02-01"), "1990 Q4");
        assert_eq!(formatter.format("1990-11-15"), "1990 Q4");
    }

    #[test]
    fn test_malformed_month_falls_through() {
        let formatter = QuarterFormatter;
        assert_eq!(formatter.format("1990"), "1990 Q4");
        assert_eq!(formatter.format("1990-xx-01"), "1990 Q4");
    }
}
