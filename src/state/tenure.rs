use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Whole years and months between a start date and today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    pub years: u32,
    pub months: u32,
}

impl Tenure {
    /// Calendar-month difference; the day of month is ignored. Dates in the
    /// future yield zero.
    pub fn between(start: NaiveDate, today: NaiveDate) -> Self {
        let total = (today.year() - start.year()) * 12 + today.month() as i32
            - start.month() as i32;
        let total = total.max(0) as u32;
        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years, self.months) {
            (0, m) => f.write_str(&plural(m, "month")),
            (y, 0) => f.write_str(&plural(y, "year")),
            (y, m) => write!(f, "{}, {}", plural(y, "year"), plural(m, "month")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_months_only() {
        let t = Tenure::between(d(2024, 3, 28), d(2024, 11, 2));
        assert_eq!(t, Tenure { years: 0, months: 8 });
        assert_eq!(t.to_string(), "8 months");
        assert_eq!(Tenure::between(d(2024, 3, 28), d(2024, 4, 1)).to_string(), "1 month");
        assert_eq!(Tenure::between(d(2024, 3, 28), d(2024, 3, 30)).to_string(), "0 months");
    }

    #[test]
    fn test_years_and_months() {
        assert_eq!(
            Tenure::between(d(2024, 3, 28), d(2026, 10, 17)).to_string(),
            "2 years, 7 months"
        );
        assert_eq!(
            Tenure::between(d(2024, 3, 28), d(2025, 3, 1)).to_string(),
            "1 year"
        );
        assert_eq!(
            Tenure::between(d(2024, 11, 1), d(2026, 1, 1)).to_string(),
            "1 year, 2 months"
        );
    }

    #[test]
    fn test_future_start() {
        assert_eq!(
            Tenure::between(d(2030, 1, 1), d(2026, 1, 1)),
            Tenure { years: 0, months: 0 }
        );
    }
}
