//! Month-precision date ranges for timeline entries.

use std::fmt;

use serde::Deserialize;
use time::{macros::format_description, Date};

use super::content::ContentError;

/// A calendar month, stored as the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct YearMonth(Date);

impl YearMonth {
    /// Parses `YYYY-MM`.
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let padded = format!("{}-01", raw.trim());
        Date::parse(&padded, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|err| ContentError::InvalidPeriod {
                raw: raw.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn date(&self) -> Date {
        self.0
    }

    /// Short display form, e.g. `Jul 2025`.
    pub fn label(&self) -> String {
        self.0
            .format(format_description!("[month repr:short] [year]"))
            .unwrap_or_else(|_| format!("{}-{:02}", self.0.year(), self.0.month() as u8))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ContentError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0.year(), self.0.month() as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Period {
    pub start: YearMonth,
    /// `None` means the entry is ongoing.
    #[serde(default)]
    pub end: Option<YearMonth>,
}

impl Period {
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    pub fn check_order(&self) -> Result<(), ContentError> {
        match self.end {
            Some(end) if end < self.start => Err(ContentError::PeriodOrder {
                start: self.start.to_string(),
                end: end.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// `Jul 2025 – Present`, `Aug 2023 – Nov 2023`, or `Aug 2022` for a single month.
    pub fn label(&self, present: &str) -> String {
        match self.end {
            None => format!("{} – {present}", self.start.label()),
            Some(end) if end == self.start => self.start.label(),
            Some(end) => format!("{} – {}", self.start.label(), end.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(raw: &str) -> YearMonth {
        YearMonth::parse(raw).unwrap()
    }

    #[test]
    fn parses_and_labels_months() {
        assert_eq!(ym("2025-07").label(), "Jul 2025");
        assert_eq!(ym("2021-10").to_string(), "2021-10");
    }

    #[test]
    fn rejects_malformed_months() {
        for raw in ["2025-13", "2025", "July 2025", ""] {
            assert!(
                matches!(YearMonth::parse(raw), Err(ContentError::InvalidPeriod { .. })),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn labels_cover_ongoing_ranged_and_single_month() {
        let ongoing = Period {
            start: ym("2025-07"),
            end: None,
        };
        assert_eq!(ongoing.label("Present"), "Jul 2025 – Present");

        let ranged = Period {
            start: ym("2023-08"),
            end: Some(ym("2023-11")),
        };
        assert_eq!(ranged.label("Present"), "Aug 2023 – Nov 2023");

        let single = Period {
            start: ym("2022-08"),
            end: Some(ym("2022-08")),
        };
        assert_eq!(single.label("Present"), "Aug 2022");
    }

    #[test]
    fn end_before_start_is_rejected() {
        let backwards = Period {
            start: ym("2024-05"),
            end: Some(ym("2023-01")),
        };
        assert!(matches!(
            backwards.check_order(),
            Err(ContentError::PeriodOrder { .. })
        ));
    }
}
