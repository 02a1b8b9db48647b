use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a positional column comparison for one row pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Equal,
    Different,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "Equal"),
            Self::Different => write!(f, "Different"),
        }
    }
}

/// Outcome of a key-join field comparison.
///
/// The join path reconciles exact records, so its vocabulary is the one the
/// back-office teams already use: `OK` or `Divergente`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Ok,
    Divergent,
}

impl FieldStatus {
    /// Combine per-field statuses into an overall row status.
    pub fn combine(statuses: impl IntoIterator<Item = FieldStatus>) -> FieldStatus {
        if statuses.into_iter().all(|s| s == FieldStatus::Ok) {
            FieldStatus::Ok
        } else {
            FieldStatus::Divergent
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Divergent => write!(f, "Divergente"),
        }
    }
}

/// Classification of a single date value against the business-day calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayClass {
    BusinessDay,
    Weekend,
    Holiday,
    /// Unparseable or missing input; carries the reason.
    Invalid(String),
}

impl DayClass {
    pub fn is_business_day(&self) -> bool {
        matches!(self, Self::BusinessDay)
    }

    /// Human-readable reason for a non-business-day classification.
    pub fn reason(&self) -> &str {
        match self {
            Self::BusinessDay => "business day",
            Self::Weekend => "weekend",
            Self::Holiday => "holiday",
            Self::Invalid(reason) => reason,
        }
    }
}

impl fmt::Display for DayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Combined status of one row in the paired date analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRowStatus {
    Ok,
    BothNonBusiness,
    LeftNonBusiness { reason: String },
    RightNonBusiness { reason: String },
}

impl DateRowStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Render the status with the dataset labels the caller displays.
    pub fn describe(&self, left_label: &str, right_label: &str) -> String {
        match self {
            Self::Ok => "OK".to_string(),
            Self::BothNonBusiness => "both non-business".to_string(),
            Self::LeftNonBusiness { reason } => format!("{left_label}: {reason}"),
            Self::RightNonBusiness { reason } => format!("{right_label}: {reason}"),
        }
    }
}

/// Named equality strategies.
///
/// The positional comparator matches values by their string form (`1` and
/// `"1"` agree); the key-join reconciler demands typed equality. Keeping the
/// two as explicit strategies prevents the semantics drifting silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equality {
    LooseString,
    Typed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_status_combines_all_ok() {
        let overall = FieldStatus::combine([FieldStatus::Ok, FieldStatus::Ok]);
        assert_eq!(overall, FieldStatus::Ok);
    }

    #[test]
    fn field_status_combines_any_divergent() {
        let overall = FieldStatus::combine([FieldStatus::Ok, FieldStatus::Divergent]);
        assert_eq!(overall, FieldStatus::Divergent);
    }

    #[test]
    fn field_status_combines_empty_as_ok() {
        // Vacuous truth: a row with nothing to compare diverges nowhere.
        assert_eq!(FieldStatus::combine([]), FieldStatus::Ok);
    }

    #[test]
    fn field_status_display_uses_operator_vocabulary() {
        assert_eq!(FieldStatus::Ok.to_string(), "OK");
        assert_eq!(FieldStatus::Divergent.to_string(), "Divergente");
    }

    #[test]
    fn date_row_status_describes_sides_with_labels() {
        let status = DateRowStatus::LeftNonBusiness {
            reason: "weekend".to_string(),
        };
        assert_eq!(status.describe("Sistema", "B3"), "Sistema: weekend");
    }
}
