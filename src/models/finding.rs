use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity level for a finding, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Returns a numeric rank where lower values indicate higher severity.
    /// High = 0, Medium = 1, Low = 2, Info = 3.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
            Severity::Info => 3,
        }
    }
}

/// How certain the detector is that the probed condition is real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Certain,
    Firm,
    Tentative,
}

/// A single finding produced by a detector sweep. Ownership moves to the
/// issue sink on submission; the core keeps nothing back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Detector-supplied display name, e.g. "Default GET servlet exposure".
    pub name: String,
    /// Human-readable detail with the triggering URL interpolated.
    pub detail: String,
    pub severity: Severity,
    pub confidence: Confidence,
    /// The exact URL whose probe fired the predicate.
    pub url: String,
    /// HTTP status observed on the triggering probe.
    pub status: u16,
    pub detected_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ranks_are_ordered() {
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
        assert!(Severity::Low.rank() < Severity::Info.rank());
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Confidence::Certain).unwrap(),
            "\"certain\""
        );
    }
}
