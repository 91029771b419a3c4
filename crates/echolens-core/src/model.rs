use crate::errors::{EchoError, EchoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region used when the caller does not pick one.
pub const DEFAULT_REGION: &str = "Southeast Asia";

/// Active-case count used when the caller does not pick one.
pub const DEFAULT_CASES: u64 = 1500;

/// Number of days a prediction nominally covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ForecastHorizon {
    Days30,
    Days60,
    #[default]
    Days90,
    Days120,
    Days180,
}

impl ForecastHorizon {
    pub const ALL: [ForecastHorizon; 5] = [
        Self::Days30,
        Self::Days60,
        Self::Days90,
        Self::Days120,
        Self::Days180,
    ];

    pub fn days(self) -> u32 {
        match self {
            Self::Days30 => 30,
            Self::Days60 => 60,
            Self::Days90 => 90,
            Self::Days120 => 120,
            Self::Days180 => 180,
        }
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = EchoError;

    fn try_from(days: u32) -> EchoResult<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.days() == days)
            .ok_or(EchoError::InvalidHorizon { days })
    }
}

impl From<ForecastHorizon> for u32 {
    fn from(h: ForecastHorizon) -> Self {
        h.days()
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl std::str::FromStr for ForecastHorizon {
    type Err = EchoError;

    fn from_str(s: &str) -> EchoResult<Self> {
        let days: u32 = s
            .trim()
            .parse()
            .map_err(|_| EchoError::HorizonNotANumber {
                input: s.to_string(),
            })?;
        Self::try_from(days)
    }
}

/// Inputs of one prediction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Free-text label, embedded verbatim.
    pub region: String,
    pub cases: u64,
    pub horizon: ForecastHorizon,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            cases: DEFAULT_CASES,
            horizon: ForecastHorizon::default(),
        }
    }
}

impl QueryParams {
    pub fn new(region: impl Into<String>, cases: u64, horizon: ForecastHorizon) -> Self {
        Self {
            region: region.into(),
            cases,
            horizon,
        }
    }

    /// Case count with thousands separators, e.g. `1,500`.
    pub fn formatted_cases(&self) -> String {
        group_thousands(self.cases)
    }
}

/// Format an integer with `,` every three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Raw completion returned by a provider. The text is never parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub meta: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_accepts_only_enumerated_days() {
        for days in [30, 60, 90, 120, 180] {
            let h = ForecastHorizon::try_from(days).unwrap();
            assert_eq!(h.days(), days);
        }
        for days in [0, 1, 29, 45, 365] {
            assert!(matches!(
                ForecastHorizon::try_from(days),
                Err(EchoError::InvalidHorizon { days: d }) if d == days
            ));
        }
    }

    #[test]
    fn horizon_from_str() {
        assert_eq!("120".parse::<ForecastHorizon>().unwrap(), ForecastHorizon::Days120);
        match "ninety".parse::<ForecastHorizon>() {
            Err(EchoError::HorizonNotANumber { input }) => assert_eq!(input, "ninety"),
            other => panic!("expected HorizonNotANumber, got {other:?}"),
        }
        let msg = "ninety".parse::<ForecastHorizon>().unwrap_err().to_string();
        assert!(msg.contains("'ninety'"), "{msg}");
        assert!(!msg.contains(": 0 days"), "{msg}");
        assert!("100".parse::<ForecastHorizon>().is_err());
    }

    #[test]
    fn defaults_match_dashboard() {
        let p = QueryParams::default();
        assert_eq!(p.region, "Southeast Asia");
        assert_eq!(p.cases, 1500);
        assert_eq!(p.horizon.days(), 90);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(1500), "1,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::system("hi");
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["role"], "system");
        assert_eq!(v["content"], "hi");
    }
}
