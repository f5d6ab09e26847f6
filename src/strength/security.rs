//! Security tiers shown on a stored credential.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Score at which a record passes the "password strength" check.
pub const STRENGTH_CHECK_THRESHOLD: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum SecurityLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SecurityLevel {
    /// Map a 0-100 security score onto a level.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => SecurityLevel::Excellent,
            75..=89 => SecurityLevel::Good,
            50..=74 => SecurityLevel::Fair,
            _ => SecurityLevel::Poor,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SecurityLevel::Excellent => "green",
            SecurityLevel::Good => "blue",
            SecurityLevel::Fair => "yellow",
            SecurityLevel::Poor => "red",
        }
    }
}

pub fn passes_strength_check(score: u8) -> bool {
    score >= STRENGTH_CHECK_THRESHOLD
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityLevel::Poor => write!(f, "Poor"),
            SecurityLevel::Fair => write!(f, "Fair"),
            SecurityLevel::Good => write!(f, "Good"),
            SecurityLevel::Excellent => write!(f, "Excellent"),
        }
    }
}

/// How stale a stored password is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum AgeStatus {
    Recent,
    Moderate,
    Old,
    VeryOld,
}

impl AgeStatus {
    pub fn from_days(days: i64) -> Self {
        if days > 365 {
            AgeStatus::VeryOld
        } else if days > 180 {
            AgeStatus::Old
        } else if days > 90 {
            AgeStatus::Moderate
        } else {
            AgeStatus::Recent
        }
    }

    /// Age of a password last changed at `changed_at`, as seen at `now`.
    pub fn since(changed_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_days(now.signed_duration_since(changed_at).num_days())
    }

    pub fn color(self) -> &'static str {
        match self {
            AgeStatus::VeryOld => "red",
            AgeStatus::Old => "yellow",
            AgeStatus::Moderate => "blue",
            AgeStatus::Recent => "green",
        }
    }
}

impl fmt::Display for AgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeStatus::Recent => write!(f, "Recent"),
            AgeStatus::Moderate => write!(f, "Moderate"),
            AgeStatus::Old => write!(f, "Old"),
            AgeStatus::VeryOld => write!(f, "Very Old"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn security_level_boundaries() {
        assert_eq!(SecurityLevel::from_score(100), SecurityLevel::Excellent);
        assert_eq!(SecurityLevel::from_score(90), SecurityLevel::Excellent);
        assert_eq!(SecurityLevel::from_score(89), SecurityLevel::Good);
        assert_eq!(SecurityLevel::from_score(75), SecurityLevel::Good);
        assert_eq!(SecurityLevel::from_score(74), SecurityLevel::Fair);
        assert_eq!(SecurityLevel::from_score(50), SecurityLevel::Fair);
        assert_eq!(SecurityLevel::from_score(49), SecurityLevel::Poor);
        assert_eq!(SecurityLevel::from_score(0), SecurityLevel::Poor);
    }

    #[test]
    fn strength_check_threshold() {
        assert!(passes_strength_check(75));
        assert!(!passes_strength_check(74));
    }

    #[test]
    fn age_status_boundaries() {
        assert_eq!(AgeStatus::from_days(0), AgeStatus::Recent);
        assert_eq!(AgeStatus::from_days(90), AgeStatus::Recent);
        assert_eq!(AgeStatus::from_days(91), AgeStatus::Moderate);
        assert_eq!(AgeStatus::from_days(180), AgeStatus::Moderate);
        assert_eq!(AgeStatus::from_days(181), AgeStatus::Old);
        assert_eq!(AgeStatus::from_days(365), AgeStatus::Old);
        assert_eq!(AgeStatus::from_days(366), AgeStatus::VeryOld);
        assert_eq!(AgeStatus::VeryOld.to_string(), "Very Old");
    }

    #[test]
    fn age_since_uses_whole_days() {
        let now = Utc::now();
        assert_eq!(AgeStatus::since(now - Duration::days(200), now), AgeStatus::Old);
        assert_eq!(AgeStatus::since(now - Duration::hours(23), now), AgeStatus::Recent);
        // A change date in the future still reads as recent
        assert_eq!(AgeStatus::since(now + Duration::days(3), now), AgeStatus::Recent);
    }
}
