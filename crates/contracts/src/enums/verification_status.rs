use serde::{Deserialize, Serialize};

/// Review state of a consultant or a vehicle listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    #[default]
    Requested,
    RequestChanges,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// Wire code, as sent in query strings and bodies
    pub fn code(&self) -> &'static str {
        match self {
            VerificationStatus::Requested => "REQUESTED",
            VerificationStatus::RequestChanges => "REQUEST_CHANGES",
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Rejected => "REJECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VerificationStatus::Requested => "Requested",
            VerificationStatus::RequestChanges => "Request Changes",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<VerificationStatus> {
        vec![
            VerificationStatus::Requested,
            VerificationStatus::RequestChanges,
            VerificationStatus::Verified,
            VerificationStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "REQUESTED" => Some(VerificationStatus::Requested),
            "REQUEST_CHANGES" => Some(VerificationStatus::RequestChanges),
            "VERIFIED" => Some(VerificationStatus::Verified),
            "REJECTED" => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }

    /// VERIFIED and REJECTED close the review; only change-status may move
    /// the record afterwards.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            VerificationStatus::Verified | VerificationStatus::Rejected
        )
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_serde() {
        for status in VerificationStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(VerificationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn only_verified_and_rejected_are_terminal() {
        assert!(VerificationStatus::Verified.is_terminal());
        assert!(VerificationStatus::Rejected.is_terminal());
        assert!(!VerificationStatus::Requested.is_terminal());
        assert!(!VerificationStatus::RequestChanges.is_terminal());
    }
}
