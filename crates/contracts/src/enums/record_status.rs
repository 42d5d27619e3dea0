use serde::{Deserialize, Serialize};

/// Lifecycle status shared by consultants, users, tiers, themes, templates
/// and image keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
    Deleted,
}

impl RecordStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "ACTIVE",
            RecordStatus::Inactive => "INACTIVE",
            RecordStatus::Deleted => "DELETED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
            RecordStatus::Deleted => "Deleted",
        }
    }

    /// Values an admin may pick in an edit form
    pub fn editable() -> Vec<RecordStatus> {
        vec![RecordStatus::Active, RecordStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACTIVE" => Some(RecordStatus::Active),
            "INACTIVE" => Some(RecordStatus::Inactive),
            "DELETED" => Some(RecordStatus::Deleted),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }

    /// Status sent by an on/off switch: anything not active turns active.
    pub fn toggled(&self) -> RecordStatus {
        match self {
            RecordStatus::Active => RecordStatus::Inactive,
            _ => RecordStatus::Active,
        }
    }

    pub fn from_active(active: bool) -> Self {
        if active {
            RecordStatus::Active
        } else {
            RecordStatus::Inactive
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_active_and_inactive() {
        assert_eq!(RecordStatus::Active.toggled(), RecordStatus::Inactive);
        assert_eq!(RecordStatus::Inactive.toggled(), RecordStatus::Active);
        assert_eq!(RecordStatus::Deleted.toggled(), RecordStatus::Active);
    }

    #[test]
    fn parses_wire_codes() {
        let status: RecordStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(status, RecordStatus::Inactive);
        assert_eq!(RecordStatus::from_code("nope"), None);
    }
}
