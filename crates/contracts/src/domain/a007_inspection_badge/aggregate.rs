use serde::{Deserialize, Serialize};

use crate::shared::RecordId;

/// Badge image shown for an inspection status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectionBadgeDto {
    pub id: RecordId,
    pub inspection_status: String,
    pub badge_url: Option<String>,
}

/// One line of the badge screen: a status and its badge, if uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeRow {
    pub inspection_status: String,
    pub badge: Option<InspectionBadgeDto>,
}

impl BadgeRow {
    /// Existing badge id; `None` means an upload creates the badge.
    pub fn existing_id(&self) -> Option<&RecordId> {
        self.badge.as_ref().map(|b| &b.id)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.badge.as_ref().and_then(|b| b.badge_url.as_deref())
    }
}

/// One row per known status, in status-list order
pub fn badge_rows(statuses: &[String], badges: &[InspectionBadgeDto]) -> Vec<BadgeRow> {
    statuses
        .iter()
        .map(|status| BadgeRow {
            inspection_status: status.clone(),
            badge: badges
                .iter()
                .find(|b| &b.inspection_status == status)
                .cloned(),
        })
        .collect()
}

/// Replaces the badge with the same status or appends it
pub fn upsert_badge(badges: &mut Vec<InspectionBadgeDto>, badge: InspectionBadgeDto) {
    match badges
        .iter_mut()
        .find(|b| b.inspection_status == badge.inspection_status)
    {
        Some(existing) => *existing = badge,
        None => badges.push(badge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(id: &str, status: &str) -> InspectionBadgeDto {
        InspectionBadgeDto {
            id: RecordId::new(id),
            inspection_status: status.into(),
            badge_url: Some(format!("https://cdn/{}.png", id)),
        }
    }

    #[test]
    fn rows_follow_status_list() {
        let statuses = vec!["PASSED".to_string(), "FAILED".to_string()];
        let rows = badge_rows(&statuses, &[badge("1", "FAILED")]);
        assert!(rows[0].existing_id().is_none());
        assert_eq!(rows[1].existing_id().map(|id| id.as_str()), Some("1"));
    }

    #[test]
    fn upsert_replaces_by_status() {
        let mut badges = vec![badge("1", "PASSED")];
        upsert_badge(&mut badges, badge("2", "PASSED"));
        upsert_badge(&mut badges, badge("3", "FAILED"));
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].id.as_str(), "2");
    }
}
