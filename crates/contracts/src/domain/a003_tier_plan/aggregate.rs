use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;
use crate::shared::record_id::text_or_number;
use crate::shared::RecordId;

// ============================================================================
// Read models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TierLimitDto {
    pub id: RecordId,
    pub limits_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub limits_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TierFeatureDto {
    pub id: RecordId,
    pub feature_name: String,
    pub feature_description: String,
}

/// Subscription tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TierPlanDto {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub monthly_price: Option<f64>,
    pub yearly_price: Option<f64>,
    pub monthly_duration_in_days: Option<u32>,
    pub yearly_duration_in_days: Option<u32>,
    pub status: Option<RecordStatus>,
    pub tier_badge_url: Option<String>,
    pub tier_plan_limits: Vec<TierLimitDto>,
    pub features: Vec<TierFeatureDto>,
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LimitDraft {
    pub limits_name: String,
    pub limits_value: String,
}

impl LimitDraft {
    pub fn is_complete(&self) -> bool {
        !self.limits_name.trim().is_empty() && !self.limits_value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDraft {
    pub feature_name: String,
    pub feature_description: String,
}

impl FeatureDraft {
    pub fn is_complete(&self) -> bool {
        !self.feature_name.trim().is_empty()
    }
}

/// Body of `POST /tier-plan`. The backend reads both prices in snake_case
/// while every other field is camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTierPlanDto {
    pub title: String,
    pub description: String,
    #[serde(rename = "monthly_price")]
    pub monthly_price: f64,
    #[serde(rename = "yearly_price")]
    pub yearly_price: f64,
    pub monthly_duration_in_days: u32,
    pub yearly_duration_in_days: u32,
    pub status: RecordStatus,
    pub tier_badge_url: String,
    pub tier_plan_limits: Vec<LimitDraft>,
    pub features: Vec<FeatureDraft>,
}

/// Body of `PUT /tier-plan-limits/{id}`
pub type UpdateLimitDto = LimitDraft;

/// Body of `PUT /tier-plan-features/{id}`
pub type UpdateFeatureDto = FeatureDraft;

/// Body of `POST /tier-plan-limits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLimitDto {
    pub tier_plan_id: RecordId,
    #[serde(flatten)]
    pub limit: LimitDraft,
}

/// Body of `POST /tier-plan-features`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureDto {
    pub tier_plan_id: RecordId,
    #[serde(flatten)]
    pub feature: FeatureDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_mixes_snake_case_prices() {
        let body = CreateTierPlanDto {
            title: "Gold".into(),
            description: String::new(),
            monthly_price: 999.0,
            yearly_price: 9999.0,
            monthly_duration_in_days: 30,
            yearly_duration_in_days: 365,
            status: RecordStatus::Active,
            tier_badge_url: String::new(),
            tier_plan_limits: vec![],
            features: vec![],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["monthly_price"], 999.0);
        assert_eq!(json["yearly_price"], 9999.0);
        assert_eq!(json["monthlyDurationInDays"], 30);
        assert_eq!(json["tierBadgeUrl"], "");
    }

    #[test]
    fn create_limit_flattens_draft() {
        let body = CreateLimitDto {
            tier_plan_id: RecordId::new("3"),
            limit: LimitDraft {
                limits_name: "MAX_LISTINGS".into(),
                limits_value: "50".into(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["tierPlanId"], "3");
        assert_eq!(json["limitsName"], "MAX_LISTINGS");
        assert_eq!(json["limitsValue"], "50");
    }

    #[test]
    fn tier_with_numeric_ids_decodes() {
        let tier: TierPlanDto = serde_json::from_str(
            r#"{"id":1,"title":"Silver","monthlyPrice":499,
                "tierPlanLimits":[{"id":7,"limitsName":"LEADS","limitsValue":"10"}]}"#,
        )
        .unwrap();
        assert_eq!(tier.tier_plan_limits[0].id.as_str(), "7");
        assert!(tier.features.is_empty());
    }
}
