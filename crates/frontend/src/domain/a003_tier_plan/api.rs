use contracts::domain::a003_tier_plan::{
    CreateFeatureDto, CreateLimitDto, CreateTierPlanDto, TierFeatureDto, TierLimitDto, TierPlanDto,
    UpdateFeatureDto, UpdateLimitDto,
};

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

/// Every tier; the endpoint is not paged
pub async fn fetch_tier_plans() -> Result<Vec<TierPlanDto>, ApiError> {
    http::get_list("/tier-plan").await
}

pub async fn fetch_tier_plan(id: &str) -> Result<TierPlanDto, ApiError> {
    http::get_data(&format!("/tier-plan/{}", segment(id))).await
}

pub async fn create_tier_plan(body: CreateTierPlanDto) -> Result<Ack, ApiError> {
    http::send_json(Method::Post, "/tier-plan", &body).await
}

// ============================================================================
// Limits
// ============================================================================

pub async fn fetch_limits(tier_id: &str) -> Result<Vec<TierLimitDto>, ApiError> {
    http::get_list(&format!("/tier-plan-limits/tier-plan/{}", segment(tier_id))).await
}

/// Names the backend accepts for a limit row
pub async fn fetch_limit_names() -> Result<Vec<String>, ApiError> {
    http::get_list("/tier-plan-limits/limit-names").await
}

pub async fn create_limit(body: CreateLimitDto) -> Result<Ack, ApiError> {
    http::send_json(Method::Post, "/tier-plan-limits", &body).await
}

pub async fn update_limit(id: &str, body: UpdateLimitDto) -> Result<Ack, ApiError> {
    http::send_json(Method::Put, &format!("/tier-plan-limits/{}", segment(id)), &body).await
}

pub async fn delete_limit(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("/tier-plan-limits/{}", segment(id))).await
}

// ============================================================================
// Features
// ============================================================================

pub async fn fetch_features(tier_id: &str) -> Result<Vec<TierFeatureDto>, ApiError> {
    http::get_list(&format!("/tier-plan-features/tier-plan/{}", segment(tier_id))).await
}

pub async fn create_feature(body: CreateFeatureDto) -> Result<Ack, ApiError> {
    http::send_json(Method::Post, "/tier-plan-features", &body).await
}

pub async fn update_feature(id: &str, body: UpdateFeatureDto) -> Result<Ack, ApiError> {
    http::send_json(Method::Put, &format!("/tier-plan-features/{}", segment(id)), &body).await
}

pub async fn delete_feature(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("/tier-plan-features/{}", segment(id))).await
}
