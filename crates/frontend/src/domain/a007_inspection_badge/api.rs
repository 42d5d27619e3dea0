use contracts::domain::a007_inspection_badge::InspectionBadgeDto;
use web_sys::FormData;

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

pub async fn fetch_badges() -> Result<Vec<InspectionBadgeDto>, ApiError> {
    http::get_list("/inspection-badge").await
}

/// Every status a badge can be uploaded for
pub async fn fetch_inspection_statuses() -> Result<Vec<String>, ApiError> {
    http::get_list("/inspection-badge/inspection-status").await
}

/// Multipart `{inspectionStatus, badge}`
pub async fn create_badge(form: FormData) -> Result<Ack, ApiError> {
    http::send_form(Method::Post, "/inspection-badge", form).await
}

/// Multipart `{image}`
pub async fn update_badge(id: &str, form: FormData) -> Result<Ack, ApiError> {
    http::send_form(Method::Put, &format!("/inspection-badge/{}", segment(id)), form).await
}
