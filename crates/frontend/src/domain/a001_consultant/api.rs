use contracts::domain::a001_consultant::{
    ChangeStatusDto, ChangeTierDto, ConsultantAddressDto, ConsultantDocumentsDto, ConsultantDto,
    ConsultantListQuery, SuspendDto, VerifyConsultationDto,
};
use contracts::enums::RecordStatus;
use contracts::shared::{Page, RecordId};

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

/// `GET /consultation/filter`; unset filters are left out of the query
pub async fn fetch_consultants(query: ConsultantListQuery) -> Result<Page<ConsultantDto>, ApiError> {
    http::get_page("/consultation/filter", &query).await
}

pub async fn fetch_consultant(id: &str) -> Result<ConsultantDto, ApiError> {
    http::get_data(&format!("/consultation/{}", segment(id))).await
}

pub async fn fetch_address(id: &str) -> Result<Option<ConsultantAddressDto>, ApiError> {
    http::get_data(&format!("/consultation/address/{}", segment(id))).await
}

pub async fn fetch_documents(id: &str) -> Result<Option<ConsultantDocumentsDto>, ApiError> {
    http::get_data(&format!("/consultation/document/{}", segment(id))).await
}

pub async fn verify(id: &str, body: VerifyConsultationDto) -> Result<Ack, ApiError> {
    http::send_json(
        Method::Patch,
        &format!("/consultation/verify/{}", segment(id)),
        &body,
    )
    .await
}

pub async fn change_status(id: &str, status: RecordStatus) -> Result<Ack, ApiError> {
    http::send_json(
        Method::Patch,
        &format!("/consultation/change-status/{}", segment(id)),
        &ChangeStatusDto { status },
    )
    .await
}

pub async fn suspend(id: &str, reason: String) -> Result<Ack, ApiError> {
    http::send_json(
        Method::Post,
        &format!("/consultation/suspend/{}", segment(id)),
        &SuspendDto { reason },
    )
    .await
}

pub async fn change_tier(id: &str, tier_plan_id: RecordId) -> Result<Ack, ApiError> {
    http::send_json(
        Method::Patch,
        &format!("/consultation/change-tier/{}", segment(id)),
        &ChangeTierDto { tier_plan_id },
    )
    .await
}
