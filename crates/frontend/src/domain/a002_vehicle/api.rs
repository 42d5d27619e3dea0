use contracts::domain::a002_vehicle::{
    VehicleAddressDto, VehicleDocumentDto, VehicleDto, VehicleExtraDetailDto, VehicleImageDto,
    VehicleListQuery, VehicleStepStatusDto, VehicleVerifyDto,
};
use contracts::shared::Page;

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

pub async fn fetch_vehicles(query: VehicleListQuery) -> Result<Page<VehicleDto>, ApiError> {
    http::get_page("/vehicle", &query).await
}

pub async fn fetch_vehicle(id: &str) -> Result<VehicleDto, ApiError> {
    http::get_data(&format!("/vehicle/{}", segment(id))).await
}

pub async fn fetch_address(id: &str) -> Result<Option<VehicleAddressDto>, ApiError> {
    http::get_data(&format!("/vehicle/address/{}", segment(id))).await
}

pub async fn fetch_document(id: &str) -> Result<Option<VehicleDocumentDto>, ApiError> {
    http::get_data(&format!("/vehicle/document/{}", segment(id))).await
}

pub async fn fetch_extra_details(id: &str) -> Result<Vec<VehicleExtraDetailDto>, ApiError> {
    http::get_list(&format!("/vehicle/extra-details/{}", segment(id))).await
}

pub async fn fetch_step_status(id: &str) -> Result<Option<VehicleStepStatusDto>, ApiError> {
    http::get_data(&format!("/vehicle/step-status/{}", segment(id))).await
}

pub async fn fetch_images(id: &str) -> Result<Vec<VehicleImageDto>, ApiError> {
    http::get_list(&format!("/vehicle/image/{}", segment(id))).await
}

/// The only transition the dashboard makes on a vehicle
pub async fn verify(id: &str, remarks: String) -> Result<Ack, ApiError> {
    http::send_json(
        Method::Patch,
        &format!("/vehicle/verify/{}", segment(id)),
        &VehicleVerifyDto::verified(remarks),
    )
    .await
}
