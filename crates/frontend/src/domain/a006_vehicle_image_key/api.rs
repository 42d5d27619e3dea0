use contracts::domain::a006_vehicle_image_key::{ImageKeyListQuery, VehicleImageKeyDto, VehicleImageKeyPayload};
use contracts::shared::Page;

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

pub async fn fetch_vehicle_types() -> Result<Vec<String>, ApiError> {
    http::get_list("/vehicle-image-key/vehicle-types").await
}

pub async fn fetch_image_keys(query: &ImageKeyListQuery) -> Result<Page<VehicleImageKeyDto>, ApiError> {
    http::get_page("/vehicle-image-key", query).await
}

pub async fn create_image_key(payload: &VehicleImageKeyPayload) -> Result<Ack, ApiError> {
    http::send_json(Method::Post, "/vehicle-image-key", payload).await
}

pub async fn update_image_key(id: &str, payload: &VehicleImageKeyPayload) -> Result<Ack, ApiError> {
    http::send_json(Method::Put, &format!("/vehicle-image-key/{}", segment(id)), payload).await
}

pub async fn delete_image_key(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("/vehicle-image-key/{}", segment(id))).await
}
