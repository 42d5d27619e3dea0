use contracts::enums::RecordStatus;
use contracts::shared::{Page, PageQuery};
use contracts::system::users::{UpdateUserStatusDto, UserDto, UserMetaData};

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

/// One page of `GET /user`
pub async fn fetch_users(page_no: u32) -> Result<Page<UserDto>, ApiError> {
    http::get_page("/user", &PageQuery { page_no }).await
}

pub async fn fetch_user(id: &str) -> Result<UserDto, ApiError> {
    http::get_data(&format!("/user/{}", segment(id))).await
}

/// Profile details; `None` when the user never filled them in
pub async fn fetch_meta_data(id: &str) -> Result<Option<UserMetaData>, ApiError> {
    http::get_data(&format!("/user/meta-data/{}", segment(id))).await
}

pub async fn update_status(id: &str, status: RecordStatus) -> Result<Ack, ApiError> {
    http::send_json(
        Method::Patch,
        &format!("/user/{}", segment(id)),
        &UpdateUserStatusDto { status },
    )
    .await
}
