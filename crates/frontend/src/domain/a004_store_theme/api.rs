use contracts::domain::a004_store_theme::StoreThemeDto;
use contracts::shared::{Page, PageQuery};
use web_sys::FormData;

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

pub async fn fetch_themes(page_no: u32) -> Result<Page<StoreThemeDto>, ApiError> {
    http::get_page("/store-theme", &PageQuery { page_no }).await
}

pub async fn fetch_theme(id: &str) -> Result<StoreThemeDto, ApiError> {
    http::get_data(&format!("/store-theme/{}", segment(id))).await
}

pub async fn fetch_soft_deleted_theme(id: &str) -> Result<StoreThemeDto, ApiError> {
    http::get_data(&format!("/store-theme/soft-delete/{}", segment(id))).await
}

/// Active record first, then the soft-deleted one
pub async fn fetch_theme_any(id: &str) -> Result<StoreThemeDto, ApiError> {
    match fetch_theme(id).await {
        Ok(theme) => Ok(theme),
        Err(e) => {
            log::debug!("theme {} not active ({}), trying soft-deleted", id, e);
            fetch_soft_deleted_theme(id).await
        }
    }
}

pub async fn create_theme(form: FormData) -> Result<Ack, ApiError> {
    http::send_form(Method::Post, "/store-theme", form).await
}

pub async fn update_theme(id: &str, form: FormData) -> Result<Ack, ApiError> {
    http::send_form(Method::Put, &format!("/store-theme/{}", segment(id)), form).await
}

pub async fn soft_delete_theme(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("/store-theme/soft-delete/{}", segment(id))).await
}

pub async fn delete_theme(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("/store-theme/{}", segment(id))).await
}
