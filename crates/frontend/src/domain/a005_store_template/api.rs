use contracts::domain::a005_store_template::StoreTemplateDto;
use contracts::shared::{Page, PageQuery};
use web_sys::FormData;

use crate::shared::api_utils::segment;
use crate::shared::http::{self, Ack, ApiError, Method};

const BASE: &str = "/consultation/store-template";

pub async fn fetch_templates(page_no: u32) -> Result<Page<StoreTemplateDto>, ApiError> {
    http::get_page(BASE, &PageQuery { page_no }).await
}

pub async fn fetch_template(id: &str) -> Result<StoreTemplateDto, ApiError> {
    http::get_data(&format!("{}/{}", BASE, segment(id))).await
}

pub async fn create_template(form: FormData) -> Result<Ack, ApiError> {
    http::send_form(Method::Post, BASE, form).await
}

pub async fn update_template(id: &str, form: FormData) -> Result<Ack, ApiError> {
    http::send_form(Method::Put, &format!("{}/{}", BASE, segment(id)), form).await
}

pub async fn soft_delete_template(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("{}/soft/{}", BASE, segment(id))).await
}

pub async fn delete_template(id: &str) -> Result<Ack, ApiError> {
    http::delete(&format!("{}/{}", BASE, segment(id))).await
}
