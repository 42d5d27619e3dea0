pub mod api;
pub mod ui;

pub const TEMPLATE_LIST_KEY: &str = "a005_store_template";
pub const TEMPLATE_CREATE_KEY: &str = "a005_store_template_create";

pub fn view_tab_key(id: &str) -> String {
    format!("a005_store_template_view_{}", id)
}

pub fn edit_tab_key(id: &str) -> String {
    format!("a005_store_template_edit_{}", id)
}
