pub mod api;
pub mod ui;

pub const THEME_LIST_KEY: &str = "a004_store_theme";
pub const THEME_CREATE_KEY: &str = "a004_store_theme_create";

pub fn view_tab_key(id: &str) -> String {
    format!("a004_store_theme_view_{}", id)
}

pub fn edit_tab_key(id: &str) -> String {
    format!("a004_store_theme_edit_{}", id)
}
