pub mod api;
pub mod ui;

pub const BADGE_LIST_KEY: &str = "a007_inspection_badge";
