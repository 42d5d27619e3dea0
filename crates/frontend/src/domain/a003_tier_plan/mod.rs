pub mod api;
pub mod ui;

pub const TIER_LIST_KEY: &str = "a003_tier_plan";
pub const TIER_CREATE_KEY: &str = "a003_tier_plan_create";

pub fn detail_tab_key(id: &str) -> String {
    format!("a003_tier_plan_detail_{}", id)
}
