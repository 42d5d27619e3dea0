pub mod api;
pub mod ui;

/// Tabs that list vehicles; each one re-fetches after a verification
pub const VEHICLE_LIST_KEYS: &[&str] = &[
    "a002_vehicle",
    "a002_vehicle_live",
    "a002_vehicle_drafts",
    "a002_vehicle_flagged",
    "a002_vehicle_sold",
];

pub fn detail_tab_key(id: &str) -> String {
    format!("a002_vehicle_detail_{}", id)
}
