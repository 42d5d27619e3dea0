pub mod api;
pub mod ui;

/// Tabs that list consultants; each one re-fetches after a review
pub const CONSULTANT_LIST_KEYS: &[&str] = &[
    "a001_consultant_all",
    "a001_consultant_pending",
    "a001_consultant_request_changes",
    "a001_consultant_active",
    "a001_consultant_rejected",
    "a001_consultant_subscriptions",
];

/// Tab key of the review screen of one consultant
pub fn detail_tab_key(id: &str) -> String {
    format!("a001_consultant_detail_{}", id)
}
