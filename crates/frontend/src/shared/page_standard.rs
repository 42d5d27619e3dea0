//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_consultant--list"`) and a
//! `data-page-category` taken from the constants below.

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Review or view screen for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Create / edit form.
pub const PAGE_CAT_FORM: &str = "form";

/// Configuration rows (image keys, badges).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_FORM,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_name_entity_and_category() {
        assert!(is_valid_page_id("a001_consultant--list"));
        assert!(is_valid_page_id("a003_tier_plan--form"));
        assert!(!is_valid_page_id("a001_consultant"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("sys_users--chart"));
    }
}
