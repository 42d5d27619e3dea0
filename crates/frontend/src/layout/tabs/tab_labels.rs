//! Tab labels: the one place tab titles come from.

/// Readable title for a tab key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Consultants ──────────────────────────────────────────────────
        "a001_consultant_all" => "All Consultants",
        "a001_consultant_pending" => "Pending Verification",
        "a001_consultant_request_changes" => "Change Requests",
        "a001_consultant_active" => "Active Consultants",
        "a001_consultant_rejected" => "Suspended Consultants",
        "a001_consultant_subscriptions" => "Consultant Subscriptions",
        k if k.starts_with("a001_consultant_detail_") => "Consultant",

        // ── Vehicles ─────────────────────────────────────────────────────
        "a002_vehicle" => "Vehicles",
        "a002_vehicle_live" => "Live Vehicles",
        "a002_vehicle_drafts" => "Requested Vehicles",
        "a002_vehicle_flagged" => "Flagged Vehicles",
        "a002_vehicle_sold" => "Sold Vehicles",
        k if k.starts_with("a002_vehicle_detail_") => "Vehicle",

        // ── Subscriptions ────────────────────────────────────────────────
        "a003_tier_plan" => "Tier Plans",
        "a003_tier_plan_create" => "New Tier Plan",
        k if k.starts_with("a003_tier_plan_detail_") => "Tier Plan",

        // ── Store ────────────────────────────────────────────────────────
        "a004_store_theme" => "Store Themes",
        "a004_store_theme_create" => "New Store Theme",
        k if k.starts_with("a004_store_theme_view_") => "Store Theme",
        k if k.starts_with("a004_store_theme_edit_") => "Edit Store Theme",
        "a005_store_template" => "Store Templates",
        "a005_store_template_create" => "New Store Template",
        k if k.starts_with("a005_store_template_view_") => "Store Template",
        k if k.starts_with("a005_store_template_edit_") => "Edit Store Template",

        // ── Configuration ────────────────────────────────────────────────
        "a006_vehicle_image_key" => "Vehicle Image Keys",
        "a007_inspection_badge" => "Inspection Badges",

        // ── System ───────────────────────────────────────────────────────
        "sys_users" => "Users",

        _ => "Untitled",
    }
}

/// Detail tab title: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// First non-empty candidate, falling back to the record id.
pub fn pick_identifier<'a>(candidates: &[Option<&'a str>], id: &'a str) -> &'a str {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_keys_resolve_by_prefix() {
        assert_eq!(tab_label_for_key("a001_consultant_detail_c1"), "Consultant");
        assert_eq!(tab_label_for_key("a004_store_theme_edit_9"), "Edit Store Theme");
        assert_eq!(tab_label_for_key("a001_consultant_pending"), "Pending Verification");
        assert_eq!(tab_label_for_key("a002_vehicle_flagged"), "Flagged Vehicles");
        assert_eq!(tab_label_for_key("a002_vehicle_detail_7"), "Vehicle");
        assert_eq!(tab_label_for_key("nope"), "Untitled");
    }

    #[test]
    fn identifier_skips_blank_candidates() {
        assert_eq!(pick_identifier(&[None, Some("  "), Some("Acme")], "c1"), "Acme");
        assert_eq!(pick_identifier(&[None], "c1"), "c1");
        assert_eq!(detail_tab_label("Vehicle", "Swift"), "Vehicle · Swift");
    }
}
