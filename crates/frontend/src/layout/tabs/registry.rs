//! Tab content registry: tab.key → view.
//!
//! List tabs have fixed keys; detail and form tabs carry the record id after
//! a fixed prefix (e.g. `a002_vehicle_detail_{id}`).

use crate::domain::a001_consultant::ui::details::ConsultantDetail;
use crate::domain::a001_consultant::ui::list::{ConsultantList, ConsultantView};
use crate::domain::a001_consultant::ui::subscriptions::ConsultantSubscriptions;
use crate::domain::a001_consultant::CONSULTANT_LIST_KEYS;
use crate::domain::a002_vehicle::ui::details::VehicleDetail;
use crate::domain::a002_vehicle::ui::list::{VehicleList, VehicleView};
use crate::domain::a002_vehicle::VEHICLE_LIST_KEYS;
use crate::domain::a003_tier_plan::ui::create::TierPlanCreate;
use crate::domain::a003_tier_plan::ui::details::TierPlanDetail;
use crate::domain::a003_tier_plan::ui::list::TierPlanList;
use crate::domain::a004_store_theme::ui::form::StoreThemeForm;
use crate::domain::a004_store_theme::ui::list::StoreThemeList;
use crate::domain::a004_store_theme::ui::view::StoreThemeView;
use crate::domain::a005_store_template::ui::form::StoreTemplateForm;
use crate::domain::a005_store_template::ui::list::StoreTemplateList;
use crate::domain::a005_store_template::ui::view::StoreTemplateView;
use crate::domain::a006_vehicle_image_key::ui::list::VehicleImageKeyList;
use crate::domain::a007_inspection_badge::ui::list::InspectionBadgeList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

fn close_callback(tabs_store: AppGlobalContext, key: &str) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| tabs_store.close_tab(&key))
}

/// Closes the tab and refreshes the given list tabs
fn done_callback(tabs_store: AppGlobalContext, key: &str, lists: &'static [&'static str]) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| tabs_store.finish_detail(&key, lists))
}

/// Renders the content of the tab with the given key.
/// Unknown keys render a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // a001: Consultants
        // ═══════════════════════════════════════════════════════════════════
        k if ConsultantView::from_tab_key(k).is_some() => {
            let view = ConsultantView::from_tab_key(k).unwrap_or_default();
            view! { <ConsultantList view=view /> }.into_any()
        }
        "a001_consultant_subscriptions" => view! { <ConsultantSubscriptions /> }.into_any(),
        k if k.starts_with("a001_consultant_detail_") => {
            let id = k.trim_start_matches("a001_consultant_detail_").to_string();
            view! {
                <ConsultantDetail
                    id=id
                    on_close=close_callback(tabs_store, key)
                    on_done=done_callback(tabs_store, key, CONSULTANT_LIST_KEYS)
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // a002: Vehicles
        // ═══════════════════════════════════════════════════════════════════
        k if VehicleView::from_tab_key(k).is_some() => {
            let view = VehicleView::from_tab_key(k).unwrap_or_default();
            view! { <VehicleList view=view /> }.into_any()
        }
        k if k.starts_with("a002_vehicle_detail_") => {
            let id = k.trim_start_matches("a002_vehicle_detail_").to_string();
            view! {
                <VehicleDetail
                    id=id
                    on_close=close_callback(tabs_store, key)
                    on_done=done_callback(tabs_store, key, VEHICLE_LIST_KEYS)
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // a003: Tier plans
        // ═══════════════════════════════════════════════════════════════════
        "a003_tier_plan" => view! { <TierPlanList /> }.into_any(),
        "a003_tier_plan_create" => view! {
            <TierPlanCreate
                on_close=close_callback(tabs_store, key)
                on_done=done_callback(tabs_store, key, &["a003_tier_plan"])
            />
        }
        .into_any(),
        k if k.starts_with("a003_tier_plan_detail_") => {
            let id = k.trim_start_matches("a003_tier_plan_detail_").to_string();
            view! { <TierPlanDetail id=id on_close=close_callback(tabs_store, key) /> }.into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // a004: Store themes
        // ═══════════════════════════════════════════════════════════════════
        "a004_store_theme" => view! { <StoreThemeList /> }.into_any(),
        "a004_store_theme_create" => view! {
            <StoreThemeForm
                id=None
                on_close=close_callback(tabs_store, key)
                on_done=done_callback(tabs_store, key, &["a004_store_theme"])
            />
        }
        .into_any(),
        k if k.starts_with("a004_store_theme_edit_") => {
            let id = k.trim_start_matches("a004_store_theme_edit_").to_string();
            view! {
                <StoreThemeForm
                    id=Some(id)
                    on_close=close_callback(tabs_store, key)
                    on_done=done_callback(tabs_store, key, &["a004_store_theme"])
                />
            }
            .into_any()
        }
        k if k.starts_with("a004_store_theme_view_") => {
            let id = k.trim_start_matches("a004_store_theme_view_").to_string();
            view! { <StoreThemeView id=id on_close=close_callback(tabs_store, key) /> }.into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // a005: Store templates
        // ═══════════════════════════════════════════════════════════════════
        "a005_store_template" => view! { <StoreTemplateList /> }.into_any(),
        "a005_store_template_create" => view! {
            <StoreTemplateForm
                id=None
                on_close=close_callback(tabs_store, key)
                on_done=done_callback(tabs_store, key, &["a005_store_template"])
            />
        }
        .into_any(),
        k if k.starts_with("a005_store_template_edit_") => {
            let id = k.trim_start_matches("a005_store_template_edit_").to_string();
            view! {
                <StoreTemplateForm
                    id=Some(id)
                    on_close=close_callback(tabs_store, key)
                    on_done=done_callback(tabs_store, key, &["a005_store_template"])
                />
            }
            .into_any()
        }
        k if k.starts_with("a005_store_template_view_") => {
            let id = k.trim_start_matches("a005_store_template_view_").to_string();
            view! { <StoreTemplateView id=id on_close=close_callback(tabs_store, key) /> }.into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Configuration
        // ═══════════════════════════════════════════════════════════════════
        "a006_vehicle_image_key" => view! { <VehicleImageKeyList /> }.into_any(),
        "a007_inspection_badge" => view! { <InspectionBadgeList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log::warn!("no view registered for tab '{}'", key);
            view! { <div class="placeholder">{format!("Unknown tab: {}", key)}</div> }.into_any()
        }
    }
}
