//! Sidebar with collapsible menu groups

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, label)
}

fn item(key: &'static str) -> (&'static str, &'static str) {
    (key, tab_label_for_key(key))
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "consultants",
            label: "Consultants",
            icon: "consultants",
            items: vec![
                item("a001_consultant_all"),
                item("a001_consultant_pending"),
                item("a001_consultant_request_changes"),
                item("a001_consultant_active"),
                item("a001_consultant_rejected"),
            ],
        },
        MenuGroup {
            id: "vehicles",
            label: "Vehicles",
            icon: "vehicles",
            items: vec![
                item("a002_vehicle"),
                item("a002_vehicle_live"),
                item("a002_vehicle_drafts"),
                item("a002_vehicle_flagged"),
                item("a002_vehicle_sold"),
            ],
        },
        MenuGroup {
            id: "subscriptions",
            label: "Subscriptions",
            icon: "subscriptions",
            items: vec![item("a003_tier_plan"), item("a001_consultant_subscriptions")],
        },
        MenuGroup {
            id: "store",
            label: "Store",
            icon: "store",
            items: vec![item("a004_store_theme"), item("a005_store_template")],
        },
        MenuGroup {
            id: "users",
            label: "Users",
            icon: "users",
            items: vec![item("sys_users")],
        },
        MenuGroup {
            id: "configuration",
            label: "Configuration",
            icon: "settings",
            items: vec![item("a006_vehicle_image_key"), item("a007_inspection_badge")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(vec!["consultants".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_show = group_id.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|ids| ids.contains(&group_id_for_exp))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id_for_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, label)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon("item")}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
