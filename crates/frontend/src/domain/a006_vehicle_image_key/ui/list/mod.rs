//! Photo slots per vehicle type. Vehicle types load first; keys are then
//! bucketed under them.

mod editor;

use std::collections::HashSet;

use contracts::domain::a006_vehicle_image_key::{
    group_by_vehicle_type, ImageKeyGroup, ImageKeyListQuery, VehicleImageKeyDto, VehicleImageKeyPayload,
};
use contracts::shared::RecordId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a006_vehicle_image_key::{api, IMAGE_KEY_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::labels::format_label;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use editor::{ImageKeyEditor, KeyDraft};

fn toggle_open(open: &mut HashSet<String>, vehicle_type: &str) {
    if !open.remove(vehicle_type) {
        open.insert(vehicle_type.to_string());
    }
}

#[component]
pub fn VehicleImageKeyList() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let types: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let keys: RwSignal<Vec<VehicleImageKeyDto>> = RwSignal::new(Vec::new());
    let open: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let editing: RwSignal<Option<KeyDraft>> = RwSignal::new(None);
    let busy: RwSignal<Option<RecordId>> = RwSignal::new(None);
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u64);

    Effect::new(move |_| {
        reload.track();
        ctx.refresh_token(IMAGE_KEY_LIST_KEY);
        loading.set(true);
        spawn_local(async move {
            if types.with_untracked(|t| t.is_empty()) {
                match api::fetch_vehicle_types().await {
                    Ok(list) => {
                        let _ = types.try_set(list);
                    }
                    Err(e) => {
                        notifier.error(e.user_message("Failed to load vehicle types"));
                        let _ = loading.try_set(false);
                        return;
                    }
                }
            }
            let query = ImageKeyListQuery { page_no: 1, vehicle_type: None };
            match api::fetch_image_keys(&query).await {
                Ok(page) => {
                    let _ = keys.try_set(page.items);
                }
                Err(e) => notifier.error(e.user_message("Failed to load image keys")),
            }
            let _ = loading.try_set(false);
        });
    });

    let groups = Memo::new(move |_| types.with(|t| keys.with(|k| group_by_vehicle_type(t, k))));
    let refetch = move || {
        let _ = reload.try_update(|r| *r += 1);
    };

    let toggle_status = move |key: VehicleImageKeyDto| {
        if busy.with_untracked(|b| b.is_some()) {
            return;
        }
        busy.set(Some(key.id.clone()));
        let payload = VehicleImageKeyPayload::with_status_toggled(&key);
        spawn_local(async move {
            if let Err(e) = api::update_image_key(key.id.as_str(), &payload).await {
                notifier.error(e.user_message("Failed to update status"));
            }
            let _ = busy.try_set(None);
            refetch();
        });
    };

    let remove = move |key: VehicleImageKeyDto| {
        if busy.with_untracked(|b| b.is_some())
            || !dialogs::confirm(&format!("Delete image key {}?", format_label(&key.image_key)))
        {
            return;
        }
        busy.set(Some(key.id.clone()));
        spawn_local(async move {
            match api::delete_image_key(key.id.as_str()).await {
                Ok(ack) => notifier.success(ack.message.unwrap_or_else(|| "Image key deleted".into())),
                Err(e) => notifier.error(e.user_message("Failed to delete image key")),
            }
            let _ = busy.try_set(None);
            refetch();
        });
    };

    let render_group = move |group: ImageKeyGroup| {
        let vehicle_type = StoredValue::new(group.vehicle_type.clone());
        let is_open = move || open.with(|o| o.contains(&vehicle_type.get_value()));
        let count = group.keys.len();
        let keys = StoredValue::new(group.keys);
        view! {
            <Card>
                <Flex gap=FlexGap::Small style="justify-content: space-between; align-items: center;">
                    <button
                        class="group-toggle"
                        on:click=move |_| open.update(|o| toggle_open(o, &vehicle_type.get_value()))
                    >
                        {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                        <span style="font-weight: 500;">{format_label(&group.vehicle_type)}</span>
                        <Badge>{format!("{} Keys", count)}</Badge>
                    </button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| editing.set(Some(KeyDraft::new_for(&vehicle_type.get_value())))
                    >
                        {icon("plus")}
                        " Add Image"
                    </Button>
                </Flex>
                <Show when=is_open>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Image Key"</TableHeaderCell>
                                <TableHeaderCell>"Required"</TableHeaderCell>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {keys
                                .get_value()
                                .into_iter()
                                .map(|key| {
                                    let row_id = key.id.clone();
                                    let row_busy = move || busy.with(|b| b.as_ref() == Some(&row_id));
                                    let row_busy_toggle = row_busy.clone();
                                    let for_toggle = key.clone();
                                    let for_edit = key.clone();
                                    let for_delete = key.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_label(&key.image_key)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if key.required { "Required" } else { "Optional" }}
                                            </TableCell>
                                            <TableCell>{key.display_order}</TableCell>
                                            <TableCell>
                                                <RecordStatusBadge status=key.status />
                                            </TableCell>
                                            <TableCell>
                                                <input
                                                    type="checkbox"
                                                    class="toggle"
                                                    prop:checked=key.status.is_some_and(|s| s.is_active())
                                                    disabled=row_busy_toggle
                                                    on:change=move |_| toggle_status(for_toggle.clone())
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| editing.set(Some(KeyDraft::edit(&for_edit)))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(row_busy)
                                                        on_click=move |_| remove(for_delete.clone())
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </Show>
            </Card>
        }
    };

    view! {
        <PageFrame page_id="a006_vehicle_image_key--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vehicle Image Configuration"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get() && types.with(|t| t.is_empty())>
                    <Flex gap=FlexGap::Small style="justify-content: center; padding: var(--spacing-4xl);">
                        <Spinner />
                        <span>"Loading vehicle types..."</span>
                    </Flex>
                </Show>
                <div class="group-list">
                    {move || groups.get().into_iter().map(render_group).collect_view()}
                </div>
            </div>

            {move || editing.get().map(|draft| view! {
                <ImageKeyEditor
                    draft=draft
                    on_close=move |_| editing.set(None)
                    on_saved=move |_| {
                        editing.set(None);
                        refetch();
                    }
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_open_and_close_independently() {
        let mut open = HashSet::new();
        toggle_open(&mut open, "CAR");
        toggle_open(&mut open, "BIKE");
        toggle_open(&mut open, "CAR");
        assert!(!open.contains("CAR"));
        assert!(open.contains("BIKE"));
    }
}
