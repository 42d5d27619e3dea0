use std::collections::HashSet;

use contracts::domain::a007_inspection_badge::{badge_rows, upsert_badge, BadgeRow, InspectionBadgeDto};
use contracts::shared::RecordId;
use leptos::html;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};

use crate::domain::a007_inspection_badge::{api, BADGE_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::shared::http::{Ack, ApiError};
use crate::shared::icons::icon;
use crate::shared::labels::format_label;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::upload::{multipart, picked_file};

/// Where an upload for a status goes
#[derive(Debug, Clone, PartialEq)]
enum BadgeUpload {
    Create { inspection_status: String },
    Update { id: RecordId },
}

impl BadgeUpload {
    fn for_row(row: &BadgeRow) -> Self {
        match row.existing_id() {
            Some(id) => BadgeUpload::Update { id: id.clone() },
            None => BadgeUpload::Create {
                inspection_status: row.inspection_status.clone(),
            },
        }
    }

    /// Multipart field carrying the file
    fn file_part(&self) -> &'static str {
        match self {
            BadgeUpload::Create { .. } => "badge",
            BadgeUpload::Update { .. } => "image",
        }
    }

    fn form(&self, file: File) -> Result<FormData, ApiError> {
        let parts = match self {
            BadgeUpload::Create { inspection_status } => vec![("inspectionStatus", inspection_status.clone())],
            BadgeUpload::Update { .. } => Vec::new(),
        };
        multipart(&parts, &[(self.file_part(), Some(file))])
    }

    async fn send(&self, form: FormData) -> Result<Ack, ApiError> {
        match self {
            BadgeUpload::Create { .. } => api::create_badge(form).await,
            BadgeUpload::Update { id } => api::update_badge(id.as_str(), form).await,
        }
    }
}

#[component]
pub fn InspectionBadgeList() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let statuses: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let badges: RwSignal<Vec<InspectionBadgeDto>> = RwSignal::new(Vec::new());
    let uploading: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u64);

    Effect::new(move |_| {
        reload.track();
        ctx.refresh_token(BADGE_LIST_KEY);
        loading.set(true);
        spawn_local(async move {
            match api::fetch_inspection_statuses().await {
                Ok(list) => {
                    let _ = statuses.try_set(list);
                }
                Err(e) => notifier.error(e.user_message("Failed to load inspection statuses")),
            }
            match api::fetch_badges().await {
                Ok(list) => {
                    let _ = badges.try_set(list);
                }
                Err(e) => notifier.error(e.user_message("Failed to load badges")),
            }
            let _ = loading.try_set(false);
        });
    });

    let rows = Memo::new(move |_| statuses.with(|s| badges.with(|b| badge_rows(s, b))));

    let upload = move |row: BadgeRow, input: NodeRef<html::Input>| {
        let Some(file) = picked_file(input) else {
            return;
        };
        let status = row.inspection_status.clone();
        if uploading.with_untracked(|u| u.contains(&status)) {
            return;
        }
        let target = BadgeUpload::for_row(&row);
        let form = match target.form(file) {
            Ok(form) => form,
            Err(e) => {
                notifier.error(e.user_message("Could not prepare the upload"));
                return;
            }
        };
        uploading.update(|u| {
            u.insert(status.clone());
        });
        spawn_local(async move {
            match target.send(form).await {
                Ok(ack) => {
                    notifier.success(ack.message.clone().unwrap_or_else(|| "Badge uploaded".into()));
                    match ack.data::<InspectionBadgeDto>() {
                        Ok(badge) => {
                            let _ = badges.try_update(|list| upsert_badge(list, badge));
                        }
                        Err(e) => {
                            log::debug!("badge response without body ({}), refetching", e);
                            let _ = reload.try_update(|r| *r += 1);
                        }
                    }
                }
                Err(e) => notifier.error(e.user_message("Upload failed")),
            }
            let _ = uploading.try_update(|u| u.remove(&status));
        });
    };

    let render_row = move |row: BadgeRow| {
        let input = NodeRef::<html::Input>::new();
        let status = StoredValue::new(row.inspection_status.clone());
        let busy = move || uploading.with(|u| u.contains(&status.get_value()));
        let has_image = row.image_url().is_some();
        let image = row.image_url().map(|src| src.to_string());
        let row = StoredValue::new(row);
        view! {
            <TableRow>
                <TableCell>
                    <span style="font-weight: 500;">{format_label(&status.get_value())}</span>
                </TableCell>
                <TableCell>
                    {match image {
                        Some(src) => view! {
                            <img class="details__thumb" src=src alt=status.get_value() />
                        }.into_any(),
                        None => view! { <span class="placeholder">"No Badge"</span> }.into_any(),
                    }}
                </TableCell>
                <TableCell>
                    <label class="upload-button">
                        {icon("upload")}
                        {move || {
                            if busy() {
                                " Uploading..."
                            } else if has_image {
                                " Update Badge"
                            } else {
                                " Upload Badge"
                            }
                        }}
                        <input
                            type="file"
                            accept="image/*"
                            hidden=true
                            node_ref=input
                            disabled=busy
                            on:change=move |_| upload(row.get_value(), input)
                        />
                    </label>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a007_inspection_badge--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inspection Badges"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload.update(|r| *r += 1)
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Badge"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || loading.get() && rows.with(|r| r.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="3">
                                        <Spinner size=SpinnerSize::Small />
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || rows.get().into_iter().map(render_row).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_badge_uploads_as_create() {
        let row = BadgeRow { inspection_status: "PASSED".into(), badge: None };
        let target = BadgeUpload::for_row(&row);
        assert_eq!(target, BadgeUpload::Create { inspection_status: "PASSED".into() });
        assert_eq!(target.file_part(), "badge");
    }

    #[test]
    fn existing_badge_uploads_as_update() {
        let row = BadgeRow {
            inspection_status: "FAILED".into(),
            badge: Some(InspectionBadgeDto {
                id: RecordId::new("8"),
                inspection_status: "FAILED".into(),
                badge_url: None,
            }),
        };
        let target = BadgeUpload::for_row(&row);
        assert_eq!(target, BadgeUpload::Update { id: RecordId::new("8") });
        assert_eq!(target.file_part(), "image");
    }
}
