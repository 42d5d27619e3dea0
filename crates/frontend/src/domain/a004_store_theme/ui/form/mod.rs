//! Create / edit form for a store theme. Sent as multipart with optional
//! thumbnail and preview files.

use contracts::domain::a004_store_theme::{StoreThemeFields, DEFAULT_THEME_SCHEMA};
use contracts::enums::RecordStatus;
use contracts::shared::RecordId;
use leptos::html;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_tier_plan::ui::picker::TierPicker;
use crate::domain::a004_store_theme::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::upload::{multipart, picked_file};

#[component]
pub fn StoreThemeForm(
    id: Option<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifications();
    let editing = id.is_some();
    let id = StoredValue::new(id);

    let theme_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let schema = RwSignal::new(String::new());
    let status_code = RwSignal::new(RecordStatus::Active.code().to_string());
    let tiers: RwSignal<Vec<RecordId>> = RwSignal::new(Vec::new());
    let current_thumbnail: RwSignal<Option<String>> = RwSignal::new(None);
    let current_preview: RwSignal<Option<String>> = RwSignal::new(None);

    let thumbnail_ref = NodeRef::<html::Input>::new();
    let preview_ref = NodeRef::<html::Input>::new();
    let loading = RwSignal::new(editing);
    let saving = RwSignal::new(false);

    if let Some(existing) = id.get_value() {
        spawn_local(async move {
            match api::fetch_theme(&existing).await {
                Ok(theme) => {
                    let fields = StoreThemeFields::from_theme(&theme);
                    let _ = theme_id.try_set(fields.theme_id);
                    let _ = name.try_set(fields.name);
                    let _ = schema.try_set(fields.schema);
                    let _ = status_code.try_set(fields.status.code().to_string());
                    let _ = tiers.try_set(fields.allowed_tier_ids);
                    let _ = current_thumbnail.try_set(theme.thumbnail_url);
                    let _ = current_preview.try_set(theme.preview_url);
                }
                Err(e) => notifier.error(e.user_message("Failed to load theme")),
            }
            let _ = loading.try_set(false);
        });
    }

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let fields = StoreThemeFields {
            theme_id: theme_id.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            schema: schema.get_untracked(),
            status: RecordStatus::from_code(&status_code.get_untracked()).unwrap_or_default(),
            allowed_tier_ids: tiers.get_untracked(),
        };
        if let Err(message) = fields.validate() {
            notifier.error(message);
            return;
        }
        let form = match multipart(
            &fields.form_parts(),
            &[
                ("thumbnail", picked_file(thumbnail_ref)),
                ("preview", picked_file(preview_ref)),
            ],
        ) {
            Ok(form) => form,
            Err(e) => {
                notifier.error(e.user_message("Could not prepare the upload"));
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            let result = match id.get_value() {
                Some(existing) => api::update_theme(&existing, form).await,
                None => api::create_theme(form).await,
            };
            match result {
                Ok(ack) => {
                    let fallback = if editing { "Theme updated" } else { "Theme created" };
                    notifier.success(ack.message.unwrap_or_else(|| fallback.into()));
                    on_done.run(());
                }
                Err(e) => notifier.error(e.user_message("Failed to save theme")),
            }
            let _ = saving.try_set(false);
        });
    };

    let title = if editing { "Edit Store Theme" } else { "New Store Theme" };

    view! {
        <PageFrame page_id="a004_store_theme--form" category=PAGE_CAT_FORM>
            <PageHeader title=title>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    {icon("save")}
                    {if editing { " Save" } else { " Create Theme" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
                <Card>
                    <div class="form__grid">
                        <label class="form__label">"Theme ID"</label>
                        <Input value=theme_id placeholder="THEME_MODERN_002" />
                        <label class="form__label">"Theme Name *"</label>
                        <Input value=name placeholder="Modern Theme" />
                        <label class="form__label">"Status"</label>
                        <Select value=status_code>
                            {RecordStatus::editable()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                        <label class="form__label">"Thumbnail Image"</label>
                        <div>
                            {move || current_thumbnail.get().map(|src| view! {
                                <img class="details__thumb" src=src alt="Current thumbnail" />
                            })}
                            <input type="file" accept="image/*" node_ref=thumbnail_ref />
                        </div>
                        <label class="form__label">"Preview Image"</label>
                        <div>
                            {move || current_preview.get().map(|src| view! {
                                <img class="details__thumb" src=src alt="Current preview" />
                            })}
                            <input type="file" accept="image/*" node_ref=preview_ref />
                        </div>
                        <label class="form__label">"Schema"</label>
                        <textarea
                            class="form__textarea"
                            rows="4"
                            placeholder=format!("Enter schema or leave blank (default \"{}\")", DEFAULT_THEME_SCHEMA)
                            prop:value=move || schema.get()
                            on:input=move |ev| schema.set(event_target_value(&ev))
                        />
                    </div>
                </Card>
                <Card>
                    <h4 class="details-section__title">"Allowed Tiers *"</h4>
                    <TierPicker selected=tiers />
                </Card>
            </div>
        </PageFrame>
    }
}
