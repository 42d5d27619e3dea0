use contracts::domain::a005_store_template::StoreTemplateFields;
use contracts::enums::{RecordStatus, StoreTemplateImageType};
use contracts::shared::RecordId;
use leptos::html;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_tier_plan::ui::picker::TierPicker;
use crate::domain::a005_store_template::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::labels::format_label;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::upload::{multipart, picked_file};

#[component]
pub fn StoreTemplateForm(
    id: Option<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifications();
    let editing = id.is_some();
    let id = StoredValue::new(id);

    let image_type = RwSignal::new(StoreTemplateImageType::default().code().to_string());
    let status_code = RwSignal::new(RecordStatus::Active.code().to_string());
    let is_default = RwSignal::new(false);
    let tiers: RwSignal<Vec<RecordId>> = RwSignal::new(Vec::new());
    let current_image: RwSignal<Option<String>> = RwSignal::new(None);

    let image_ref = NodeRef::<html::Input>::new();
    let loading = RwSignal::new(editing);
    let saving = RwSignal::new(false);

    if let Some(existing) = id.get_value() {
        spawn_local(async move {
            match api::fetch_template(&existing).await {
                Ok(template) => {
                    let fields = StoreTemplateFields::from_template(&template);
                    let _ = image_type.try_set(fields.image_type.code().to_string());
                    let _ = status_code.try_set(fields.status.code().to_string());
                    let _ = is_default.try_set(fields.is_default);
                    let _ = tiers.try_set(fields.allowed_tier_ids);
                    let _ = current_image.try_set(template.image_url);
                }
                Err(e) => notifier.error(e.user_message("Failed to load template")),
            }
            let _ = loading.try_set(false);
        });
    }

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let fields = StoreTemplateFields {
            image_type: StoreTemplateImageType::from_code(&image_type.get_untracked()).unwrap_or_default(),
            status: RecordStatus::from_code(&status_code.get_untracked()).unwrap_or_default(),
            is_default: is_default.get_untracked(),
            allowed_tier_ids: tiers.get_untracked(),
        };
        if let Err(message) = fields.validate() {
            notifier.error(message);
            return;
        }
        let form = match multipart(&fields.form_parts(), &[("image", picked_file(image_ref))]) {
            Ok(form) => form,
            Err(e) => {
                notifier.error(e.user_message("Could not prepare the upload"));
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            let result = match id.get_value() {
                Some(existing) => api::update_template(&existing, form).await,
                None => api::create_template(form).await,
            };
            match result {
                Ok(ack) => {
                    let fallback = if editing { "Template updated" } else { "Template created" };
                    notifier.success(ack.message.unwrap_or_else(|| fallback.into()));
                    on_done.run(());
                }
                Err(e) => notifier.error(e.user_message("Failed to save template")),
            }
            let _ = saving.try_set(false);
        });
    };

    let title = if editing { "Edit Store Template" } else { "New Store Template" };

    view! {
        <PageFrame page_id="a005_store_template--form" category=PAGE_CAT_FORM>
            <PageHeader title=title>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    {icon("save")}
                    {if editing { " Save" } else { " Create Template" }}
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
                        <label class="form__label">"Image Type"</label>
                        <Select value=image_type>
                            {StoreTemplateImageType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{format_label(t.code())}</option> })
                                .collect_view()}
                        </Select>
                        <label class="form__label">"Status"</label>
                        <Select value=status_code>
                            {RecordStatus::editable()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                        <label class="form__label">"Default Template"</label>
                        <input
                            type="checkbox"
                            prop:checked=move || is_default.get()
                            on:change=move |ev| is_default.set(event_target_checked(&ev))
                        />
                        <label class="form__label">"Image"</label>
                        <div>
                            {move || current_image.get().map(|src| view! {
                                <img class="details__thumb" src=src alt="Current image" />
                            })}
                            <input type="file" accept="image/*" node_ref=image_ref />
                        </div>
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
