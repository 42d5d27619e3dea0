use contracts::domain::a006_vehicle_image_key::{VehicleImageKeyDto, VehicleImageKeyPayload};
use contracts::enums::RecordStatus;
use contracts::shared::RecordId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a006_vehicle_image_key::api;
use crate::shared::icons::icon;
use crate::shared::labels::format_label;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifications::{use_notifications, Notify};

/// Modal contents; `id` is set when an existing key is edited
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDraft {
    pub id: Option<RecordId>,
    pub vehicle_type: String,
    pub image_key: String,
    pub required: bool,
    pub display_order: String,
    pub status: RecordStatus,
}

impl KeyDraft {
    pub fn new_for(vehicle_type: &str) -> Self {
        Self::from_payload(None, VehicleImageKeyPayload::new_for(vehicle_type))
    }

    pub fn edit(key: &VehicleImageKeyDto) -> Self {
        Self::from_payload(Some(key.id.clone()), VehicleImageKeyPayload::from_key(key))
    }

    fn from_payload(id: Option<RecordId>, payload: VehicleImageKeyPayload) -> Self {
        Self {
            id,
            vehicle_type: payload.vehicle_type,
            image_key: payload.image_key,
            required: payload.required,
            display_order: payload.display_order.to_string(),
            status: payload.status,
        }
    }

    pub fn payload(&self) -> Result<VehicleImageKeyPayload, String> {
        let display_order = self
            .display_order
            .trim()
            .parse::<u32>()
            .map_err(|_| "Display order must be a whole number".to_string())?;
        VehicleImageKeyPayload {
            vehicle_type: self.vehicle_type.clone(),
            image_key: self.image_key.clone(),
            required: self.required,
            display_order,
            status: self.status,
        }
        .normalized()
    }
}

#[component]
pub fn ImageKeyEditor(
    draft: KeyDraft,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifications();
    let editing = draft.id.is_some();
    let heading = format!(
        "{} Image Key · {}",
        if editing { "Edit" } else { "Add" },
        format_label(&draft.vehicle_type)
    );

    let image_key = RwSignal::new(draft.image_key.clone());
    let required = RwSignal::new(draft.required);
    let display_order = RwSignal::new(draft.display_order.clone());
    let status_code = RwSignal::new(draft.status.code().to_string());
    let saving = RwSignal::new(false);
    let base = StoredValue::new(draft);

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let mut current = base.get_value();
        current.image_key = image_key.get_untracked();
        current.required = required.get_untracked();
        current.display_order = display_order.get_untracked();
        current.status = RecordStatus::from_code(&status_code.get_untracked()).unwrap_or_default();

        let payload = match current.payload() {
            Ok(payload) => payload,
            Err(message) => {
                notifier.error(message);
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_image_key(id.as_str(), &payload).await,
                None => api::create_image_key(&payload).await,
            };
            match result {
                Ok(ack) => {
                    notifier.success(ack.message.unwrap_or_else(|| "Image key saved".into()));
                    on_saved.run(());
                }
                Err(e) => {
                    notifier.error(e.user_message("Failed to save image key"));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=on_close>
            <div class="details__header">
                <h3>{heading}</h3>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>
            <div class="form__grid">
                <label class="form__label">"Image Key *"</label>
                <Input value=image_key placeholder="FRONT_VIEW" />
                <label class="form__label">"Display Order"</label>
                <Input value=display_order input_type=InputType::Number />
                <label class="form__label">"Required"</label>
                <input
                    type="checkbox"
                    prop:checked=move || required.get()
                    on:change=move |ev| required.set(event_target_checked(&ev))
                />
                <label class="form__label">"Status"</label>
                <Select value=status_code>
                    {RecordStatus::editable()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <Flex gap=FlexGap::Small style="justify-content: flex-end; margin-top: var(--spacing-md);">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || saving.get())
                >
                    {icon("save")}
                    " Save"
                </Button>
            </Flex>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_starts_required_and_first() {
        let draft = KeyDraft::new_for("CAR");
        assert!(draft.id.is_none());
        assert!(draft.required);
        assert_eq!(draft.display_order, "1");
        assert_eq!(draft.status, RecordStatus::Active);
    }

    #[test]
    fn payload_parses_order_and_trims_key() {
        let mut draft = KeyDraft::new_for("BIKE");
        draft.image_key = " REAR_VIEW ".into();
        draft.display_order = " 3 ".into();
        let payload = draft.payload().unwrap();
        assert_eq!(payload.image_key, "REAR_VIEW");
        assert_eq!(payload.display_order, 3);
        assert_eq!(payload.vehicle_type, "BIKE");
    }

    #[test]
    fn payload_rejects_bad_order() {
        let mut draft = KeyDraft::new_for("CAR");
        draft.image_key = "FRONT".into();
        draft.display_order = "first".into();
        assert!(draft.payload().is_err());
        draft.display_order = "0".into();
        assert!(draft.payload().is_err());
    }

    #[test]
    fn edit_keeps_id_and_status() {
        let key = VehicleImageKeyDto {
            id: RecordId::new("12"),
            vehicle_type: "CAR".into(),
            image_key: "DASHBOARD".into(),
            required: false,
            display_order: 4,
            status: Some(RecordStatus::Inactive),
        };
        let draft = KeyDraft::edit(&key);
        assert_eq!(draft.id, Some(RecordId::new("12")));
        assert_eq!(draft.status, RecordStatus::Inactive);
        assert_eq!(draft.display_order, "4");
        assert!(!draft.required);
    }
}
