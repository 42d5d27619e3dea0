//! New tier plan form
//!
//! Limit and feature rows are added and removed freely; rows left
//! incomplete are dropped on submit.

mod model;

use contracts::domain::a003_tier_plan::{FeatureDraft, LimitDraft};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_tier_plan::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::labels::format_label;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use model::TierPlanForm;

type Rows<T> = RwSignal<Vec<(u32, RwSignal<T>)>>;

fn push_row<T: Default + Send + Sync + 'static>(rows: Rows<T>, next_key: StoredValue<u32>) {
    let key = next_key.get_value();
    next_key.set_value(key + 1);
    rows.update(|r| r.push((key, RwSignal::new(T::default()))));
}

fn remove_row<T: Send + Sync + 'static>(rows: Rows<T>, key: u32) {
    rows.update(|r| r.retain(|(k, _)| *k != key));
}

fn collect_rows<T: Clone + Send + Sync + 'static>(rows: Rows<T>) -> Vec<T> {
    rows.with_untracked(|r| r.iter().map(|(_, row)| row.get_untracked()).collect())
}

#[component]
pub fn TierPlanCreate(on_close: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let notifier = use_notifications();
    let defaults = TierPlanForm::default();

    let title = RwSignal::new(defaults.title);
    let description = RwSignal::new(defaults.description);
    let monthly_price = RwSignal::new(defaults.monthly_price);
    let yearly_price = RwSignal::new(defaults.yearly_price);
    let monthly_days = RwSignal::new(defaults.monthly_days);
    let yearly_days = RwSignal::new(defaults.yearly_days);
    let status_code = RwSignal::new(defaults.status.code().to_string());
    let badge_url = RwSignal::new(defaults.badge_url);

    let next_key = StoredValue::new(0u32);
    let limits: Rows<LimitDraft> = RwSignal::new(Vec::new());
    let features: Rows<FeatureDraft> = RwSignal::new(Vec::new());
    push_row(limits, next_key);
    push_row(features, next_key);

    let limit_names: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_limit_names().await {
            Ok(names) => {
                let _ = limit_names.try_set(names);
            }
            Err(e) => log::warn!("limit names unavailable: {}", e),
        }
    });

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let form = TierPlanForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            monthly_price: monthly_price.get_untracked(),
            yearly_price: yearly_price.get_untracked(),
            monthly_days: monthly_days.get_untracked(),
            yearly_days: yearly_days.get_untracked(),
            status: RecordStatus::from_code(&status_code.get_untracked()).unwrap_or_default(),
            badge_url: badge_url.get_untracked(),
            limits: collect_rows(limits),
            features: collect_rows(features),
        };
        let body = match form.build() {
            Ok(body) => body,
            Err(message) => {
                notifier.error(message);
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            match api::create_tier_plan(body).await {
                Ok(ack) => {
                    notifier.success(ack.message.unwrap_or_else(|| "Tier plan created".into()));
                    on_done.run(());
                }
                Err(e) => notifier.error(e.user_message("Failed to create tier plan")),
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <PageFrame page_id="a003_tier_plan--form" category=PAGE_CAT_FORM>
            <PageHeader title="New Tier Plan">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {icon("save")}
                    " Create"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Card>
                    <h4 class="details-section__title">"Plan"</h4>
                    <div class="form__grid">
                        <label class="form__label">"Title *"</label>
                        <Input value=title placeholder="Gold" />
                        <label class="form__label">"Description"</label>
                        <textarea
                            class="form__textarea"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                        <label class="form__label">"Monthly price *"</label>
                        <Input value=monthly_price placeholder="0.00" />
                        <label class="form__label">"Monthly duration (days)"</label>
                        <Input value=monthly_days />
                        <label class="form__label">"Yearly price *"</label>
                        <Input value=yearly_price placeholder="0.00" />
                        <label class="form__label">"Yearly duration (days)"</label>
                        <Input value=yearly_days />
                        <label class="form__label">"Status"</label>
                        <Select value=status_code>
                            {RecordStatus::editable()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                        <label class="form__label">"Badge URL"</label>
                        <Input value=badge_url placeholder="https://" />
                    </div>
                </Card>

                <Card>
                    <div class="details-section__header">
                        <h4 class="details-section__title">"Limits"</h4>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| push_row(limits, next_key)
                        >
                            {icon("plus")}
                            " Add limit"
                        </Button>
                    </div>
                    <For
                        each=move || limits.get()
                        key=|(k, _)| *k
                        children=move |(key, row)| {
                            let name = RwSignal::new(row.get_untracked().limits_name);
                            let value = RwSignal::new(row.get_untracked().limits_value);
                            Effect::new(move |_| {
                                let limits_name = name.get();
                                row.update(|r| r.limits_name = limits_name);
                            });
                            Effect::new(move |_| {
                                let limits_value = value.get();
                                row.update(|r| r.limits_value = limits_value);
                            });
                            view! {
                                <Flex gap=FlexGap::Small style="margin-bottom: 8px;">
                                    <Select value=name>
                                        <option value="">"Limit"</option>
                                        {move || limit_names.get()
                                            .into_iter()
                                            .map(|n| {
                                                let label = format_label(&n);
                                                view! { <option value=n>{label}</option> }
                                            })
                                            .collect_view()}
                                    </Select>
                                    <Input value=value placeholder="Value" />
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| remove_row(limits, key)
                                    >
                                        {icon("trash")}
                                    </Button>
                                </Flex>
                            }
                        }
                    />
                </Card>

                <Card>
                    <div class="details-section__header">
                        <h4 class="details-section__title">"Features"</h4>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| push_row(features, next_key)
                        >
                            {icon("plus")}
                            " Add feature"
                        </Button>
                    </div>
                    <For
                        each=move || features.get()
                        key=|(k, _)| *k
                        children=move |(key, row)| {
                            let name = RwSignal::new(row.get_untracked().feature_name);
                            let text = RwSignal::new(row.get_untracked().feature_description);
                            Effect::new(move |_| {
                                let feature_name = name.get();
                                row.update(|r| r.feature_name = feature_name);
                            });
                            Effect::new(move |_| {
                                let feature_description = text.get();
                                row.update(|r| r.feature_description = feature_description);
                            });
                            view! {
                                <Flex gap=FlexGap::Small style="margin-bottom: 8px;">
                                    <Input value=name placeholder="Feature" />
                                    <Input value=text placeholder="Description" />
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| remove_row(features, key)
                                    >
                                        {icon("trash")}
                                    </Button>
                                </Flex>
                            }
                        }
                    />
                </Card>
            </div>
        </PageFrame>
    }
}
