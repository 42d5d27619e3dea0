//! Vehicle moderation page: header, verify panel, tab bar and tab routing

use super::tabs::{OverviewTab, SectionTab};
use super::view_model::{VehicleDetailsVm, VehicleTab};
use crate::domain::a002_vehicle::detail_tab_key;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::status_badge::VerificationBadge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn VehicleDetail(
    id: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let vm = VehicleDetailsVm::new(id);
    let ctx = use_app_context();
    vm.load();

    Effect::new(move |_| {
        if let Some(title) = vm.vehicle.with(|v| v.as_ref().map(|v| v.title())) {
            if !title.is_empty() {
                ctx.update_tab_title(&detail_tab_key(&vm.id()), &detail_tab_label("Vehicle", &title));
            }
        }
    });

    let title = move || {
        vm.vehicle
            .with(|v| v.as_ref().map(|v| v.title()))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Vehicle".to_string())
    };
    let status = Signal::derive(move || vm.vehicle.get().map(|_| vm.review.get().status));

    view! {
        <PageFrame page_id="a002_vehicle--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                    <VerificationBadge status=status />
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }.into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! {
                            <div class="alert alert--error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any()
                    } else if vm.vehicle.with(|v| v.is_some()) {
                        view! {
                            <div>
                                <VerifyPanel vm=vm on_done=on_done />
                                <TabBar vm=vm />
                                <div style="padding-top: var(--spacing-lg);">
                                    {move || match vm.active_tab().get() {
                                        VehicleTab::Overview => view! { <OverviewTab vm=vm /> }.into_any(),
                                        tab => view! { <SectionTab vm=vm tab=tab /> }.into_any(),
                                    }}
                                </div>
                            </div>
                        }.into_any()
                    } else {
                        view! { <div>"No data"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn VerifyPanel(vm: VehicleDetailsVm, on_done: Callback<()>) -> impl IntoView {
    let review = vm.review;

    view! {
        <Card>
            <h4 class="details-section__title">"Verification"</h4>
            <textarea
                class="form__textarea"
                rows="3"
                placeholder="Remarks (required)"
                prop:value=move || vm.remark.get()
                on:input=move |ev| vm.remark.set(event_target_value(&ev))
                disabled=move || !review.get().remark_editable()
            />
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !review.get().primary_actions_enabled())
                    on_click=move |_| vm.verify(on_done)
                >
                    "Verify"
                </Button>
                <Show when=move || review.get().submitting>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </Flex>
        </Card>
    }
}

#[component]
fn TabBar(vm: VehicleDetailsVm) -> impl IntoView {
    let active = vm.active_tab();

    view! {
        <Flex gap=FlexGap::Small style="margin: var(--spacing-md) 0;">
            {VehicleTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active.get() == tab {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| vm.select_tab(tab)
                        >
                            {tab.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}
