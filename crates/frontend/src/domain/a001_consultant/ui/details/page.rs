//! Consultant review page: header, tab bar and the active tab

use super::tabs::{AddressTab, BusinessTab, DocumentsTab, ReviewTab};
use super::view_model::{ConsultantDetailsVm, ConsultantTab};
use crate::domain::a001_consultant::detail_tab_key;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_label, pick_identifier};
use crate::shared::components::status_badge::VerificationBadge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ConsultantDetail(
    id: String,
    #[prop(into)] on_close: Callback<()>,
    /// Runs after a successful review or suspension
    #[prop(into)]
    on_done: Callback<()>,
) -> impl IntoView {
    let vm = ConsultantDetailsVm::new(id);
    let ctx = use_app_context();
    vm.load();

    Effect::new(move |_| {
        vm.consultant.with(|c| {
            if let Some(c) = c {
                let name = pick_identifier(
                    &[c.consultation_name.as_deref(), c.owner_name.as_deref()],
                    c.id.as_str(),
                );
                ctx.update_tab_title(
                    &detail_tab_key(&vm.id()),
                    &detail_tab_label("Consultant", name),
                );
            }
        });
    });

    let title = move || {
        vm.consultant
            .with(|c| c.as_ref().map(|c| c.display_name()))
            .unwrap_or_else(|| "Consultant".to_string())
    };
    let status = Signal::derive(move || vm.consultant.get().map(|_| vm.review.get().status));

    view! {
        <PageFrame page_id="a001_consultant--detail" category=PAGE_CAT_DETAIL>
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
                    } else if vm.consultant.with(|c| c.is_some()) {
                        view! {
                            <div>
                                <TabBar vm=vm />
                                <div style="padding-top: var(--spacing-lg);">
                                    <TabContent vm=vm on_done=on_done />
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
fn TabBar(vm: ConsultantDetailsVm) -> impl IntoView {
    let active = vm.active_tab();

    view! {
        <Flex gap=FlexGap::Small style="margin-bottom: var(--spacing-md);">
            {ConsultantTab::all()
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

#[component]
fn TabContent(vm: ConsultantDetailsVm, on_done: Callback<()>) -> impl IntoView {
    let active = vm.active_tab();

    view! {
        {move || match active.get() {
            ConsultantTab::Business => view! { <BusinessTab vm=vm /> }.into_any(),
            ConsultantTab::Address => view! { <AddressTab vm=vm /> }.into_any(),
            ConsultantTab::Documents => view! { <DocumentsTab vm=vm /> }.into_any(),
            ConsultantTab::Review => view! { <ReviewTab vm=vm on_done=on_done /> }.into_any(),
        }}
    }
}
