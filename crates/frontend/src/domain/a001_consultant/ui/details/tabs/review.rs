//! Review tab: remark, decision buttons, change-status and suspension

use super::super::view_model::ConsultantDetailsVm;
use crate::shared::review::ReviewAction;
use contracts::enums::VerificationStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ReviewTab(vm: ConsultantDetailsVm, on_done: Callback<()>) -> impl IntoView {
    let review = vm.review;
    let previous_remark = move || {
        vm.consultant
            .with(|c| c.as_ref().and_then(|c| c.admin_remark.clone()))
            .filter(|r| !r.trim().is_empty())
    };
    let primary_disabled = Signal::derive(move || !review.get().primary_actions_enabled());
    let change_disabled = Signal::derive(move || !review.get().change_status_enabled());

    view! {
        <Card>
            <h4 class="details-section__title">"Decision"</h4>
            {move || previous_remark().map(|r| view! {
                <div class="details__field">
                    <span class="details__label">"Previous remark"</span>
                    <span class="details__value">{r}</span>
                </div>
            })}
            <textarea
                class="form__textarea"
                rows="4"
                placeholder="Admin remark (required)"
                prop:value=move || vm.remark.get()
                on:input=move |ev| vm.remark.set(event_target_value(&ev))
                disabled=move || !review.get().remark_editable()
            />
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=primary_disabled
                    on_click=move |_| vm.submit(ReviewAction::Approve, on_done)
                >
                    "Approve"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=primary_disabled
                    on_click=move |_| vm.submit(ReviewAction::RequestChanges, on_done)
                >
                    "Request Changes"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=primary_disabled
                    on_click=move |_| vm.submit(ReviewAction::Reject, on_done)
                >
                    "Reject"
                </Button>
                <Show when=move || review.get().submitting>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </Flex>
        </Card>

        <Show when=move || review.get().is_locked()>
            <Card>
                <h4 class="details-section__title">"Change status"</h4>
                <Select value=vm.change_target>
                    {VerificationStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </Select>
                <textarea
                    class="form__textarea"
                    rows="3"
                    placeholder="Reason for the change (required)"
                    prop:value=move || vm.change_remark.get()
                    on:input=move |ev| vm.change_remark.set(event_target_value(&ev))
                    disabled=move || !review.get().change_status_enabled()
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=change_disabled
                    on_click=move |_| vm.change_status(on_done)
                >
                    "Change Status"
                </Button>
            </Card>
        </Show>

        <Card>
            <h4 class="details-section__title">"Suspend consultant"</h4>
            <Input value=vm.suspend_reason placeholder="Reason" />
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || vm.suspending.get())
                on_click=move |_| vm.suspend(on_done)
            >
                "Suspend"
            </Button>
        </Card>
    }
}
