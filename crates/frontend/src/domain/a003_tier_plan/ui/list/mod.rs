use contracts::domain::a003_tier_plan::TierPlanDto;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_tier_plan::{api, detail_tab_key, TIER_CREATE_KEY, TIER_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// "999 / 30 days"
fn price_label(price: Option<f64>, days: Option<u32>) -> String {
    match (price, days) {
        (Some(p), Some(d)) => format!("{} / {} days", p, d),
        (Some(p), None) => p.to_string(),
        _ => "-".to_string(),
    }
}

#[component]
pub fn TierPlanList() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let items: RwSignal<Vec<TierPlanDto>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u64);

    Effect::new(move |_| {
        reload.track();
        ctx.refresh_token(TIER_LIST_KEY);
        loading.set(true);
        spawn_local(async move {
            match api::fetch_tier_plans().await {
                Ok(list) => {
                    let _ = items.try_set(list);
                }
                Err(e) => {
                    let _ = items.try_set(Vec::new());
                    notifier.error(e.user_message("Failed to load tier plans"));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let open_detail = move |tier: &TierPlanDto| {
        ctx.open_tab(
            &detail_tab_key(tier.id.as_str()),
            &detail_tab_label("Tier Plan", &tier.title),
        );
    };

    view! {
        <PageFrame page_id="a003_tier_plan--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tier Plans"</h1>
                    <Badge>{move || items.with(|i| i.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_tab(TIER_CREATE_KEY, tab_label_for_key(TIER_CREATE_KEY))
                    >
                        {icon("plus")}
                        " New Tier"
                    </Button>
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
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Monthly"</TableHeaderCell>
                                <TableHeaderCell>"Yearly"</TableHeaderCell>
                                <TableHeaderCell>"Limits"</TableHeaderCell>
                                <TableHeaderCell>"Features"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || loading.get() && items.with(|i| i.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <Spinner size=SpinnerSize::Small />
                                    </TableCell>
                                </TableRow>
                            </Show>
                            <Show when=move || !loading.get() && items.with(|i| i.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="7">"No tier plans yet"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || items.get()
                                key=|t: &TierPlanDto| t.id.clone()
                                children=move |tier: TierPlanDto| {
                                    let tier_for_open = tier.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {tier.tier_badge_url.clone().map(|src| view! {
                                                        <img class="table-thumb" src=src alt="" />
                                                    })}
                                                    <span style="font-weight: 500;">{tier.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {price_label(tier.monthly_price, tier.monthly_duration_in_days)}
                                            </TableCell>
                                            <TableCell>
                                                {price_label(tier.yearly_price, tier.yearly_duration_in_days)}
                                            </TableCell>
                                            <TableCell>{tier.tier_plan_limits.len()}</TableCell>
                                            <TableCell>{tier.features.len()}</TableCell>
                                            <TableCell>
                                                <RecordStatusBadge status=tier.status />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_detail(&tier_for_open)
                                                >
                                                    {icon("eye")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
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
    fn price_label_includes_duration() {
        assert_eq!(price_label(Some(999.0), Some(30)), "999 / 30 days");
        assert_eq!(price_label(Some(499.5), None), "499.5");
        assert_eq!(price_label(None, Some(365)), "-");
    }
}
