//! Tier assignment for verified consultants

use contracts::domain::a001_consultant::{ConsultantDto, ConsultantListQuery};
use contracts::domain::a003_tier_plan::TierPlanDto;
use contracts::enums::VerificationStatus;
use contracts::shared::RecordId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_consultant::api;
use crate::domain::a003_tier_plan::api as tier_api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::labels::or_dash;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::{reload_on, use_paged_loader, PagedListState, StatusFilter};

const TAB_KEY: &str = "a001_consultant_subscriptions";

/// Title of the tier `id`, `-` when unassigned or unknown
fn tier_title(tiers: &[TierPlanDto], id: Option<&RecordId>) -> String {
    id.and_then(|id| tiers.iter().find(|t| &t.id == id))
        .map(|t| t.title.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// Records a confirmed assignment on the listed row
fn apply_tier(items: &mut [ConsultantDto], id: &RecordId, tier_id: RecordId) -> bool {
    match items.iter_mut().find(|c| &c.id == id) {
        Some(row) => {
            row.tier_plan_id = Some(tier_id);
            true
        }
        None => false,
    }
}

#[component]
pub fn ConsultantSubscriptions() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let state = RwSignal::new(PagedListState::<ConsultantDto, VerificationStatus>::new(
        StatusFilter::Only(VerificationStatus::Verified),
    ));
    let tiers: RwSignal<Vec<TierPlanDto>> = RwSignal::new(Vec::new());
    let assigning: RwSignal<Option<RecordId>> = RwSignal::new(None);

    use_paged_loader(state, notifier, "Failed to load consultants", |req| {
        api::fetch_consultants(ConsultantListQuery {
            page_no: req.page,
            verification_status: req.filter.param(),
            search_text: req.search,
        })
    });
    reload_on(state, move || ctx.refresh_token(TAB_KEY));

    spawn_local(async move {
        match tier_api::fetch_tier_plans().await {
            Ok(list) => {
                let _ = tiers.try_set(list);
            }
            Err(e) => notifier.error(e.user_message("Failed to load tier plans")),
        }
    });

    let assign = move |id: RecordId, tier_code: String| {
        if tier_code.is_empty() {
            notifier.error("Pick a tier plan");
            return;
        }
        if assigning.get_untracked().is_some() {
            return;
        }
        assigning.set(Some(id.clone()));
        let tier_id = RecordId::new(tier_code);
        spawn_local(async move {
            match api::change_tier(id.as_str(), tier_id.clone()).await {
                Ok(ack) => {
                    let _ = state.try_update(|s| apply_tier(&mut s.items, &id, tier_id));
                    notifier.success(ack.message.unwrap_or_else(|| "Tier plan assigned".into()));
                }
                Err(e) => notifier.error(e.user_message("Failed to assign tier plan")),
            }
            let _ = assigning.try_set(None);
        });
    };

    let go_to_page = move |page: u32| {
        state.update(|s| {
            s.go_to_page(page);
        });
    };

    view! {
        <PageFrame page_id="a001_consultant_subscriptions--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Consultant Subscriptions"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.update(|s| s.reload())
                        disabled=Signal::derive(move || state.with(|s| s.loading))
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
                                <TableHeaderCell>"Consultation"</TableHeaderCell>
                                <TableHeaderCell>"Owner"</TableHeaderCell>
                                <TableHeaderCell>"Current tier"</TableHeaderCell>
                                <TableHeaderCell>"Assign tier"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="4">
                                        <Spinner size=SpinnerSize::Small />
                                    </TableCell>
                                </TableRow>
                            </Show>
                            <Show when=move || state.with(|s| !s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="4">"No consultants found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|c: &ConsultantDto| (c.id.clone(), c.tier_plan_id.clone())
                                children=move |row: ConsultantDto| {
                                    let current = row.tier_plan_id.clone();
                                    let current_for_title = current.clone();
                                    let picked = RwSignal::new(
                                        current.map(|t| t.to_string()).unwrap_or_default(),
                                    );
                                    let id = row.id.clone();
                                    let id_for_busy = row.id.clone();
                                    let name = row.display_name();
                                    let owner = or_dash(row.owner_name.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{owner}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || tiers.with(|t| tier_title(t, current_for_title.as_ref()))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Select value=picked>
                                                        <option value="">"Select tier"</option>
                                                        {move || tiers.get()
                                                            .into_iter()
                                                            .map(|t| view! { <option value=t.id.to_string()>{t.title}</option> })
                                                            .collect_view()}
                                                    </Select>
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(move || {
                                                            assigning.with(|a| a.as_ref() == Some(&id_for_busy))
                                                        })
                                                        on_click=move |_| assign(id.clone(), picked.get_untracked())
                                                    >
                                                        "Assign"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || Some(state.with(|s| s.total_elements)))
                    on_page_change=Callback::new(go_to_page)
                    disabled=Signal::derive(move || state.with(|s| Some(s.loading)))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: &str, title: &str) -> TierPlanDto {
        TierPlanDto {
            id: RecordId::new(id),
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn tier_title_looks_up_by_id() {
        let tiers = vec![tier("1", "Silver"), tier("2", "Gold")];
        assert_eq!(tier_title(&tiers, Some(&RecordId::new("2"))), "Gold");
        assert_eq!(tier_title(&tiers, Some(&RecordId::new("9"))), "-");
        assert_eq!(tier_title(&tiers, None), "-");
    }

    #[test]
    fn assignment_updates_only_the_target_row() {
        let mut rows = vec![
            ConsultantDto { id: "c1".into(), ..Default::default() },
            ConsultantDto { id: "c2".into(), ..Default::default() },
        ];
        assert!(apply_tier(&mut rows, &"c2".into(), RecordId::new("3")));
        assert_eq!(rows[0].tier_plan_id, None);
        assert_eq!(rows[1].tier_plan_id, Some(RecordId::new("3")));
        assert!(!apply_tier(&mut rows, &"zz".into(), RecordId::new("3")));
    }
}
