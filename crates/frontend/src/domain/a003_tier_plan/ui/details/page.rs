use super::view_model::TierPlanDetailsVm;
use crate::domain::a003_tier_plan::detail_tab_key;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::components::DetailField;
use crate::shared::icons::icon;
use crate::shared::labels::{format_label, num_or_dash, or_dash};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_tier_plan::{TierFeatureDto, TierLimitDto};
use contracts::shared::RecordId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TierPlanDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = TierPlanDetailsVm::new(id);
    let ctx = use_app_context();
    vm.load();

    Effect::new(move |_| {
        if let Some(title) = vm.tier.with(|t| t.as_ref().map(|t| t.title.clone())) {
            if !title.trim().is_empty() {
                ctx.update_tab_title(&detail_tab_key(&vm.id()), &detail_tab_label("Tier Plan", &title));
            }
        }
    });

    let title = move || {
        vm.tier
            .with(|t| t.as_ref().map(|t| t.title.clone()))
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Tier Plan".to_string())
    };
    let status = Signal::derive(move || vm.tier.with(|t| t.as_ref().and_then(|t| t.status)));

    view! {
        <PageFrame page_id="a003_tier_plan--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                    <RecordStatusBadge status=status />
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load()
                        disabled=Signal::derive(move || vm.loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if vm.loading.get() && vm.tier.with(|t| t.is_none()) {
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
                    } else {
                        view! {
                            <div>
                                <PlanSummary vm=vm />
                                <LimitsEditor vm=vm />
                                <FeaturesEditor vm=vm />
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn PlanSummary(vm: TierPlanDetailsVm) -> impl IntoView {
    move || {
        vm.tier.get().map(|tier| {
            view! {
                <Card>
                    <div class="details-grid">
                        <DetailField label="Description" value=or_dash(tier.description.as_deref()) />
                        <DetailField label="Monthly price" value=num_or_dash(tier.monthly_price) />
                        <DetailField label="Monthly duration (days)" value=num_or_dash(tier.monthly_duration_in_days) />
                        <DetailField label="Yearly price" value=num_or_dash(tier.yearly_price) />
                        <DetailField label="Yearly duration (days)" value=num_or_dash(tier.yearly_duration_in_days) />
                    </div>
                    {tier.tier_badge_url.map(|src| view! {
                        <img class="details__image" src=src alt="Tier badge" />
                    })}
                </Card>
            }
        })
    }
}

#[component]
fn LimitsEditor(vm: TierPlanDetailsVm) -> impl IntoView {
    let limits = vm.limits;
    let field = move |id: &RecordId, f: fn(&TierLimitDto) -> String| {
        limits.with(|e| e.row(id).map(|r| f(&r.value)).unwrap_or_default())
    };

    view! {
        <Card>
            <h4 class="details-section__title">"Limits"</h4>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Limit"</TableHeaderCell>
                        <TableHeaderCell>"Value"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show when=move || limits.with(|e| e.rows().is_empty())>
                        <TableRow>
                            <TableCell attr:colspan="3">"No limits"</TableCell>
                        </TableRow>
                    </Show>
                    <For
                        each=move || limits.with(|e| e.ids())
                        key=|id| id.clone()
                        children=move |id: RecordId| {
                            let id_name = id.clone();
                            let id_name_edit = id.clone();
                            let id_options = id.clone();
                            let id_value = id.clone();
                            let id_value_edit = id.clone();
                            let id_busy = id.clone();
                            let id_save = id.clone();
                            let id_delete = id.clone();
                            let busy = Signal::derive(move || {
                                limits.with(|e| e.row(&id_busy).map(|r| r.busy.is_some()).unwrap_or(true))
                            });
                            let clean = Signal::derive(move || {
                                limits.with(|e| e.row(&id).map(|r| !r.dirty).unwrap_or(true))
                            });
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <select
                                            class="form__select"
                                            prop:value=move || field(&id_name, |l| l.limits_name.clone())
                                            on:change=move |ev| {
                                                let name = event_target_value(&ev);
                                                limits.update(|e| {
                                                    e.edit(&id_name_edit, |l| l.limits_name = name);
                                                });
                                            }
                                        >
                                            {move || {
                                                let current = field(&id_options, |l| l.limits_name.clone());
                                                let mut names = vm.limit_names.get();
                                                if !current.is_empty() && !names.contains(&current) {
                                                    names.insert(0, current);
                                                }
                                                names
                                                    .into_iter()
                                                    .map(|n| {
                                                        let label = format_label(&n);
                                                        view! { <option value=n>{label}</option> }
                                                    })
                                                    .collect_view()
                                            }}
                                        </select>
                                    </TableCell>
                                    <TableCell>
                                        <input
                                            class="form__input"
                                            prop:value=move || field(&id_value, |l| l.limits_value.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                limits.update(|e| {
                                                    e.edit(&id_value_edit, |l| l.limits_value = value);
                                                });
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                size=ButtonSize::Small
                                                disabled=Signal::derive(move || busy.get() || clean.get())
                                                on_click=move |_| vm.save_limit(id_save.clone())
                                            >
                                                {icon("save")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                disabled=busy
                                                on_click=move |_| vm.delete_limit(id_delete.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Flex gap=FlexGap::Small style="margin-top: 12px;">
                <Select value=vm.new_limit_name>
                    <option value="">"New limit"</option>
                    {move || vm.limit_names.get()
                        .into_iter()
                        .map(|n| {
                            let label = format_label(&n);
                            view! { <option value=n>{label}</option> }
                        })
                        .collect_view()}
                </Select>
                <Input value=vm.new_limit_value placeholder="Value" />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.adding.get())
                    on_click=move |_| vm.add_limit()
                >
                    {icon("plus")}
                    " Add limit"
                </Button>
            </Flex>
        </Card>
    }
}

#[component]
fn FeaturesEditor(vm: TierPlanDetailsVm) -> impl IntoView {
    let features = vm.features;
    let field = move |id: &RecordId, f: fn(&TierFeatureDto) -> String| {
        features.with(|e| e.row(id).map(|r| f(&r.value)).unwrap_or_default())
    };

    view! {
        <Card>
            <h4 class="details-section__title">"Features"</h4>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Feature"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show when=move || features.with(|e| e.rows().is_empty())>
                        <TableRow>
                            <TableCell attr:colspan="3">"No features"</TableCell>
                        </TableRow>
                    </Show>
                    <For
                        each=move || features.with(|e| e.ids())
                        key=|id| id.clone()
                        children=move |id: RecordId| {
                            let id_name = id.clone();
                            let id_name_edit = id.clone();
                            let id_text = id.clone();
                            let id_text_edit = id.clone();
                            let id_busy = id.clone();
                            let id_save = id.clone();
                            let id_delete = id.clone();
                            let busy = Signal::derive(move || {
                                features.with(|e| e.row(&id_busy).map(|r| r.busy.is_some()).unwrap_or(true))
                            });
                            let clean = Signal::derive(move || {
                                features.with(|e| e.row(&id).map(|r| !r.dirty).unwrap_or(true))
                            });
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <input
                                            class="form__input"
                                            prop:value=move || field(&id_name, |f| f.feature_name.clone())
                                            on:input=move |ev| {
                                                let name = event_target_value(&ev);
                                                features.update(|e| {
                                                    e.edit(&id_name_edit, |f| f.feature_name = name);
                                                });
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>
                                        <input
                                            class="form__input"
                                            prop:value=move || field(&id_text, |f| f.feature_description.clone())
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                features.update(|e| {
                                                    e.edit(&id_text_edit, |f| f.feature_description = text);
                                                });
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                size=ButtonSize::Small
                                                disabled=Signal::derive(move || busy.get() || clean.get())
                                                on_click=move |_| vm.save_feature(id_save.clone())
                                            >
                                                {icon("save")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                disabled=busy
                                                on_click=move |_| vm.delete_feature(id_delete.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Flex gap=FlexGap::Small style="margin-top: 12px;">
                <Input value=vm.new_feature_name placeholder="Feature" />
                <Input value=vm.new_feature_description placeholder="Description" />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.adding.get())
                    on_click=move |_| vm.add_feature()
                >
                    {icon("plus")}
                    " Add feature"
                </Button>
            </Flex>
        </Card>
    }
}
