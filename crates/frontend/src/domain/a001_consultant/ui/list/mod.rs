mod state;

pub use state::ConsultantView;

use contracts::domain::a001_consultant::ConsultantDto;
use contracts::enums::VerificationStatus;
use contracts::shared::RecordId;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_consultant::{api, detail_tab_key};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_label, pick_identifier};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::VerificationBadge;
use crate::shared::date_utils::format_joined_opt;
use crate::shared::icons::icon;
use crate::shared::labels::or_dash;
use crate::shared::list_utils::SearchInput;
use crate::shared::notifications::use_notifications;
use crate::shared::optimistic::spawn_toggle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::{reload_on, use_paged_loader};
use state::{apply_status_choice, create_state, create_toggles, list_query};

#[component]
pub fn ConsultantList(view: ConsultantView) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let state = create_state(view);
    let toggles = create_toggles();

    use_paged_loader(state, notifier, "Failed to load consultants", |req| {
        api::fetch_consultants(list_query(req))
    });
    reload_on(state, move || ctx.refresh_token(view.tab_key()));

    let status_code = RwSignal::new(view.initial_status_code());
    if view.has_status_picker() {
        Effect::new(move |_| {
            let code = status_code.get();
            state.maybe_update(|s| apply_status_choice(view, &code, s));
        });
    }

    let on_search = Callback::new(move |text: String| {
        if state.with_untracked(|s| s.search_text != text) {
            state.update(|s| {
                s.set_search(&text);
            });
        }
    });

    let toggle_active = move |id: RecordId| {
        spawn_toggle(
            state,
            toggles,
            id,
            notifier,
            "Failed to update consultant status",
            |pending| async move { api::change_status(pending.id.as_str(), pending.next).await },
        );
    };

    let open_detail = move |row: &ConsultantDto| {
        let name = pick_identifier(
            &[row.consultation_name.as_deref(), row.owner_name.as_deref()],
            row.id.as_str(),
        );
        ctx.open_tab(
            &detail_tab_key(row.id.as_str()),
            &detail_tab_label("Consultant", name),
        );
    };

    let go_to_page = move |page: u32| {
        state.update(|s| {
            s.go_to_page(page);
        });
    };

    view! {
        <PageFrame page_id=view.page_id() category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{view.title()}</h1>
                    <Badge>{move || state.with(|s| s.total_elements.to_string())}</Badge>
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

            <div class="filter-panel">
                <Flex gap=FlexGap::Small>
                    <Show when=move || view.has_status_picker()>
                        <Select value=status_code>
                            <option value="">"All statuses"</option>
                            {VerificationStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </Show>
                    <SearchInput on_change=on_search placeholder="Search by name, owner or city" />
                </Flex>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Consultation"</TableHeaderCell>
                                <TableHeaderCell>"Owner"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"City"</TableHeaderCell>
                                <TableHeaderCell>"Joined"</TableHeaderCell>
                                <TableHeaderCell>"Verification"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="8">
                                        <Spinner size=SpinnerSize::Small />
                                    </TableCell>
                                </TableRow>
                            </Show>
                            <Show when=move || state.with(|s| !s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="8">"No consultants found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|c: &ConsultantDto| (c.id.clone(), c.status, c.verification_status)
                                children=move |row: ConsultantDto| {
                                    let id_for_toggle = row.id.clone();
                                    let id_for_pending = row.id.clone();
                                    let resubmitted = row.is_resubmitted();
                                    let active = row.is_active();
                                    let status = row.verification_status;
                                    let joined = format_joined_opt(row.joined_at());
                                    let name = row.display_name();
                                    let owner = or_dash(row.owner_name.as_deref());
                                    let email = or_dash(row.company_email.as_deref());
                                    let city = or_dash(row.city.as_deref());
                                    let row_for_open = StoredValue::new(row);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                    <Show when=move || resubmitted>
                                                        <span class="dot dot--error" title="Re-submitted after changes were requested"></span>
                                                    </Show>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {owner}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{city}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{joined}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <VerificationBadge status=status />
                                            </TableCell>
                                            <TableCell>
                                                <input
                                                    type="checkbox"
                                                    class="toggle"
                                                    prop:checked=active
                                                    disabled=move || toggles.with(|t| t.is_pending(&id_for_pending))
                                                    on:change=move |_| toggle_active(id_for_toggle.clone())
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| row_for_open.with_value(|r| open_detail(r))
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
