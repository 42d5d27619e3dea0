mod state;

pub use state::VehicleView;

use contracts::domain::a002_vehicle::VehicleDto;
use contracts::enums::VerificationStatus;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_vehicle::{api, detail_tab_key};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::VerificationBadge;
use crate::shared::icons::icon;
use crate::shared::labels::{label_or_dash, num_or_dash, or_dash};
use crate::shared::list_utils::SearchInput;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::{reload_on, use_paged_loader};
use state::{apply_status_choice, create_state, list_query, visible_rows};

#[component]
pub fn VehicleList(view: VehicleView) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let state = create_state(view);

    use_paged_loader(state, notifier, "Failed to load vehicles", |req| {
        api::fetch_vehicles(list_query(req))
    });
    reload_on(state, move || ctx.refresh_token(view.tab_key()));

    // "" stands for ALL
    let status_code = RwSignal::new(String::new());
    if view.has_status_picker() {
        Effect::new(move |_| {
            let code = status_code.get();
            state.maybe_update(|s| apply_status_choice(view, &code, s));
        });
    }

    // Client-side, over the rows of the current page
    let search = RwSignal::new(String::new());
    let visible = Memo::new(move |_| {
        let needle = search.get();
        state.with(|s| visible_rows(view, &s.items, &needle))
    });

    let open_detail = move |row: &VehicleDto| {
        let title = row.title();
        let label = if title.is_empty() { row.id.to_string() } else { title };
        ctx.open_tab(&detail_tab_key(row.id.as_str()), &detail_tab_label("Vehicle", &label));
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
                    <Badge>
                        {move || match view {
                            VehicleView::Sold => visible.with(|v| v.len().to_string()),
                            _ => state.with(|s| s.total_elements.to_string()),
                        }}
                    </Badge>
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
                    <SearchInput
                        on_change=Callback::new(move |text: String| search.set(text))
                        placeholder="Search maker, model, owner or type"
                    />
                </Flex>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>""</TableHeaderCell>
                                <TableHeaderCell>"Vehicle"</TableHeaderCell>
                                <TableHeaderCell>"Year"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Fuel"</TableHeaderCell>
                                <TableHeaderCell>"Owner"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Verification"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="9">
                                        <Spinner size=SpinnerSize::Small />
                                    </TableCell>
                                </TableRow>
                            </Show>
                            <Show when=move || !state.with(|s| s.loading) && visible.with(|v| v.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="9">"No vehicles found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || visible.get()
                                key=|v: &VehicleDto| (v.id.clone(), v.verification_status)
                                children=move |row: VehicleDto| {
                                    let thumbnail = row.thumbnail_url.clone();
                                    let title = row.title();
                                    let year = num_or_dash(row.year_of_mfg);
                                    let vehicle_type = label_or_dash(row.vehicle_type.as_deref());
                                    let fuel = label_or_dash(row.fuel_type.as_deref());
                                    let owner = or_dash(Some(row.owner_name().as_str()));
                                    let price = num_or_dash(row.price);
                                    let status = row.verification_status;
                                    let row_for_open = StoredValue::new(row);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {thumbnail.map(|src| view! {
                                                    <img class="table-thumb" src=src alt="" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{title}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{year}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle_type}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{fuel}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{owner}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <VerificationBadge status=status />
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
