mod state;

use contracts::shared::RecordId;
use contracts::system::users::UserDto;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::icons::icon;
use crate::shared::labels::{label_or_dash, or_dash};
use crate::shared::notifications::use_notifications;
use crate::shared::optimistic::spawn_toggle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::use_paged_loader;
use crate::system::users::api;
use crate::system::users::ui::details::UserDetailsModal;
use state::{create_state, create_toggles};

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let toggles = create_toggles();
    let notifier = use_notifications();
    let viewing: RwSignal<Option<RecordId>> = RwSignal::new(None);

    use_paged_loader(state, notifier, "Failed to load users", |req| {
        api::fetch_users(req.page)
    });

    let toggle_status = move |id: RecordId| {
        spawn_toggle(
            state,
            toggles,
            id,
            notifier,
            "Failed to update user status",
            |pending| async move { api::update_status(pending.id.as_str(), pending.next).await },
        );
    };

    let go_to_page = move |page: u32| {
        state.update(|s| {
            s.go_to_page(page);
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
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

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <Spinner size=SpinnerSize::Small />
                                    </TableCell>
                                </TableRow>
                            </Show>
                            <Show when=move || state.with(|s| !s.loading && s.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="7">"No users found"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|u: &UserDto| (u.id.clone(), u.status)
                                children=move |user: UserDto| {
                                    let id = user.id.clone();
                                    let id_for_toggle = id.clone();
                                    let id_for_pending = id.clone();
                                    let status = user.status;
                                    let name = user.full_name();
                                    let email = or_dash(user.email.as_deref());
                                    let phone = user.phone().unwrap_or_else(|| "-".to_string());
                                    let role = label_or_dash(user.user_role.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {phone}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {role}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RecordStatusBadge status=Some(status) />
                                            </TableCell>
                                            <TableCell>
                                                <input
                                                    type="checkbox"
                                                    class="toggle"
                                                    prop:checked=status.is_active()
                                                    disabled=move || toggles.with(|t| t.is_pending(&id_for_pending))
                                                    on:change=move |_| toggle_status(id_for_toggle.clone())
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| viewing.set(Some(id.clone()))
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

            {move || viewing.get().map(|id| view! {
                <UserDetailsModal id=id on_close=Callback::new(move |_| viewing.set(None)) />
            })}
        </PageFrame>
    }
}
