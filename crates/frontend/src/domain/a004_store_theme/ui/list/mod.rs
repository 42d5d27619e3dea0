use contracts::domain::a004_store_theme::StoreThemeDto;
use contracts::enums::RecordStatus;
use contracts::shared::RecordId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a004_store_theme::{api, view_tab_key, THEME_CREATE_KEY, THEME_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::{reload_on, use_paged_loader, PagedListState, StatusFilter};

/// Only ACTIVE themes can be soft-deleted
fn can_soft_delete(theme: &StoreThemeDto) -> bool {
    theme.status.unwrap_or(RecordStatus::Active) == RecordStatus::Active
}

#[component]
pub fn StoreThemeList() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let state = RwSignal::new(PagedListState::<StoreThemeDto, ()>::new(StatusFilter::All));
    let deleting: RwSignal<Option<RecordId>> = RwSignal::new(None);

    use_paged_loader(state, notifier, "Failed to load store themes", |req| {
        api::fetch_themes(req.page)
    });
    reload_on(state, move || ctx.refresh_token(THEME_LIST_KEY));

    let soft_delete = move |id: RecordId| {
        if deleting.get_untracked().is_some() || !dialogs::confirm("Soft delete this theme?") {
            return;
        }
        deleting.set(Some(id.clone()));
        spawn_local(async move {
            match api::soft_delete_theme(id.as_str()).await {
                Ok(ack) => {
                    notifier.success(ack.message.unwrap_or_else(|| "Theme deleted".into()));
                    let _ = state.try_update(|s| s.reload());
                }
                Err(e) => notifier.error(e.user_message("Failed to delete theme")),
            }
            let _ = deleting.try_set(None);
        });
    };

    let open_view = move |theme: &StoreThemeDto| {
        ctx.open_tab(
            &view_tab_key(theme.id.as_str()),
            &detail_tab_label("Store Theme", &theme.name),
        );
    };

    let go_to_page = move |page: u32| {
        state.update(|s| {
            s.go_to_page(page);
        });
    };

    view! {
        <PageFrame page_id="a004_store_theme--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Store Themes"</h1>
                    <Badge>{move || state.with(|s| s.total_elements.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_tab(THEME_CREATE_KEY, tab_label_for_key(THEME_CREATE_KEY))
                    >
                        {icon("plus")}
                        " Create Theme"
                    </Button>
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
                <Show when=move || state.with(|s| s.loading && s.items.is_empty())>
                    <Flex gap=FlexGap::Small style="justify-content: center; padding: var(--spacing-4xl);">
                        <Spinner />
                        <span>"Loading store themes..."</span>
                    </Flex>
                </Show>
                <Show when=move || state.with(|s| !s.loading && s.items.is_empty())>
                    <div class="placeholder">"No store themes created yet"</div>
                </Show>

                <div class="card-grid">
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|t: &StoreThemeDto| (t.id.clone(), t.status)
                        children=move |theme: StoreThemeDto| {
                            let deletable = can_soft_delete(&theme);
                            let id = theme.id.clone();
                            let id_busy = theme.id.clone();
                            let theme_for_open = theme.clone();
                            view! {
                                <Card>
                                    <div class="card-grid__media">
                                        <img
                                            src=theme.thumbnail_url.clone().unwrap_or_default()
                                            alt=theme.name.clone()
                                        />
                                    </div>
                                    <div class="card-grid__body">
                                        <Flex gap=FlexGap::Small style="justify-content: space-between; align-items: center;">
                                            <span style="font-weight: 500;">{theme.name.clone()}</span>
                                            <RecordStatusBadge status=theme.status />
                                        </Flex>
                                        <Flex gap=FlexGap::Small style="justify-content: space-between; padding-top: 8px;">
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| open_view(&theme_for_open)
                                            >
                                                {icon("eye")}
                                                " View"
                                            </Button>
                                            {deletable.then(|| view! {
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    disabled=Signal::derive(move || {
                                                        deleting.with(|d| d.as_ref() == Some(&id_busy))
                                                    })
                                                    on_click=move |_| soft_delete(id.clone())
                                                >
                                                    {icon("trash")}
                                                    " Soft Delete"
                                                </Button>
                                            })}
                                        </Flex>
                                    </div>
                                </Card>
                            }
                        }
                    />
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

    #[test]
    fn only_active_themes_offer_soft_delete() {
        let mut theme = StoreThemeDto {
            status: Some(RecordStatus::Active),
            ..Default::default()
        };
        assert!(can_soft_delete(&theme));
        theme.status = Some(RecordStatus::Deleted);
        assert!(!can_soft_delete(&theme));
        theme.status = Some(RecordStatus::Inactive);
        assert!(!can_soft_delete(&theme));
    }
}
