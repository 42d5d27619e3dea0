use contracts::domain::a005_store_template::StoreTemplateDto;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_store_template::{api, view_tab_key, TEMPLATE_CREATE_KEY, TEMPLATE_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::icons::icon;
use crate::shared::labels::format_label;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::{reload_on, use_paged_loader, PagedListState, StatusFilter};

/// Card caption: image slot, plus a marker for the default template
pub fn template_caption(template: &StoreTemplateDto) -> String {
    let slot = template
        .image_type
        .map(|t| format_label(t.code()))
        .unwrap_or_else(|| "Template".to_string());
    if template.is_default {
        format!("{} (default)", slot)
    } else {
        slot
    }
}

#[component]
pub fn StoreTemplateList() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let state = RwSignal::new(PagedListState::<StoreTemplateDto, ()>::new(StatusFilter::All));

    use_paged_loader(state, notifier, "Failed to load store templates", |req| {
        api::fetch_templates(req.page)
    });
    reload_on(state, move || ctx.refresh_token(TEMPLATE_LIST_KEY));

    let open_view = move |template: &StoreTemplateDto| {
        ctx.open_tab(
            &view_tab_key(template.id.as_str()),
            &detail_tab_label("Store Template", &template_caption(template)),
        );
    };

    let go_to_page = move |page: u32| {
        state.update(|s| {
            s.go_to_page(page);
        });
    };

    view! {
        <PageFrame page_id="a005_store_template--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Store Templates"</h1>
                    <Badge>{move || state.with(|s| s.total_elements.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_tab(TEMPLATE_CREATE_KEY, tab_label_for_key(TEMPLATE_CREATE_KEY))
                    >
                        {icon("plus")}
                        " Create Template"
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
                        <span>"Loading store templates..."</span>
                    </Flex>
                </Show>
                <Show when=move || state.with(|s| !s.loading && s.items.is_empty())>
                    <div class="placeholder">"No store templates created yet"</div>
                </Show>

                <div class="card-grid">
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|t: &StoreTemplateDto| (t.id.clone(), t.status)
                        children=move |template: StoreTemplateDto| {
                            let caption = template_caption(&template);
                            let template_for_open = template.clone();
                            view! {
                                <Card>
                                    <div class="card-grid__media">
                                        <img
                                            src=template.image_url.clone().unwrap_or_default()
                                            alt=caption.clone()
                                        />
                                    </div>
                                    <div class="card-grid__body">
                                        <Flex gap=FlexGap::Small style="justify-content: space-between; align-items: center;">
                                            <span style="font-weight: 500;">{caption}</span>
                                            <RecordStatusBadge status=template.status />
                                        </Flex>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| open_view(&template_for_open)
                                        >
                                            {icon("eye")}
                                            " View"
                                        </Button>
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
    use contracts::enums::StoreTemplateImageType;

    #[test]
    fn caption_names_slot_and_default() {
        let mut template = StoreTemplateDto {
            image_type: Some(StoreTemplateImageType::Mission),
            ..Default::default()
        };
        assert_eq!(template_caption(&template), "Mission");
        template.is_default = true;
        assert_eq!(template_caption(&template), "Mission (default)");
        assert_eq!(template_caption(&StoreTemplateDto::default()), "Template");
    }
}
