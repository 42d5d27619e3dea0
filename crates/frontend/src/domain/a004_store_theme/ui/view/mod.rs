//! Read-only theme page; also opens soft-deleted themes

use contracts::domain::a004_store_theme::StoreThemeDto;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a004_store_theme::{api, edit_tab_key, view_tab_key, THEME_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::components::{DetailField, FileLink};
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::labels::{label_or_dash, or_dash};
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// An empty tier list means the theme is offered to every tier
fn tiers_text(theme: &StoreThemeDto) -> String {
    if theme.allowed_tiers.is_empty() {
        "All Tiers".to_string()
    } else {
        theme.allowed_tier_titles()
    }
}

#[component]
pub fn StoreThemeView(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let theme: RwSignal<Option<StoreThemeDto>> = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let deleting = RwSignal::new(false);
    let id = StoredValue::new(id);

    spawn_local(async move {
        let theme_id = id.get_value();
        match api::fetch_theme_any(&theme_id).await {
            Ok(t) => {
                if !t.name.trim().is_empty() {
                    ctx.update_tab_title(&view_tab_key(&theme_id), &detail_tab_label("Store Theme", &t.name));
                }
                let _ = theme.try_set(Some(t));
            }
            Err(e) => {
                let _ = error.try_set(Some(e.user_message("Theme not found")));
            }
        }
        let _ = loading.try_set(false);
    });

    let is_active = move || theme.with(|t| t.as_ref().and_then(|t| t.status) == Some(RecordStatus::Active));

    let open_edit = move |_| {
        if let Some(name) = theme.with_untracked(|t| t.as_ref().map(|t| t.name.clone())) {
            let theme_id = id.get_value();
            ctx.open_tab(&edit_tab_key(&theme_id), &detail_tab_label("Edit Store Theme", &name));
        }
    };

    let hard_delete = move |_| {
        if deleting.get_untracked() || !dialogs::confirm("Delete this theme permanently?") {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            match api::delete_theme(&id.get_value()).await {
                Ok(ack) => {
                    notifier.success(ack.message.unwrap_or_else(|| "Theme deleted".into()));
                    ctx.request_refresh(THEME_LIST_KEY);
                    on_close.run(());
                }
                Err(e) => {
                    notifier.error(e.user_message("Failed to delete theme"));
                    let _ = deleting.try_set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a004_store_theme--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{move || theme.with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_else(|| "Store Theme".into()))}</h2>
                </div>
                <div class="page__header-right">
                    <Show when=is_active>
                        <Button appearance=ButtonAppearance::Primary on_click=open_edit>
                            {icon("edit")}
                            " Edit Theme"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || deleting.get() || theme.with(|t| t.is_none()))
                        on_click=hard_delete
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                                <Spinner />
                                <span>"Loading theme details..."</span>
                            </Flex>
                        }.into_any()
                    } else if let Some(err) = error.get() {
                        view! {
                            <div class="alert alert--error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any()
                    } else if let Some(t) = theme.get() {
                        let tiers = tiers_text(&t);
                        let schema = t.schema_display();
                        view! {
                            <div>
                                <Card>
                                    <div class="details-grid">
                                        <DetailField label="Theme ID" value=or_dash(t.theme_id.as_deref()) />
                                        <DetailField label="Type" value=label_or_dash(t.theme_type.as_deref()) />
                                        <div class="details__field">
                                            <span class="details__label">"Status"</span>
                                            <RecordStatusBadge status=t.status />
                                        </div>
                                        <DetailField label="Allowed Tiers" value=tiers />
                                    </div>
                                </Card>
                                <Card>
                                    <div class="details-grid">
                                        <FileLink label="Thumbnail Image" url=t.thumbnail_url.clone() />
                                        <FileLink label="Preview Image" url=t.preview_url.clone() />
                                    </div>
                                </Card>
                                <Card>
                                    <h4 class="details-section__title">"Theme Schema"</h4>
                                    <pre class="code-block">{schema}</pre>
                                </Card>
                            </div>
                        }.into_any()
                    } else {
                        view! { <div class="placeholder">"Theme not found"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_store_theme::AllowedTierDto;

    #[test]
    fn no_tiers_reads_as_all_tiers() {
        let mut theme = StoreThemeDto::default();
        assert_eq!(tiers_text(&theme), "All Tiers");
        theme.allowed_tiers = vec![
            AllowedTierDto { id: "1".into(), title: "Silver".into() },
            AllowedTierDto { id: "2".into(), title: "Gold".into() },
        ];
        assert_eq!(tiers_text(&theme), "Silver, Gold");
    }
}
