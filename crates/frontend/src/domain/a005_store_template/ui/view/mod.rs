use contracts::domain::a005_store_template::StoreTemplateDto;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::list::template_caption;
use crate::domain::a005_store_template::{api, edit_tab_key, view_tab_key, TEMPLATE_LIST_KEY};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::status_badge::RecordStatusBadge;
use crate::shared::components::{DetailField, FileLink};
use crate::shared::dialogs;
use crate::shared::http::{Ack, ApiError};
use crate::shared::icons::icon;
use crate::shared::labels::label_or_dash;
use crate::shared::notifications::{use_notifications, Notify};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Tier titles when embedded, bare ids otherwise; nothing means every tier
fn tiers_text(template: &StoreTemplateDto) -> String {
    if !template.allowed_tiers.is_empty() {
        return template
            .allowed_tiers
            .iter()
            .map(|t| t.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
    }
    if template.allowed_tier_ids.is_empty() {
        return "All Tiers".to_string();
    }
    template
        .allowed_tier_ids
        .iter()
        .map(|id| format!("#{}", id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteKind {
    Soft,
    Hard,
}

impl DeleteKind {
    fn prompt(self) -> &'static str {
        match self {
            DeleteKind::Soft => "Are you sure you want to delete this template?",
            DeleteKind::Hard => "Delete this template permanently?",
        }
    }
}

async fn run_delete(kind: DeleteKind, id: &str) -> Result<Ack, ApiError> {
    match kind {
        DeleteKind::Soft => api::soft_delete_template(id).await,
        DeleteKind::Hard => api::delete_template(id).await,
    }
}

#[component]
pub fn StoreTemplateView(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifications();
    let template: RwSignal<Option<StoreTemplateDto>> = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let deleting = RwSignal::new(false);
    let id = StoredValue::new(id);

    spawn_local(async move {
        let template_id = id.get_value();
        match api::fetch_template(&template_id).await {
            Ok(t) => {
                ctx.update_tab_title(
                    &view_tab_key(&template_id),
                    &detail_tab_label("Store Template", &template_caption(&t)),
                );
                let _ = template.try_set(Some(t));
            }
            Err(e) => {
                let _ = error.try_set(Some(e.user_message("Failed to fetch template")));
            }
        }
        let _ = loading.try_set(false);
    });

    let is_active = Signal::derive(move || {
        template.with(|t| t.as_ref().and_then(|t| t.status) == Some(RecordStatus::Active))
    });

    let open_edit = move |_| {
        if let Some(caption) = template.with_untracked(|t| t.as_ref().map(template_caption)) {
            ctx.open_tab(&edit_tab_key(&id.get_value()), &detail_tab_label("Edit Store Template", &caption));
        }
    };

    let remove = move |kind: DeleteKind| {
        if deleting.get_untracked() || !dialogs::confirm(kind.prompt()) {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            match run_delete(kind, &id.get_value()).await {
                Ok(ack) => {
                    notifier.success(ack.message.unwrap_or_else(|| "Template deleted successfully".into()));
                    ctx.request_refresh(TEMPLATE_LIST_KEY);
                    on_close.run(());
                }
                Err(e) => {
                    notifier.error(e.user_message("Failed to delete template"));
                    let _ = deleting.try_set(false);
                }
            }
        });
    };

    let busy = Signal::derive(move || deleting.get() || template.with(|t| t.is_none()));

    view! {
        <PageFrame page_id="a005_store_template--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{move || template.with(|t| t.as_ref().map(template_caption).unwrap_or_else(|| "Store Template".into()))}</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !is_active.get())
                        on_click=open_edit
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        on_click=move |_| remove(DeleteKind::Soft)
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=busy
                        on_click=move |_| remove(DeleteKind::Hard)
                    >
                        "Delete permanently"
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
                                <span>"Loading template..."</span>
                            </Flex>
                        }.into_any()
                    } else if let Some(err) = error.get() {
                        view! {
                            <div class="alert alert--error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any()
                    } else if let Some(t) = template.get() {
                        view! {
                            <Card>
                                <div class="details-grid">
                                    <DetailField label="Type" value=label_or_dash(t.image_type.map(|i| i.code())) />
                                    <div class="details__field">
                                        <span class="details__label">"Status"</span>
                                        <RecordStatusBadge status=t.status />
                                    </div>
                                    <DetailField label="Default Template" value={if t.is_default { "Yes" } else { "No" }} />
                                    <DetailField label="Allowed Tiers" value=tiers_text(&t) />
                                    <FileLink label="Image" url=t.image_url.clone() />
                                </div>
                            </Card>
                        }.into_any()
                    } else {
                        view! { <div class="placeholder">"Template not found"</div> }.into_any()
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
    use contracts::shared::RecordId;

    #[test]
    fn tiers_prefer_titles_then_ids() {
        let mut template = StoreTemplateDto::default();
        assert_eq!(tiers_text(&template), "All Tiers");

        template.allowed_tier_ids = vec![RecordId::new("3"), RecordId::new("5")];
        assert_eq!(tiers_text(&template), "#3, #5");

        template.allowed_tiers = vec![AllowedTierDto { id: "3".into(), title: "Gold".into() }];
        assert_eq!(tiers_text(&template), "Gold");
    }
}
