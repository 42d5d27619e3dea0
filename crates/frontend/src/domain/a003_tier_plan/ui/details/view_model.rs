//! ViewModel for the tier detail screen: the plan itself plus the limit and
//! feature editors.

use std::future::Future;

use contracts::domain::a003_tier_plan::{
    CreateFeatureDto, CreateLimitDto, FeatureDraft, LimitDraft, TierFeatureDto, TierLimitDto,
    TierPlanDto,
};
use contracts::shared::RecordId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_tier_plan::api;
use crate::shared::dialogs;
use crate::shared::http::{Ack, ApiError};
use crate::shared::notifications::{use_notifications, NotificationService, Notify};
use crate::shared::row_editor::{EditableRow, RowEditor};

impl EditableRow for TierLimitDto {
    fn row_id(&self) -> &RecordId {
        &self.id
    }
}

impl EditableRow for TierFeatureDto {
    fn row_id(&self) -> &RecordId {
        &self.id
    }
}

fn limit_body(row: &TierLimitDto) -> LimitDraft {
    LimitDraft {
        limits_name: row.limits_name.trim().to_string(),
        limits_value: row.limits_value.trim().to_string(),
    }
}

fn feature_body(row: &TierFeatureDto) -> FeatureDraft {
    FeatureDraft {
        feature_name: row.feature_name.trim().to_string(),
        feature_description: row.feature_description.trim().to_string(),
    }
}

/// PUTs one row; the local edit stays in place whatever the outcome
fn save_row<T, F, Fut>(
    editor: RwSignal<RowEditor<T>>,
    id: RecordId,
    notifier: NotificationService,
    put: F,
) where
    T: EditableRow + Send + Sync + 'static,
    F: FnOnce(String, T) -> Fut + 'static,
    Fut: Future<Output = Result<Ack, ApiError>> + 'static,
{
    let Some(value) = editor.try_update(|e| e.begin_save(&id)).flatten() else {
        return;
    };
    let request = put(id.to_string(), value);
    spawn_local(async move {
        match request.await {
            Ok(ack) => {
                let _ = editor.try_update(|e| e.finish_save(&id, true));
                notifier.success(ack.message.unwrap_or_else(|| "Saved".into()));
            }
            Err(e) => {
                let _ = editor.try_update(|e| e.finish_save(&id, false));
                notifier.error(e.user_message("Failed to save"));
            }
        }
    });
}

/// DELETEs one row after confirmation and splices it out on success
fn delete_row<T, F, Fut>(
    editor: RwSignal<RowEditor<T>>,
    id: RecordId,
    notifier: NotificationService,
    what: &'static str,
    delete: F,
) where
    T: EditableRow + Send + Sync + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<Ack, ApiError>> + 'static,
{
    if !dialogs::confirm(&format!("Delete this {}?", what)) {
        return;
    }
    if !editor.try_update(|e| e.begin_delete(&id)).unwrap_or(false) {
        return;
    }
    let request = delete(id.to_string());
    spawn_local(async move {
        match request.await {
            Ok(ack) => {
                let _ = editor.try_update(|e| e.finish_delete(&id, true));
                notifier.success(ack.message.unwrap_or_else(|| format!("{} deleted", what)));
            }
            Err(e) => {
                let _ = editor.try_update(|e| e.finish_delete(&id, false));
                notifier.error(e.user_message(&format!("Failed to delete {}", what)));
            }
        }
    });
}

#[derive(Clone, Copy)]
pub struct TierPlanDetailsVm {
    id: StoredValue<String>,
    notifier: NotificationService,

    pub tier: RwSignal<Option<TierPlanDto>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    pub limits: RwSignal<RowEditor<TierLimitDto>>,
    pub features: RwSignal<RowEditor<TierFeatureDto>>,
    pub limit_names: RwSignal<Vec<String>>,

    pub new_limit_name: RwSignal<String>,
    pub new_limit_value: RwSignal<String>,
    pub new_feature_name: RwSignal<String>,
    pub new_feature_description: RwSignal<String>,
    pub adding: RwSignal<bool>,
}

impl TierPlanDetailsVm {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id),
            notifier: use_notifications(),
            tier: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            limits: RwSignal::new(RowEditor::default()),
            features: RwSignal::new(RowEditor::default()),
            limit_names: RwSignal::new(Vec::new()),
            new_limit_name: RwSignal::new(String::new()),
            new_limit_value: RwSignal::new(String::new()),
            new_feature_name: RwSignal::new(String::new()),
            new_feature_description: RwSignal::new(String::new()),
            adding: RwSignal::new(false),
        }
    }

    pub fn id(&self) -> String {
        self.id.get_value()
    }

    /// Plan, both collections and the limit-name catalogue
    pub fn load(&self) {
        let this = *self;
        let id = self.id();
        self.loading.set(true);
        self.error.set(None);
        spawn_local(async move {
            match api::fetch_tier_plan(&id).await {
                Ok(tier) => {
                    let _ = this.tier.try_set(Some(tier));
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(e.user_message("Failed to load tier plan")));
                    let _ = this.loading.try_set(false);
                    return;
                }
            }
            match api::fetch_limits(&id).await {
                Ok(rows) => {
                    let _ = this.limits.try_set(RowEditor::new(rows));
                }
                Err(e) => this.notifier.error(e.user_message("Failed to load limits")),
            }
            match api::fetch_features(&id).await {
                Ok(rows) => {
                    let _ = this.features.try_set(RowEditor::new(rows));
                }
                Err(e) => this.notifier.error(e.user_message("Failed to load features")),
            }
            match api::fetch_limit_names().await {
                Ok(names) => {
                    let _ = this.limit_names.try_set(names);
                }
                Err(e) => log::warn!("limit names unavailable: {}", e),
            }
            let _ = this.loading.try_set(false);
        });
    }

    pub fn save_limit(&self, id: RecordId) {
        save_row(self.limits, id, self.notifier, |id, row| async move {
            api::update_limit(&id, limit_body(&row)).await
        });
    }

    pub fn delete_limit(&self, id: RecordId) {
        delete_row(self.limits, id, self.notifier, "limit", |id| async move {
            api::delete_limit(&id).await
        });
    }

    pub fn save_feature(&self, id: RecordId) {
        save_row(self.features, id, self.notifier, |id, row| async move {
            api::update_feature(&id, feature_body(&row)).await
        });
    }

    pub fn delete_feature(&self, id: RecordId) {
        delete_row(self.features, id, self.notifier, "feature", |id| async move {
            api::delete_feature(&id).await
        });
    }

    /// POSTs the new-limit draft, then appends what the server now lists
    pub fn add_limit(&self) {
        let draft = LimitDraft {
            limits_name: self.new_limit_name.get_untracked(),
            limits_value: self.new_limit_value.get_untracked(),
        };
        if !draft.is_complete() {
            self.notifier.error("Limit name and value are required");
            return;
        }
        if self.adding.get_untracked() {
            return;
        }
        let this = *self;
        let tier_id = self.id();
        self.adding.set(true);
        spawn_local(async move {
            let body = CreateLimitDto {
                tier_plan_id: RecordId::new(tier_id.clone()),
                limit: limit_body(&TierLimitDto {
                    limits_name: draft.limits_name,
                    limits_value: draft.limits_value,
                    ..Default::default()
                }),
            };
            match api::create_limit(body).await {
                Ok(ack) => {
                    this.notifier.success(ack.message.unwrap_or_else(|| "Limit added".into()));
                    let _ = this.new_limit_name.try_set(String::new());
                    let _ = this.new_limit_value.try_set(String::new());
                    match api::fetch_limits(&tier_id).await {
                        Ok(rows) => {
                            let _ = this.limits.try_update(|e| e.append_missing(rows));
                        }
                        Err(e) => log::error!("tier {} limits refetch: {}", tier_id, e),
                    }
                }
                Err(e) => this.notifier.error(e.user_message("Failed to add limit")),
            }
            let _ = this.adding.try_set(false);
        });
    }

    pub fn add_feature(&self) {
        let draft = FeatureDraft {
            feature_name: self.new_feature_name.get_untracked(),
            feature_description: self.new_feature_description.get_untracked(),
        };
        if !draft.is_complete() {
            self.notifier.error("Feature name is required");
            return;
        }
        if self.adding.get_untracked() {
            return;
        }
        let this = *self;
        let tier_id = self.id();
        self.adding.set(true);
        spawn_local(async move {
            let body = CreateFeatureDto {
                tier_plan_id: RecordId::new(tier_id.clone()),
                feature: feature_body(&TierFeatureDto {
                    feature_name: draft.feature_name,
                    feature_description: draft.feature_description,
                    ..Default::default()
                }),
            };
            match api::create_feature(body).await {
                Ok(ack) => {
                    this.notifier.success(ack.message.unwrap_or_else(|| "Feature added".into()));
                    let _ = this.new_feature_name.try_set(String::new());
                    let _ = this.new_feature_description.try_set(String::new());
                    match api::fetch_features(&tier_id).await {
                        Ok(rows) => {
                            let _ = this.features.try_update(|e| e.append_missing(rows));
                        }
                        Err(e) => log::error!("tier {} features refetch: {}", tier_id, e),
                    }
                }
                Err(e) => this.notifier.error(e.user_message("Failed to add feature")),
            }
            let _ = this.adding.try_set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(id: &str, name: &str, value: &str) -> TierLimitDto {
        TierLimitDto {
            id: id.into(),
            limits_name: name.into(),
            limits_value: value.into(),
        }
    }

    fn limits() -> RowEditor<TierLimitDto> {
        RowEditor::new(vec![
            limit("7", "MAX_LISTINGS", "50"),
            limit("8", "LEADS", "10"),
            limit("9", "STAFF", "3"),
        ])
    }

    #[test]
    fn deleting_a_limit_by_id_removes_only_that_row() {
        let mut editor = limits();
        assert!(editor.begin_delete(&"8".into()));
        editor.finish_delete(&"8".into(), true);
        assert_eq!(editor.ids(), vec![RecordId::from("7"), RecordId::from("9")]);
    }

    #[test]
    fn failed_delete_keeps_the_limits() {
        let mut editor = limits();
        let before = editor.clone();
        editor.begin_delete(&"7".into());
        editor.finish_delete(&"7".into(), false);
        assert_eq!(editor, before);
    }

    #[test]
    fn edited_limit_is_sent_trimmed() {
        let mut editor = limits();
        editor.edit(&"9".into(), |l| l.limits_value = " 5 ".into());
        let sent = editor.begin_save(&"9".into()).unwrap();
        assert_eq!(
            limit_body(&sent),
            LimitDraft { limits_name: "STAFF".into(), limits_value: "5".into() }
        );
    }

    #[test]
    fn feature_rows_key_by_id() {
        let feature = TierFeatureDto {
            id: "f1".into(),
            feature_name: " Priority ".into(),
            feature_description: String::new(),
        };
        assert_eq!(feature.row_id().as_str(), "f1");
        assert_eq!(feature_body(&feature).feature_name, "Priority");
    }
}
