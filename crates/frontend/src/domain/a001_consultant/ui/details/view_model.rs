//! ViewModel for the consultant review screen
//!
//! The consultant itself loads with the page; address and documents load the
//! first time their tab is opened and stay cached while the tab lives.

use contracts::domain::a001_consultant::{
    ConsultantAddressDto, ConsultantDocumentsDto, ConsultantDto, VerifyConsultationDto,
};
use contracts::enums::VerificationStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_consultant::api;
use crate::shared::http::ApiError;
use crate::shared::notifications::{use_notifications, NotificationService, Notify};
use crate::shared::review::{submit_review, ReviewAction, ReviewState};
use crate::shared::tab_cache::{LoadState, TabCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultantTab {
    Business,
    Address,
    Documents,
    Review,
}

impl ConsultantTab {
    pub fn all() -> [ConsultantTab; 4] {
        [
            ConsultantTab::Business,
            ConsultantTab::Address,
            ConsultantTab::Documents,
            ConsultantTab::Review,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsultantTab::Business => "Business",
            ConsultantTab::Address => "Address",
            ConsultantTab::Documents => "Documents",
            ConsultantTab::Review => "Review",
        }
    }

    /// Tabs backed by their own endpoint
    pub fn is_lazy(self) -> bool {
        matches!(self, ConsultantTab::Address | ConsultantTab::Documents)
    }
}

/// Sub-resource behind a lazy tab; `None` when the consultant has not filled it in
#[derive(Debug, Clone, PartialEq)]
pub enum ConsultantSection {
    Address(Option<ConsultantAddressDto>),
    Documents(Option<ConsultantDocumentsDto>),
}

/// Target picked in the change-status dropdown
pub fn change_status_action(code: &str) -> Option<ReviewAction> {
    VerificationStatus::from_code(code).map(ReviewAction::ChangeStatus)
}

fn section_error(tab: ConsultantTab, e: &ApiError) -> String {
    e.user_message(&format!("Failed to load {}", tab.label().to_lowercase()))
}

#[derive(Clone, Copy)]
pub struct ConsultantDetailsVm {
    id: StoredValue<String>,
    notifier: NotificationService,

    pub consultant: RwSignal<Option<ConsultantDto>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    pub tabs: RwSignal<TabCache<ConsultantTab, ConsultantSection>>,

    pub review: RwSignal<ReviewState>,
    pub remark: RwSignal<String>,
    pub change_target: RwSignal<String>,
    pub change_remark: RwSignal<String>,

    pub suspend_reason: RwSignal<String>,
    pub suspending: RwSignal<bool>,
}

impl ConsultantDetailsVm {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id),
            notifier: use_notifications(),
            consultant: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            tabs: RwSignal::new(TabCache::new(ConsultantTab::Business)),
            review: RwSignal::new(ReviewState::default()),
            remark: RwSignal::new(String::new()),
            change_target: RwSignal::new(VerificationStatus::Requested.code().to_string()),
            change_remark: RwSignal::new(String::new()),
            suspend_reason: RwSignal::new(String::new()),
            suspending: RwSignal::new(false),
        }
    }

    pub fn id(&self) -> String {
        self.id.get_value()
    }

    pub fn active_tab(&self) -> Signal<ConsultantTab> {
        let tabs = self.tabs;
        Signal::derive(move || tabs.with(|t| t.active))
    }

    /// Load state of a lazy tab
    pub fn section(&self, tab: ConsultantTab) -> Signal<LoadState<ConsultantSection>> {
        let tabs = self.tabs;
        Signal::derive(move || tabs.with(|t| t.get(&tab).clone()))
    }

    pub fn load(&self) {
        let this = *self;
        let id = self.id();
        self.loading.set(true);
        spawn_local(async move {
            match api::fetch_consultant(&id).await {
                Ok(consultant) => {
                    let status = consultant.verification_status.unwrap_or_default();
                    let _ = this.review.try_set(ReviewState::new(status));
                    let _ = this.consultant.try_set(Some(consultant));
                    let _ = this.error.try_set(None);
                }
                Err(e) => {
                    let _ = this
                        .error
                        .try_set(Some(e.user_message("Failed to load consultant")));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    /// Shows `tab`, fetching it if it was never loaded or failed last time
    pub fn select_tab(&self, tab: ConsultantTab) {
        if !tab.is_lazy() {
            self.tabs.update(|t| t.select(tab));
            return;
        }
        let needs_fetch = self.tabs.try_update(|t| t.activate(tab)).unwrap_or(false);
        if !needs_fetch {
            return;
        }

        let tabs = self.tabs;
        let id = self.id();
        spawn_local(async move {
            let result = match tab {
                ConsultantTab::Address => api::fetch_address(&id)
                    .await
                    .map(ConsultantSection::Address),
                _ => api::fetch_documents(&id)
                    .await
                    .map(ConsultantSection::Documents),
            };
            let result = result.map_err(|e| {
                log::error!("consultant {} {:?} tab: {}", id, tab, e);
                section_error(tab, &e)
            });
            let _ = tabs.try_update(|t| t.resolve(tab, result));
        });
    }

    /// Approve / reject / request changes with the remark draft, or change the
    /// status of a reviewed consultant with the change-status draft.
    pub fn submit(&self, action: ReviewAction, on_done: Callback<()>) {
        let draft = match action {
            ReviewAction::ChangeStatus(_) => self.change_remark.get_untracked(),
            _ => self.remark.get_untracked(),
        };
        let notifier = self.notifier;
        let Some(submission) = self
            .review
            .try_update(|r| submit_review(r, action, &draft, &notifier))
            .flatten()
        else {
            return;
        };

        let review = self.review;
        let id = self.id();
        spawn_local(async move {
            let target = submission.target;
            let body = VerifyConsultationDto {
                verification_status: target,
                admin_remark: submission.remark,
            };
            match api::verify(&id, body).await {
                Ok(ack) => {
                    let _ = review.try_update(|r| r.finish_submit(true, target));
                    notifier.success(ack.message.unwrap_or_else(|| {
                        format!("Consultant marked {}", target.display_name())
                    }));
                    on_done.run(());
                }
                Err(e) => {
                    let _ = review.try_update(|r| r.finish_submit(false, target));
                    notifier.error(e.user_message("Failed to update consultant"));
                }
            }
        });
    }

    pub fn change_status(&self, on_done: Callback<()>) {
        match change_status_action(&self.change_target.get_untracked()) {
            Some(action) => self.submit(action, on_done),
            None => self.notifier.error("Pick a status"),
        }
    }

    pub fn suspend(&self, on_done: Callback<()>) {
        let reason = self.suspend_reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            self.notifier.error("Suspension reason is required");
            return;
        }
        if self.suspending.get_untracked() {
            return;
        }
        self.suspending.set(true);

        let this = *self;
        let id = self.id();
        spawn_local(async move {
            match api::suspend(&id, reason).await {
                Ok(ack) => {
                    this.notifier
                        .success(ack.message.unwrap_or_else(|| "Consultant suspended".into()));
                    on_done.run(());
                }
                Err(e) => this
                    .notifier
                    .error(e.user_message("Failed to suspend consultant")),
            }
            let _ = this.suspending.try_set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_address_and_documents_load_lazily() {
        let lazy: Vec<_> = ConsultantTab::all().into_iter().filter(|t| t.is_lazy()).collect();
        assert_eq!(lazy, vec![ConsultantTab::Address, ConsultantTab::Documents]);
    }

    #[test]
    fn change_status_parses_wire_codes() {
        assert_eq!(
            change_status_action("REQUEST_CHANGES"),
            Some(ReviewAction::ChangeStatus(VerificationStatus::RequestChanges))
        );
        assert_eq!(change_status_action(""), None);
    }

    #[test]
    fn empty_address_is_cached_as_loaded() {
        let mut cache: TabCache<ConsultantTab, ConsultantSection> =
            TabCache::new(ConsultantTab::Business);
        assert!(cache.activate(ConsultantTab::Address));
        cache.resolve(ConsultantTab::Address, Ok(ConsultantSection::Address(None)));
        assert!(!cache.activate(ConsultantTab::Address));
        assert_eq!(
            cache.loaded(&ConsultantTab::Address),
            Some(&ConsultantSection::Address(None))
        );
    }

    #[test]
    fn section_errors_prefer_backend_text() {
        let e = ApiError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(section_error(ConsultantTab::Documents, &e), "Failed to load documents");
    }
}
