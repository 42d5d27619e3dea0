//! ViewModel for the vehicle moderation screen

use contracts::domain::a002_vehicle::{
    VehicleAddressDto, VehicleDocumentDto, VehicleDto, VehicleExtraDetailDto, VehicleImageDto,
    VehicleStepStatusDto,
};
use contracts::enums::VerificationStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a002_vehicle::api;
use crate::shared::http::ApiError;
use crate::shared::notifications::{use_notifications, NotificationService, Notify};
use crate::shared::review::{submit_review, LockPolicy, ReviewAction, ReviewState};
use crate::shared::tab_cache::{LoadState, TabCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleTab {
    Overview,
    Address,
    Document,
    Extra,
    Steps,
    Images,
}

impl VehicleTab {
    pub fn all() -> [VehicleTab; 6] {
        [
            VehicleTab::Overview,
            VehicleTab::Address,
            VehicleTab::Document,
            VehicleTab::Extra,
            VehicleTab::Steps,
            VehicleTab::Images,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleTab::Overview => "Overview",
            VehicleTab::Address => "Address",
            VehicleTab::Document => "Documents",
            VehicleTab::Extra => "Extra Details",
            VehicleTab::Steps => "Listing Steps",
            VehicleTab::Images => "Images",
        }
    }

    pub fn is_lazy(self) -> bool {
        !matches!(self, VehicleTab::Overview)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VehicleSection {
    Address(Option<VehicleAddressDto>),
    Document(Option<VehicleDocumentDto>),
    Extra(Vec<VehicleExtraDetailDto>),
    Steps(Option<VehicleStepStatusDto>),
    Images(Vec<VehicleImageDto>),
}

async fn fetch_section(tab: VehicleTab, id: &str) -> Result<VehicleSection, ApiError> {
    match tab {
        VehicleTab::Address => api::fetch_address(id).await.map(VehicleSection::Address),
        VehicleTab::Document => api::fetch_document(id).await.map(VehicleSection::Document),
        VehicleTab::Extra => api::fetch_extra_details(id).await.map(VehicleSection::Extra),
        VehicleTab::Steps => api::fetch_step_status(id).await.map(VehicleSection::Steps),
        VehicleTab::Images => api::fetch_images(id).await.map(VehicleSection::Images),
        VehicleTab::Overview => Err(ApiError::Validation("overview is not a section".into())),
    }
}

#[derive(Clone, Copy)]
pub struct VehicleDetailsVm {
    id: StoredValue<String>,
    notifier: NotificationService,

    pub vehicle: RwSignal<Option<VehicleDto>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub tabs: RwSignal<TabCache<VehicleTab, VehicleSection>>,

    pub review: RwSignal<ReviewState>,
    pub remark: RwSignal<String>,
}

impl VehicleDetailsVm {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id),
            notifier: use_notifications(),
            vehicle: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            tabs: RwSignal::new(TabCache::new(VehicleTab::Overview)),
            review: RwSignal::new(vehicle_review(VerificationStatus::default())),
            remark: RwSignal::new(String::new()),
        }
    }

    pub fn id(&self) -> String {
        self.id.get_value()
    }

    pub fn active_tab(&self) -> Signal<VehicleTab> {
        let tabs = self.tabs;
        Signal::derive(move || tabs.with(|t| t.active))
    }

    pub fn section(&self, tab: VehicleTab) -> Signal<LoadState<VehicleSection>> {
        let tabs = self.tabs;
        Signal::derive(move || tabs.with(|t| t.get(&tab).clone()))
    }

    pub fn load(&self) {
        let this = *self;
        let id = self.id();
        self.loading.set(true);
        spawn_local(async move {
            match api::fetch_vehicle(&id).await {
                Ok(vehicle) => {
                    let status = vehicle.verification_status.unwrap_or_default();
                    let _ = this.review.try_set(vehicle_review(status));
                    let _ = this.vehicle.try_set(Some(vehicle));
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(e.user_message("Failed to load vehicle")));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    pub fn select_tab(&self, tab: VehicleTab) {
        if !tab.is_lazy() {
            self.tabs.update(|t| t.select(tab));
            return;
        }
        if !self.tabs.try_update(|t| t.activate(tab)).unwrap_or(false) {
            return;
        }

        let tabs = self.tabs;
        let id = self.id();
        spawn_local(async move {
            let result = fetch_section(tab, &id).await.map_err(|e| {
                log::error!("vehicle {} {:?} tab: {}", id, tab, e);
                e.user_message(&format!("Failed to load {}", tab.label().to_lowercase()))
            });
            let _ = tabs.try_update(|t| t.resolve(tab, result));
        });
    }

    /// Marks the vehicle VERIFIED with the remark draft
    pub fn verify(&self, on_done: Callback<()>) {
        let notifier = self.notifier;
        let draft = self.remark.get_untracked();
        let Some(submission) = self
            .review
            .try_update(|r| submit_review(r, ReviewAction::Approve, &draft, &notifier))
            .flatten()
        else {
            return;
        };

        let review = self.review;
        let id = self.id();
        spawn_local(async move {
            let target = submission.target;
            match api::verify(&id, submission.remark).await {
                Ok(ack) => {
                    let _ = review.try_update(|r| r.finish_submit(true, target));
                    notifier.success(ack.message.unwrap_or_else(|| "Vehicle verified".into()));
                    on_done.run(());
                }
                Err(e) => {
                    let _ = review.try_update(|r| r.finish_submit(false, target));
                    notifier.error(e.user_message("Failed to verify vehicle"));
                }
            }
        });
    }
}

/// Only a VERIFIED vehicle is closed; a flagged one can still be verified
fn vehicle_review(status: VerificationStatus) -> ReviewState {
    ReviewState::with_policy(status, LockPolicy::VerifiedOnly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_is_the_only_eager_tab() {
        let eager: Vec<_> = VehicleTab::all().into_iter().filter(|t| !t.is_lazy()).collect();
        assert_eq!(eager, vec![VehicleTab::Overview]);
    }

    #[test]
    fn verified_vehicle_cannot_be_verified_again() {
        let mut review = vehicle_review(VerificationStatus::Verified);
        assert!(!review.primary_actions_enabled());
        assert!(review.begin_submit(ReviewAction::Approve, "ok").is_err());
    }

    #[test]
    fn verify_targets_verified() {
        let mut review = vehicle_review(VerificationStatus::Requested);
        let submission = review.begin_submit(ReviewAction::Approve, " docs ok ").unwrap();
        assert_eq!(submission.target, VerificationStatus::Verified);
        assert_eq!(submission.remark, "docs ok");
        assert!(review.submitting);
    }

    #[test]
    fn flagged_vehicle_can_still_be_verified() {
        let mut review = vehicle_review(VerificationStatus::Rejected);
        assert!(review.primary_actions_enabled());
        assert!(review.remark_editable());
        let submission = review.begin_submit(ReviewAction::Approve, "documents re-checked").unwrap();
        assert_eq!(submission.target, VerificationStatus::Verified);
    }
}
