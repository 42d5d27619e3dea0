use contracts::domain::a001_consultant::{ConsultantDto, ConsultantListQuery};
use contracts::enums::{RecordStatus, VerificationStatus};
use contracts::shared::RecordId;
use leptos::prelude::*;

use crate::shared::optimistic::{ToggleTracker, Toggleable};
use crate::shared::paged_list::{PageRequest, PagedListState, StatusFilter};

pub type ConsultantListState = PagedListState<ConsultantDto, VerificationStatus>;

/// The five consultant tables share one page; they differ in the fixed
/// filter and in whether the filter and search box are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsultantView {
    #[default]
    All,
    Pending,
    RequestChanges,
    Active,
    Rejected,
}

impl ConsultantView {
    pub fn from_tab_key(key: &str) -> Option<Self> {
        match key {
            "a001_consultant_all" => Some(ConsultantView::All),
            "a001_consultant_pending" => Some(ConsultantView::Pending),
            "a001_consultant_request_changes" => Some(ConsultantView::RequestChanges),
            "a001_consultant_active" => Some(ConsultantView::Active),
            "a001_consultant_rejected" => Some(ConsultantView::Rejected),
            _ => None,
        }
    }

    pub fn tab_key(self) -> &'static str {
        match self {
            ConsultantView::All => "a001_consultant_all",
            ConsultantView::Pending => "a001_consultant_pending",
            ConsultantView::RequestChanges => "a001_consultant_request_changes",
            ConsultantView::Active => "a001_consultant_active",
            ConsultantView::Rejected => "a001_consultant_rejected",
        }
    }

    pub fn page_id(self) -> &'static str {
        match self {
            ConsultantView::All => "a001_consultant_all--list",
            ConsultantView::Pending => "a001_consultant_pending--list",
            ConsultantView::RequestChanges => "a001_consultant_request_changes--list",
            ConsultantView::Active => "a001_consultant_active--list",
            ConsultantView::Rejected => "a001_consultant_rejected--list",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConsultantView::All => "All Consultants",
            ConsultantView::Pending => "Pending Verification",
            ConsultantView::RequestChanges => "Change Requests",
            ConsultantView::Active => "Active Consultants",
            ConsultantView::Rejected => "Suspended Consultants",
        }
    }

    pub fn initial_filter(self) -> StatusFilter<VerificationStatus> {
        match self {
            ConsultantView::All => StatusFilter::All,
            ConsultantView::Pending => StatusFilter::Only(VerificationStatus::Requested),
            ConsultantView::RequestChanges => StatusFilter::Only(VerificationStatus::RequestChanges),
            ConsultantView::Active => StatusFilter::Only(VerificationStatus::Verified),
            ConsultantView::Rejected => StatusFilter::Only(VerificationStatus::Rejected),
        }
    }

    /// Only the "all" table lets the admin pick a status; every table searches
    pub fn has_status_picker(self) -> bool {
        matches!(self, ConsultantView::All)
    }

    /// Dropdown value matching the fixed filter ("" stands for ALL)
    pub fn initial_status_code(self) -> String {
        match self.initial_filter() {
            StatusFilter::All => String::new(),
            StatusFilter::Only(status) => status.code().to_string(),
        }
    }
}

/// Query for one page request
pub fn list_query(request: PageRequest<VerificationStatus>) -> ConsultantListQuery {
    ConsultantListQuery {
        page_no: request.page,
        verification_status: request.filter.param(),
        search_text: request.search,
    }
}

/// Filter picked in the status dropdown; an unknown code means ALL
pub fn filter_from_code(code: &str) -> StatusFilter<VerificationStatus> {
    match VerificationStatus::from_code(code) {
        Some(status) => StatusFilter::Only(status),
        None => StatusFilter::All,
    }
}

/// Applies a dropdown pick. Views without a picker keep their fixed filter.
pub fn apply_status_choice(view: ConsultantView, code: &str, state: &mut ConsultantListState) -> bool {
    if !view.has_status_picker() {
        return false;
    }
    state.set_filter(filter_from_code(code))
}

impl Toggleable for ConsultantDto {
    type Value = RecordStatus;

    fn row_id(&self) -> &RecordId {
        &self.id
    }

    fn toggle_value(&self) -> RecordStatus {
        self.status.unwrap_or(RecordStatus::Inactive)
    }

    fn set_toggle_value(&mut self, value: RecordStatus) {
        self.status = Some(value);
    }

    fn flipped(value: &RecordStatus) -> RecordStatus {
        value.toggled()
    }
}

pub fn create_state(view: ConsultantView) -> RwSignal<ConsultantListState> {
    RwSignal::new(PagedListState::new(view.initial_filter()))
}

pub fn create_toggles() -> RwSignal<ToggleTracker> {
    RwSignal::new(ToggleTracker::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{decode_page, Page};

    #[test]
    fn tab_keys_round_trip() {
        for view in [
            ConsultantView::All,
            ConsultantView::Pending,
            ConsultantView::RequestChanges,
            ConsultantView::Active,
            ConsultantView::Rejected,
        ] {
            assert_eq!(ConsultantView::from_tab_key(view.tab_key()), Some(view));
        }
        assert_eq!(ConsultantView::from_tab_key("a001_consultant_subscriptions"), None);
    }

    #[test]
    fn all_view_omits_the_status_parameter() {
        let mut state = ConsultantListState::new(ConsultantView::All.initial_filter());
        state.set_search("  acme ");
        let query = list_query(state.begin_fetch());
        assert_eq!(query.verification_status, None);
        assert_eq!(query.search_text.as_deref(), Some("acme"));
    }

    #[test]
    fn changing_the_filter_restarts_at_page_one() {
        let mut state = ConsultantListState::new(StatusFilter::All);
        let first = state.begin_fetch();
        let page: Page<ConsultantDto> = decode_page(
            r#"{"data":[],"pageResponse":{"currentPage":1,"totalPages":4,"totalElements":40}}"#,
        )
        .unwrap();
        state.apply_page(first.request_id, page);
        state.go_to_page(3);

        assert!(state.set_filter(filter_from_code("REJECTED")));
        assert_eq!(state.page, 1);
        assert_eq!(
            list_query(state.begin_fetch()).verification_status,
            Some(VerificationStatus::Rejected)
        );
    }

    #[test]
    fn pending_page_shows_the_example_row() {
        let mut state = create_state_plain(ConsultantView::Pending);
        let request = state.begin_fetch();
        assert_eq!(
            list_query(request.clone()).verification_status,
            Some(VerificationStatus::Requested)
        );

        let page: Page<ConsultantDto> = decode_page(
            r#"{"data":[{"id":"c1","consultationName":"Acme","city":"Pune","createdAt":"2024-01-01"}],
                "pageResponse":{"currentPage":1,"totalPages":3,"totalElements":25}}"#,
        )
        .unwrap();
        state.apply_page(request.request_id, page);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].display_name(), "Acme");
        assert_eq!(state.items[0].city.as_deref(), Some("Pune"));
        assert_eq!(state.page_label(), "Page 1 of 3");
        assert!(state.has_next());
        assert!(!state.has_prev());
    }

    #[test]
    fn missing_status_toggles_to_active() {
        let row = ConsultantDto::default();
        assert_eq!(ConsultantDto::flipped(&row.toggle_value()), RecordStatus::Active);
    }

    #[test]
    fn fixed_views_keep_their_filter_when_the_picker_mounts() {
        let owner = Owner::new();
        owner.set();
        for view in [
            ConsultantView::Pending,
            ConsultantView::RequestChanges,
            ConsultantView::Active,
            ConsultantView::Rejected,
        ] {
            let state = create_state(view);
            let status_code = RwSignal::new(view.initial_status_code());
            let changed = state.try_update(|s| apply_status_choice(view, &status_code.get_untracked(), s));
            assert_eq!(changed, Some(false));
            assert_eq!(state.with_untracked(|s| s.filter), view.initial_filter());

            // a stale "" must not widen a fixed view either
            status_code.set(String::new());
            state.update(|s| {
                apply_status_choice(view, &status_code.get_untracked(), s);
            });
            let query = state.with_untracked(|s| list_query(s.clone().begin_fetch()));
            assert!(query.verification_status.is_some());
        }
    }

    #[test]
    fn all_view_follows_the_picker() {
        let owner = Owner::new();
        owner.set();
        let view = ConsultantView::All;
        let state = create_state(view);
        let status_code = RwSignal::new(view.initial_status_code());
        assert_eq!(status_code.get_untracked(), "");

        status_code.set("REQUEST_CHANGES".into());
        let changed = state.try_update(|s| apply_status_choice(view, &status_code.get_untracked(), s));
        assert_eq!(changed, Some(true));
        assert_eq!(
            state.with_untracked(|s| s.filter),
            StatusFilter::Only(VerificationStatus::RequestChanges)
        );
    }

    #[test]
    fn only_the_all_view_has_a_status_picker() {
        assert!(ConsultantView::All.has_status_picker());
        assert!(!ConsultantView::Pending.has_status_picker());
        assert_eq!(ConsultantView::Pending.initial_status_code(), "REQUESTED");
        assert_eq!(ConsultantView::Active.initial_status_code(), "VERIFIED");
    }

    fn create_state_plain(view: ConsultantView) -> ConsultantListState {
        PagedListState::new(view.initial_filter())
    }
}
