use contracts::domain::a002_vehicle::{VehicleDto, VehicleListQuery};
use contracts::enums::VerificationStatus;
use leptos::prelude::*;

use crate::shared::list_utils::{any_contains, filter_list, Searchable};
use crate::shared::paged_list::{PageRequest, PagedListState, StatusFilter};

pub type VehicleListState = PagedListState<VehicleDto, VerificationStatus>;

/// The vehicle tables: one open table plus four fixed moderation queues.
/// "Sold" is the verified queue narrowed to sold listings on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleView {
    #[default]
    All,
    Live,
    Drafts,
    Flagged,
    Sold,
}

impl VehicleView {
    pub fn from_tab_key(key: &str) -> Option<Self> {
        match key {
            "a002_vehicle" => Some(VehicleView::All),
            "a002_vehicle_live" => Some(VehicleView::Live),
            "a002_vehicle_drafts" => Some(VehicleView::Drafts),
            "a002_vehicle_flagged" => Some(VehicleView::Flagged),
            "a002_vehicle_sold" => Some(VehicleView::Sold),
            _ => None,
        }
    }

    pub fn tab_key(self) -> &'static str {
        match self {
            VehicleView::All => "a002_vehicle",
            VehicleView::Live => "a002_vehicle_live",
            VehicleView::Drafts => "a002_vehicle_drafts",
            VehicleView::Flagged => "a002_vehicle_flagged",
            VehicleView::Sold => "a002_vehicle_sold",
        }
    }

    pub fn page_id(self) -> &'static str {
        match self {
            VehicleView::All => "a002_vehicle--list",
            VehicleView::Live => "a002_vehicle_live--list",
            VehicleView::Drafts => "a002_vehicle_drafts--list",
            VehicleView::Flagged => "a002_vehicle_flagged--list",
            VehicleView::Sold => "a002_vehicle_sold--list",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            VehicleView::All => "Vehicles",
            VehicleView::Live => "Live Vehicles",
            VehicleView::Drafts => "Requested Vehicles",
            VehicleView::Flagged => "Flagged Vehicles",
            VehicleView::Sold => "Sold Vehicles",
        }
    }

    pub fn initial_filter(self) -> StatusFilter<VerificationStatus> {
        match self {
            VehicleView::All => StatusFilter::All,
            VehicleView::Live | VehicleView::Sold => StatusFilter::Only(VerificationStatus::Verified),
            VehicleView::Drafts => StatusFilter::Only(VerificationStatus::Requested),
            VehicleView::Flagged => StatusFilter::Only(VerificationStatus::Rejected),
        }
    }

    pub fn has_status_picker(self) -> bool {
        matches!(self, VehicleView::All)
    }

    /// Row kept by this table before the search box applies
    pub fn keeps(self, row: &VehicleDto) -> bool {
        match self {
            VehicleView::Sold => row.is_vehicle_sold,
            _ => true,
        }
    }
}

/// Rows shown for the loaded page: the view's own narrowing, then the search text
pub fn visible_rows(view: VehicleView, items: &[VehicleDto], needle: &str) -> Vec<VehicleDto> {
    let kept: Vec<VehicleDto> = items.iter().filter(|v| view.keeps(v)).cloned().collect();
    filter_list(&kept, needle)
}

/// Applies a dropdown pick. Fixed tables keep their filter.
pub fn apply_status_choice(view: VehicleView, code: &str, state: &mut VehicleListState) -> bool {
    view.has_status_picker() && state.set_filter(filter_from_code(code))
}

/// Search over the loaded page: maker, model, owner and vehicle type
impl Searchable for VehicleDto {
    fn matches_filter(&self, needle: &str) -> bool {
        let owner = self.owner_name();
        any_contains(
            [
                self.maker_name.as_deref(),
                self.model_name.as_deref(),
                self.vehicle_type.as_deref(),
                Some(owner.as_str()),
            ],
            needle,
        )
    }
}

/// The vehicle endpoint has no text search; only page and status are sent
pub fn list_query(request: PageRequest<VerificationStatus>) -> VehicleListQuery {
    VehicleListQuery {
        page_no: request.page,
        verification_status: request.filter.param(),
    }
}

pub fn filter_from_code(code: &str) -> StatusFilter<VerificationStatus> {
    VerificationStatus::from_code(code)
        .map(StatusFilter::Only)
        .unwrap_or(StatusFilter::All)
}

pub fn create_state(view: VehicleView) -> RwSignal<VehicleListState> {
    RwSignal::new(PagedListState::new(view.initial_filter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_vehicle::OwnerDto;

    fn vehicle(id: &str, maker: &str, model: &str, owner: &str) -> VehicleDto {
        VehicleDto {
            id: id.into(),
            maker_name: Some(maker.into()),
            model_name: Some(model.into()),
            vehicle_type: Some("FOUR_WHEELER".into()),
            user_master: Some(OwnerDto {
                firstname: Some(owner.into()),
                lastname: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn search_covers_maker_model_and_owner() {
        let rows = vec![
            vehicle("1", "Maruti", "Swift", "Asha"),
            vehicle("2", "Honda", "City", "Ravi"),
        ];
        assert_eq!(filter_list(&rows, "swift").len(), 1);
        assert_eq!(filter_list(&rows, "ravi")[0].id.as_str(), "2");
        assert_eq!(filter_list(&rows, "four_wheeler").len(), 2);
    }

    #[test]
    fn query_never_carries_search_text() {
        let mut state = VehicleListState::new(filter_from_code("VERIFIED"));
        state.set_search("swift");
        let query = list_query(state.begin_fetch());
        assert_eq!(query.verification_status, Some(VerificationStatus::Verified));
        assert_eq!(query.page_no, 1);
    }

    #[test]
    fn unknown_code_means_all() {
        assert_eq!(filter_from_code(""), StatusFilter::All);
    }

    #[test]
    fn tab_keys_round_trip() {
        for view in [
            VehicleView::All,
            VehicleView::Live,
            VehicleView::Drafts,
            VehicleView::Flagged,
            VehicleView::Sold,
        ] {
            assert_eq!(VehicleView::from_tab_key(view.tab_key()), Some(view));
        }
        assert_eq!(VehicleView::from_tab_key("a002_vehicle_detail_7"), None);
    }

    #[test]
    fn each_queue_asks_for_its_status() {
        let status_of = |view: VehicleView| {
            let mut state = VehicleListState::new(view.initial_filter());
            list_query(state.begin_fetch()).verification_status
        };
        assert_eq!(status_of(VehicleView::All), None);
        assert_eq!(status_of(VehicleView::Live), Some(VerificationStatus::Verified));
        assert_eq!(status_of(VehicleView::Drafts), Some(VerificationStatus::Requested));
        assert_eq!(status_of(VehicleView::Flagged), Some(VerificationStatus::Rejected));
        assert_eq!(status_of(VehicleView::Sold), Some(VerificationStatus::Verified));
    }

    #[test]
    fn sold_table_keeps_only_sold_rows() {
        let mut sold = vehicle("1", "Maruti", "Swift", "Asha");
        sold.is_vehicle_sold = true;
        let unsold = vehicle("2", "Maruti", "Baleno", "Ravi");
        let rows = vec![sold, unsold];

        let shown = visible_rows(VehicleView::Sold, &rows, "");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id.as_str(), "1");
        assert!(visible_rows(VehicleView::Sold, &rows, "baleno").is_empty());
        assert_eq!(visible_rows(VehicleView::Live, &rows, "maruti").len(), 2);
    }

    #[test]
    fn fixed_queues_ignore_the_picker() {
        let mut state = VehicleListState::new(VehicleView::Flagged.initial_filter());
        assert!(!apply_status_choice(VehicleView::Flagged, "", &mut state));
        assert_eq!(state.filter, StatusFilter::Only(VerificationStatus::Rejected));

        let mut open = VehicleListState::new(VehicleView::All.initial_filter());
        assert!(apply_status_choice(VehicleView::All, "REQUESTED", &mut open));
        assert_eq!(open.filter, StatusFilter::Only(VerificationStatus::Requested));
    }
}
