use contracts::enums::RecordStatus;
use contracts::shared::RecordId;
use contracts::system::users::UserDto;
use leptos::prelude::*;

use crate::shared::optimistic::{ToggleTracker, Toggleable};
use crate::shared::paged_list::{PagedListState, StatusFilter};

/// The users list has no status filter
pub type UsersListState = PagedListState<UserDto, ()>;

impl Toggleable for UserDto {
    type Value = RecordStatus;

    fn row_id(&self) -> &RecordId {
        &self.id
    }

    fn toggle_value(&self) -> RecordStatus {
        self.status
    }

    fn set_toggle_value(&mut self, value: RecordStatus) {
        self.status = value;
    }

    fn flipped(value: &RecordStatus) -> RecordStatus {
        value.toggled()
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(PagedListState::new(StatusFilter::All))
}

pub fn create_toggles() -> RwSignal<ToggleTracker> {
    RwSignal::new(ToggleTracker::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::optimistic::ToggleState;

    #[test]
    fn failed_status_patch_restores_row() {
        let mut rows = vec![UserDto {
            id: "u1".into(),
            status: RecordStatus::Active,
            ..Default::default()
        }];
        let mut tracker = ToggleTracker::new();
        let pending = tracker.begin(&mut rows, &"u1".into()).unwrap();
        assert_eq!(pending.next, RecordStatus::Inactive);
        assert_eq!(rows[0].status, RecordStatus::Inactive);

        tracker.roll_back(&mut rows, &pending);
        assert_eq!(rows[0].status, RecordStatus::Active);
        assert_eq!(tracker.state(&"u1".into()), ToggleState::RolledBack);
    }
}
