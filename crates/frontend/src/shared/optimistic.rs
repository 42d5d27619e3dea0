//! Optimistic row toggles.
//!
//! The flipped value is applied to the local row before the request goes
//! out and restored if the request fails. Each row has its own
//! `Idle -> Pending -> Confirmed | RolledBack` state; a row that is still
//! pending refuses another toggle.

use std::collections::HashMap;
use std::future::Future;

use contracts::shared::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;

use super::http::ApiError;
use super::notifications::{NotificationService, Notify};
use super::paged_list::PagedListState;

/// A table row with one flippable value
pub trait Toggleable {
    type Value: Clone + PartialEq;

    fn row_id(&self) -> &RecordId;
    fn toggle_value(&self) -> Self::Value;
    fn set_toggle_value(&mut self, value: Self::Value);
    fn flipped(value: &Self::Value) -> Self::Value;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Idle,
    Pending,
    Confirmed,
    RolledBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleRejected {
    #[error("row {0} is already being updated")]
    AlreadyPending(RecordId),
    #[error("row {0} is not in the list")]
    UnknownRow(RecordId),
}

/// A toggle applied locally and waiting for the backend
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToggle<V> {
    pub id: RecordId,
    pub previous: V,
    pub next: V,
}

#[derive(Debug, Clone, Default)]
pub struct ToggleTracker {
    states: HashMap<RecordId, ToggleState>,
}

impl ToggleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &RecordId) -> ToggleState {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, id: &RecordId) -> bool {
        self.state(id) == ToggleState::Pending
    }

    /// Flips the row in place and marks it pending
    pub fn begin<T: Toggleable>(
        &mut self,
        rows: &mut [T],
        id: &RecordId,
    ) -> Result<PendingToggle<T::Value>, ToggleRejected> {
        if self.is_pending(id) {
            return Err(ToggleRejected::AlreadyPending(id.clone()));
        }
        let row = rows
            .iter_mut()
            .find(|r| r.row_id() == id)
            .ok_or_else(|| ToggleRejected::UnknownRow(id.clone()))?;

        let previous = row.toggle_value();
        let next = T::flipped(&previous);
        row.set_toggle_value(next.clone());
        self.states.insert(id.clone(), ToggleState::Pending);
        Ok(PendingToggle {
            id: id.clone(),
            previous,
            next,
        })
    }

    pub fn confirm<V>(&mut self, pending: &PendingToggle<V>) {
        self.states.insert(pending.id.clone(), ToggleState::Confirmed);
    }

    /// Restores the pre-toggle value, if the row is still listed
    pub fn roll_back<T: Toggleable>(&mut self, rows: &mut [T], pending: &PendingToggle<T::Value>) {
        if let Some(row) = rows.iter_mut().find(|r| r.row_id() == &pending.id) {
            row.set_toggle_value(pending.previous.clone());
        }
        self.states.insert(pending.id.clone(), ToggleState::RolledBack);
    }
}

/// Flips the row `id` of a paged list, sends the change and settles it.
/// `send` receives the pending toggle; a failure rolls the row back and
/// raises `error_text` unless the backend sent its own message.
pub fn spawn_toggle<T, S, F, Fut, R>(
    list: RwSignal<PagedListState<T, S>>,
    tracker: RwSignal<ToggleTracker>,
    id: RecordId,
    notifier: NotificationService,
    error_text: &'static str,
    send: F,
) where
    T: Toggleable + Send + Sync + 'static,
    T::Value: 'static,
    S: Send + Sync + 'static,
    F: FnOnce(PendingToggle<T::Value>) -> Fut,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
{
    let begun = list
        .try_update(|s| tracker.try_update(|t| t.begin(&mut s.items, &id)))
        .flatten();
    let pending = match begun {
        Some(Ok(pending)) => pending,
        Some(Err(rejected)) => {
            log::warn!("toggle ignored: {}", rejected);
            return;
        }
        None => return,
    };

    let request = send(pending.clone());
    spawn_local(async move {
        match request.await {
            Ok(_) => {
                let _ = tracker.try_update(|t| t.confirm(&pending));
            }
            Err(e) => {
                let _ = list.try_update(|s| {
                    tracker.try_update(|t| t.roll_back(&mut s.items, &pending))
                });
                notifier.error(e.user_message(error_text));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::RecordStatus;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        status: RecordStatus,
    }

    impl Toggleable for Row {
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

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "u1".into(), status: RecordStatus::Active },
            Row { id: "u2".into(), status: RecordStatus::Inactive },
        ]
    }

    #[test]
    fn success_keeps_optimistic_value() {
        let mut rows = rows();
        let mut tracker = ToggleTracker::new();
        let pending = tracker.begin(&mut rows, &"u1".into()).unwrap();
        assert_eq!(pending.next, RecordStatus::Inactive);
        assert_eq!(rows[0].status, RecordStatus::Inactive);

        tracker.confirm(&pending);
        assert_eq!(tracker.state(&"u1".into()), ToggleState::Confirmed);
        assert_eq!(rows[0].status, RecordStatus::Inactive);
    }

    #[test]
    fn failure_restores_previous_value() {
        let mut rows = rows();
        let mut tracker = ToggleTracker::new();
        let pending = tracker.begin(&mut rows, &"u2".into()).unwrap();
        assert_eq!(rows[1].status, RecordStatus::Active);

        tracker.roll_back(&mut rows, &pending);
        assert_eq!(rows[1].status, RecordStatus::Inactive);
        assert_eq!(tracker.state(&"u2".into()), ToggleState::RolledBack);
    }

    #[test]
    fn pending_row_rejects_second_toggle() {
        let mut rows = rows();
        let mut tracker = ToggleTracker::new();
        tracker.begin(&mut rows, &"u1".into()).unwrap();

        let again = tracker.begin(&mut rows, &"u1".into());
        assert_eq!(again, Err(ToggleRejected::AlreadyPending("u1".into())));
        assert_eq!(rows[0].status, RecordStatus::Inactive);

        // other rows are independent
        assert!(tracker.begin(&mut rows, &"u2".into()).is_ok());
    }

    #[test]
    fn unknown_row_is_rejected() {
        let mut rows = rows();
        let mut tracker = ToggleTracker::new();
        assert_eq!(
            tracker.begin(&mut rows, &"zz".into()),
            Err(ToggleRejected::UnknownRow("zz".into()))
        );
        assert_eq!(tracker.state(&"zz".into()), ToggleState::Idle);
    }
}
