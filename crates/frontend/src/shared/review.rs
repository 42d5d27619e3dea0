//! Admin review workflow shared by consultant and vehicle detail views.

use contracts::enums::VerificationStatus;
use thiserror::Error;

use super::notifications::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
    RequestChanges,
    /// Any target, only after a terminal decision
    ChangeStatus(VerificationStatus),
}

impl ReviewAction {
    pub fn target(self) -> VerificationStatus {
        match self {
            ReviewAction::Approve => VerificationStatus::Verified,
            ReviewAction::Reject => VerificationStatus::Rejected,
            ReviewAction::RequestChanges => VerificationStatus::RequestChanges,
            ReviewAction::ChangeStatus(target) => target,
        }
    }

    fn is_primary(self) -> bool {
        !matches!(self, ReviewAction::ChangeStatus(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewRejected {
    #[error("Another action is in progress")]
    Busy,
    #[error("This record has already been reviewed")]
    Locked,
    #[error("Status can only be changed after a final decision")]
    NotAvailable,
    #[error("Admin remark is required")]
    EmptyRemark,
}

/// What to send once an action passes the local checks
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    pub target: VerificationStatus,
    pub remark: String,
}

/// Statuses that close the primary actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    /// VERIFIED and REJECTED
    #[default]
    Terminal,
    /// VERIFIED only; a rejected record can still be approved
    VerifiedOnly,
}

impl LockPolicy {
    fn locks(self, status: VerificationStatus) -> bool {
        match self {
            LockPolicy::Terminal => status.is_terminal(),
            LockPolicy::VerifiedOnly => status == VerificationStatus::Verified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewState {
    pub status: VerificationStatus,
    pub submitting: bool,
    pub policy: LockPolicy,
}

impl ReviewState {
    pub fn new(status: VerificationStatus) -> Self {
        Self::with_policy(status, LockPolicy::Terminal)
    }

    pub fn with_policy(status: VerificationStatus, policy: LockPolicy) -> Self {
        Self {
            status,
            submitting: false,
            policy,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.policy.locks(self.status)
    }

    pub fn remark_editable(&self) -> bool {
        !self.is_locked() && !self.submitting
    }

    pub fn primary_actions_enabled(&self) -> bool {
        !self.is_locked() && !self.submitting
    }

    pub fn change_status_enabled(&self) -> bool {
        self.is_locked() && !self.submitting
    }

    pub fn begin_submit(
        &mut self,
        action: ReviewAction,
        remark: &str,
    ) -> Result<ReviewSubmission, ReviewRejected> {
        if self.submitting {
            return Err(ReviewRejected::Busy);
        }
        if action.is_primary() && self.is_locked() {
            return Err(ReviewRejected::Locked);
        }
        if !action.is_primary() && !self.is_locked() {
            return Err(ReviewRejected::NotAvailable);
        }
        let remark = remark.trim();
        if remark.is_empty() {
            return Err(ReviewRejected::EmptyRemark);
        }
        self.submitting = true;
        Ok(ReviewSubmission {
            target: action.target(),
            remark: remark.to_string(),
        })
    }

    pub fn finish_submit(&mut self, ok: bool, target: VerificationStatus) {
        self.submitting = false;
        if ok {
            self.status = target;
        }
    }
}

/// Runs the local checks and raises a notification when they fail
pub fn submit_review(
    state: &mut ReviewState,
    action: ReviewAction,
    remark: &str,
    notifier: &impl Notify,
) -> Option<ReviewSubmission> {
    match state.begin_submit(action, remark) {
        Ok(submission) => Some(submission),
        Err(rejected) => {
            log::debug!("review {:?} rejected: {}", action, rejected);
            notifier.error(rejected.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::testing::RecordingNotifier;

    #[test]
    fn blank_remark_issues_nothing() {
        let notifier = RecordingNotifier::default();
        let mut state = ReviewState::new(VerificationStatus::Requested);

        assert!(submit_review(&mut state, ReviewAction::Approve, "   \n", &notifier).is_none());
        assert!(!state.submitting);
        assert_eq!(notifier.errors(), vec!["Admin remark is required".to_string()]);
    }

    #[test]
    fn primary_actions_map_to_targets() {
        let mut state = ReviewState::new(VerificationStatus::Requested);
        let sub = state.begin_submit(ReviewAction::RequestChanges, "  add GST  ").unwrap();
        assert_eq!(sub.target, VerificationStatus::RequestChanges);
        assert_eq!(sub.remark, "add GST");
        assert!(!state.primary_actions_enabled());
        assert_eq!(state.begin_submit(ReviewAction::Reject, "x"), Err(ReviewRejected::Busy));

        state.finish_submit(true, sub.target);
        assert_eq!(state.status, VerificationStatus::RequestChanges);
        assert!(state.primary_actions_enabled());
    }

    #[test]
    fn terminal_status_locks_primary_actions() {
        for status in [VerificationStatus::Verified, VerificationStatus::Rejected] {
            let mut state = ReviewState::new(status);
            assert!(!state.remark_editable());
            assert!(!state.primary_actions_enabled());
            assert!(state.change_status_enabled());
            assert_eq!(state.begin_submit(ReviewAction::Approve, "ok"), Err(ReviewRejected::Locked));

            let sub = state
                .begin_submit(ReviewAction::ChangeStatus(VerificationStatus::RequestChanges), "reopen")
                .unwrap();
            assert_eq!(sub.target, VerificationStatus::RequestChanges);
            assert!(!state.change_status_enabled());
        }
    }

    #[test]
    fn verified_only_policy_reopens_rejected() {
        let mut state = ReviewState::with_policy(VerificationStatus::Rejected, LockPolicy::VerifiedOnly);
        assert!(state.primary_actions_enabled());
        assert!(state.remark_editable());
        let sub = state.begin_submit(ReviewAction::Approve, "documents re-checked").unwrap();
        assert_eq!(sub.target, VerificationStatus::Verified);

        state.finish_submit(true, sub.target);
        assert!(state.is_locked());
        assert_eq!(state.begin_submit(ReviewAction::Approve, "again"), Err(ReviewRejected::Locked));
    }

    #[test]
    fn change_status_needs_final_decision() {
        let mut state = ReviewState::new(VerificationStatus::Requested);
        assert!(!state.change_status_enabled());
        assert_eq!(
            state.begin_submit(ReviewAction::ChangeStatus(VerificationStatus::Verified), "x"),
            Err(ReviewRejected::NotAvailable)
        );
    }

    #[test]
    fn failed_submission_keeps_status() {
        let mut state = ReviewState::new(VerificationStatus::Requested);
        let sub = state.begin_submit(ReviewAction::Approve, "docs fine").unwrap();
        state.finish_submit(false, sub.target);
        assert_eq!(state.status, VerificationStatus::Requested);
        assert!(!state.submitting);
    }
}
