//! Tier plan detail: header facts plus the limit and feature editors
//!
//! Rows are saved or deleted one at a time; there is no bulk save.

mod page;
mod view_model;

pub use page::TierPlanDetail;
