//! Tab management
//!
//! - `page`: TabPage wrapper that keeps a tab mounted and hides it when inactive
//! - `registry`: tab key → view
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, pick_identifier, tab_label_for_key};
