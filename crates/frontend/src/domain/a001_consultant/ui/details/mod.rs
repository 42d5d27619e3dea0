//! Consultant review screen (MVVM)
//!
//! - view_model.rs: state, lazy tab loading and review commands
//! - page.rs: header, tab bar and tab routing
//! - tabs/: one component per tab

mod page;
mod tabs;
mod view_model;

pub use page::ConsultantDetail;
