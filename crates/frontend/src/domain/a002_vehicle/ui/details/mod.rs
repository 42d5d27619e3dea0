//! Vehicle moderation screen (MVVM)

mod page;
mod tabs;
mod view_model;

pub use page::VehicleDetail;
