//! Tab components of the vehicle moderation screen

mod overview;
mod sections;

pub use overview::OverviewTab;
pub use sections::SectionTab;
