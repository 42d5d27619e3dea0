pub mod detail_field;
pub mod page_header;
pub mod pagination_controls;
pub mod status_badge;

pub use detail_field::{DetailField, FileLink};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use status_badge::{Badge, RecordStatusBadge, VerificationBadge};
