pub mod envelope;
pub mod record_id;

pub use envelope::{backend_message, decode_data, decode_list, decode_page, Page, PageQuery, PageResponse};
pub use record_id::RecordId;
