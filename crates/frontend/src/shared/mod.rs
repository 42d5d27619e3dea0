pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dialogs;
pub mod http;
pub mod icons;
pub mod labels;
pub mod list_utils;
pub mod modal_frame;
pub mod notifications;
pub mod optimistic;
pub mod page_frame;
pub mod page_standard;
pub mod paged_list;
pub mod review;
pub mod row_editor;
pub mod tab_cache;
pub mod upload;
