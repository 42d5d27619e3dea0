pub mod aggregate;

pub use aggregate::{StoreTemplateDto, StoreTemplateFields};
