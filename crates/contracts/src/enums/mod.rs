pub mod record_status;
pub mod store_template_image_type;
pub mod verification_status;

pub use record_status::RecordStatus;
pub use store_template_image_type::StoreTemplateImageType;
pub use verification_status::VerificationStatus;
