pub mod api;
pub mod ui;

pub const IMAGE_KEY_LIST_KEY: &str = "a006_vehicle_image_key";
