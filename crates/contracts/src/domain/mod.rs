pub mod a001_consultant;
pub mod a002_vehicle;
pub mod a003_tier_plan;
pub mod a004_store_theme;
pub mod a005_store_template;
pub mod a006_vehicle_image_key;
pub mod a007_inspection_badge;
