pub mod aggregate;

pub use aggregate::{AllowedTierDto, StoreThemeDto, StoreThemeFields, DEFAULT_THEME_SCHEMA, THEME_TYPE};
