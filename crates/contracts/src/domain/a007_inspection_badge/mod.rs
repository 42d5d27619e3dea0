pub mod aggregate;

pub use aggregate::{badge_rows, upsert_badge, BadgeRow, InspectionBadgeDto};
