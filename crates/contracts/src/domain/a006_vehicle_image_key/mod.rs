pub mod aggregate;

pub use aggregate::{group_by_vehicle_type, ImageKeyGroup, ImageKeyListQuery, VehicleImageKeyDto, VehicleImageKeyPayload};
