pub mod aggregate;

pub use aggregate::{
    OwnerDto, VehicleAddressDto, VehicleDocumentDto, VehicleDto, VehicleExtraDetailDto,
    VehicleImageDto, VehicleListQuery, VehicleStepStatusDto, VehicleVerifyDto,
};
