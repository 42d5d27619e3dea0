pub mod aggregate;

pub use aggregate::{
    ChangeStatusDto, ChangeTierDto, ConsultantAddressDto, ConsultantDocumentsDto, ConsultantDto,
    ConsultantListQuery, SuspendDto, VerifyConsultationDto,
};
