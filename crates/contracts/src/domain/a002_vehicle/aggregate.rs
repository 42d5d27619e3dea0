use serde::{Deserialize, Serialize};

use crate::enums::VerificationStatus;
use crate::shared::RecordId;

// ============================================================================
// Read models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OwnerDto {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl OwnerDto {
    pub fn full_name(&self) -> String {
        [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Vehicle listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleDto {
    pub id: RecordId,
    pub maker_name: Option<String>,
    pub model_name: Option<String>,
    pub variant_name: Option<String>,
    pub year_of_mfg: Option<i32>,
    pub vehicle_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub km_driven: Option<u64>,
    pub ownership: Option<String>,
    pub colour: Option<String>,
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub verification_status: Option<VerificationStatus>,
    pub inspection_status: Option<String>,
    pub is_vehicle_sold: bool,
    pub user_master: Option<OwnerDto>,
}

impl VehicleDto {
    /// "Maker Model Variant", skipping blanks
    pub fn title(&self) -> String {
        [
            self.maker_name.as_deref(),
            self.model_name.as_deref(),
            self.variant_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn owner_name(&self) -> String {
        self.user_master
            .as_ref()
            .map(OwnerDto::full_name)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleAddressDto {
    pub address: Option<String>,
    pub city_name: Option<String>,
    pub state_name: Option<String>,
    pub country_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleDocumentDto {
    pub reg_number: Option<String>,
    pub rto_passing: Option<String>,
    pub insurance: Option<String>,
    pub type_of_insurance: Option<String>,
    pub insurance_expiry_date: Option<String>,
    pub puc_expiry_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleExtraDetailDto {
    pub detail_key: Option<String>,
    pub detail_value: Option<String>,
}

/// Completion flags of the seller's listing wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleStepStatusDto {
    pub basic_detail_status: Option<String>,
    pub address_status: Option<String>,
    pub document_status: Option<String>,
    pub extra_detail_status: Option<String>,
    pub basic_images_status: Option<String>,
}

impl VehicleStepStatusDto {
    /// (label, status) pairs in wizard order
    pub fn steps(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("Basic Details", self.basic_detail_status.as_deref()),
            ("Address", self.address_status.as_deref()),
            ("Documents", self.document_status.as_deref()),
            ("Extra Details", self.extra_detail_status.as_deref()),
            ("Images", self.basic_images_status.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleImageDto {
    pub id: RecordId,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
}

// ============================================================================
// Queries and commands
// ============================================================================

/// Query of `GET /vehicle`
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListQuery {
    pub page_no: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
}

/// Body of `PATCH /vehicle/verify/{id}`; the backend names the note `remarks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleVerifyDto {
    pub verification_status: VerificationStatus,
    pub remarks: String,
}

impl VehicleVerifyDto {
    pub fn verified(remarks: impl Into<String>) -> Self {
        Self {
            verification_status: VerificationStatus::Verified,
            remarks: remarks.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_owner_skip_missing_parts() {
        let vehicle: VehicleDto = serde_json::from_str(
            r#"{"id":12,"makerName":"Maruti","modelName":"Swift",
                "userMaster":{"firstname":"Asha","lastname":null}}"#,
        )
        .unwrap();
        assert_eq!(vehicle.id.as_str(), "12");
        assert_eq!(vehicle.title(), "Maruti Swift");
        assert_eq!(vehicle.owner_name(), "Asha");
        assert!(!vehicle.is_vehicle_sold);
    }

    #[test]
    fn sold_flag_reads_from_camel_case() {
        let vehicle: VehicleDto =
            serde_json::from_str(r#"{"id":"v7","verificationStatus":"VERIFIED","isVehicleSold":true}"#).unwrap();
        assert!(vehicle.is_vehicle_sold);
        assert_eq!(vehicle.verification_status, Some(VerificationStatus::Verified));
    }

    #[test]
    fn verify_body_sends_remarks_field() {
        let json = serde_json::to_value(VehicleVerifyDto::verified("docs ok")).unwrap();
        assert_eq!(json["verificationStatus"], "VERIFIED");
        assert_eq!(json["remarks"], "docs ok");
    }
}
