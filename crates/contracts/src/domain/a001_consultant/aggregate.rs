use serde::{Deserialize, Serialize};

use crate::enums::{RecordStatus, VerificationStatus};
use crate::shared::RecordId;

// ============================================================================
// Read models
// ============================================================================

/// Consultant (dealer) as returned by `/consultation/*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultantDto {
    pub id: RecordId,
    pub consultation_name: Option<String>,
    pub owner_name: Option<String>,
    pub company_email: Option<String>,
    pub establishment_year: Option<i32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub vehicle_types: Vec<String>,
    pub services: Vec<String>,
    pub status: Option<RecordStatus>,
    pub verification_status: Option<VerificationStatus>,
    pub admin_remark: Option<String>,
    pub verified_at: Option<String>,
    pub created_at: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub tier_plan_id: Option<RecordId>,
}

impl ConsultantDto {
    /// Business name, falling back to the owner's name
    pub fn display_name(&self) -> String {
        self.consultation_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.owner_name.as_deref())
            .unwrap_or("-")
            .to_string()
    }

    pub fn is_active(&self) -> bool {
        self.status.map(|s| s.is_active()).unwrap_or(false)
    }

    /// Date the consultant counts as joined: verification time if any,
    /// otherwise registration time.
    pub fn joined_at(&self) -> Option<&str> {
        self.verified_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.created_at.as_deref())
    }

    /// A REQUESTED consultant that already carries an admin remark was sent
    /// back once and has re-submitted.
    pub fn is_resubmitted(&self) -> bool {
        self.verification_status == Some(VerificationStatus::Requested)
            && self
                .admin_remark
                .as_deref()
                .map(|r| !r.trim().is_empty())
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultantAddressDto {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<RecordStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultantDocumentsDto {
    pub gst_number: Option<String>,
    pub pan_card_number: Option<String>,
    pub pan_card_front_url: Option<String>,
    pub aadhar_card_number: Option<String>,
    pub aadhar_card_front_url: Option<String>,
    pub aadhar_card_back_url: Option<String>,
    pub status: Option<RecordStatus>,
}

// ============================================================================
// Queries and commands
// ============================================================================

/// Query of `GET /consultation/filter`
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantListQuery {
    pub page_no: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyConsultationDto {
    pub verification_status: VerificationStatus,
    pub admin_remark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatusDto {
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspendDto {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTierDto {
    pub tier_plan_id: RecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_list_row() {
        let row: ConsultantDto = serde_json::from_str(
            r#"{"id":"c1","consultationName":"Acme","city":"Pune","createdAt":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(row.display_name(), "Acme");
        assert_eq!(row.city.as_deref(), Some("Pune"));
        assert_eq!(row.joined_at(), Some("2024-01-01"));
        assert!(!row.is_active());
    }

    #[test]
    fn falls_back_to_owner_name() {
        let row = ConsultantDto {
            owner_name: Some("Ravi".into()),
            ..Default::default()
        };
        assert_eq!(row.display_name(), "Ravi");
    }

    #[test]
    fn resubmitted_needs_requested_status_and_remark() {
        let mut row = ConsultantDto {
            verification_status: Some(VerificationStatus::Requested),
            admin_remark: Some("fix PAN".into()),
            ..Default::default()
        };
        assert!(row.is_resubmitted());
        row.admin_remark = Some("  ".into());
        assert!(!row.is_resubmitted());
        row.admin_remark = Some("fix PAN".into());
        row.verification_status = Some(VerificationStatus::Verified);
        assert!(!row.is_resubmitted());
    }

    #[test]
    fn verify_body_uses_wire_names() {
        let body = VerifyConsultationDto {
            verification_status: VerificationStatus::RequestChanges,
            admin_remark: "Upload GST".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"verificationStatus":"REQUEST_CHANGES","adminRemark":"Upload GST"}"#
        );
    }
}
