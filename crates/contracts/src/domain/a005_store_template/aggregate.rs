use serde::{Deserialize, Serialize};

use crate::domain::a004_store_theme::AllowedTierDto;
use crate::enums::{RecordStatus, StoreTemplateImageType};
use crate::shared::RecordId;

/// Stock image offered to consultants for a storefront slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreTemplateDto {
    pub id: RecordId,
    pub image_type: Option<StoreTemplateImageType>,
    pub status: Option<RecordStatus>,
    pub is_default: bool,
    pub image_url: Option<String>,
    pub allowed_tier_ids: Vec<RecordId>,
    pub allowed_tiers: Vec<AllowedTierDto>,
}

impl StoreTemplateDto {
    /// Tier ids from whichever of the two shapes the backend sent
    pub fn tier_ids(&self) -> Vec<RecordId> {
        if self.allowed_tiers.is_empty() {
            self.allowed_tier_ids.clone()
        } else {
            self.allowed_tiers.iter().map(|t| t.id.clone()).collect()
        }
    }
}

/// Text parts of the multipart body of `POST`/`PUT /consultation/store-template`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreTemplateFields {
    pub image_type: StoreTemplateImageType,
    pub status: RecordStatus,
    pub is_default: bool,
    pub allowed_tier_ids: Vec<RecordId>,
}

impl StoreTemplateFields {
    pub fn from_template(template: &StoreTemplateDto) -> Self {
        Self {
            image_type: template.image_type.unwrap_or_default(),
            status: template.status.unwrap_or_default(),
            is_default: template.is_default,
            allowed_tier_ids: template.tier_ids(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_tier_ids.is_empty() {
            return Err("Please select at least one tier".into());
        }
        Ok(())
    }

    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = vec![
            ("imageType", self.image_type.code().to_string()),
            ("status", self.status.code().to_string()),
            ("isDefault", self.is_default.to_string()),
        ];
        parts.extend(
            self.allowed_tier_ids
                .iter()
                .map(|id| ("allowedTierIds", id.to_string())),
        );
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ids_prefer_embedded_tiers() {
        let template: StoreTemplateDto = serde_json::from_str(
            r#"{"id":4,"imageType":"MISSION","isDefault":true,
                "allowedTiers":[{"id":1,"title":"Gold"}],"allowedTierIds":[9]}"#,
        )
        .unwrap();
        assert_eq!(template.tier_ids(), vec![RecordId::new("1")]);
        assert_eq!(template.image_type, Some(StoreTemplateImageType::Mission));
    }

    #[test]
    fn form_parts_encode_flag_as_text() {
        let fields = StoreTemplateFields {
            is_default: true,
            allowed_tier_ids: vec![RecordId::new("2")],
            ..Default::default()
        };
        let parts = fields.form_parts();
        assert_eq!(parts[0], ("imageType", "HEADER".to_string()));
        assert!(parts.contains(&("isDefault", "true".to_string())));
        assert!(parts.contains(&("allowedTierIds", "2".to_string())));
    }
}
