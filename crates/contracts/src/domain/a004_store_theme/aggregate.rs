use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;
use crate::shared::RecordId;

/// Only store type themes are authored for
pub const THEME_TYPE: &str = "CONSULTATION_STORE";

/// Sent when the schema field is left blank
pub const DEFAULT_THEME_SCHEMA: &str = "chacker";

/// Tier a theme or template is offered to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AllowedTierDto {
    pub id: RecordId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreThemeDto {
    pub id: RecordId,
    pub theme_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub theme_type: Option<String>,
    pub schema: Option<String>,
    pub status: Option<RecordStatus>,
    pub thumbnail_url: Option<String>,
    pub preview_url: Option<String>,
    pub allowed_tiers: Vec<AllowedTierDto>,
}

impl StoreThemeDto {
    pub fn allowed_tier_ids(&self) -> Vec<RecordId> {
        self.allowed_tiers.iter().map(|t| t.id.clone()).collect()
    }

    /// Comma-separated tier titles, `-` when none
    pub fn allowed_tier_titles(&self) -> String {
        if self.allowed_tiers.is_empty() {
            return "-".to_string();
        }
        self.allowed_tiers
            .iter()
            .map(|t| t.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Schema pretty-printed when it is JSON, verbatim otherwise
    pub fn schema_display(&self) -> String {
        let raw = self.schema.as_deref().unwrap_or_default();
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) if value.is_object() || value.is_array() => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string())
            }
            _ => raw.to_string(),
        }
    }
}

/// Text parts of the multipart body of `POST`/`PUT /store-theme`.
/// Thumbnail and preview files are appended by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreThemeFields {
    pub theme_id: String,
    pub name: String,
    pub schema: String,
    pub status: RecordStatus,
    pub allowed_tier_ids: Vec<RecordId>,
}

impl StoreThemeFields {
    pub fn from_theme(theme: &StoreThemeDto) -> Self {
        Self {
            theme_id: theme.theme_id.clone().unwrap_or_default(),
            name: theme.name.clone(),
            schema: theme.schema.clone().unwrap_or_default(),
            status: theme.status.unwrap_or_default(),
            allowed_tier_ids: theme.allowed_tier_ids(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Theme name is required".into());
        }
        if self.allowed_tier_ids.is_empty() {
            return Err("Please select at least one tier".into());
        }
        Ok(())
    }

    /// Ordered form parts; `allowedTierIds` repeats once per tier.
    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        let schema = if self.schema.trim().is_empty() {
            DEFAULT_THEME_SCHEMA.to_string()
        } else {
            self.schema.clone()
        };
        let mut parts = vec![
            ("themeId", self.theme_id.clone()),
            ("name", self.name.clone()),
            ("type", THEME_TYPE.to_string()),
            ("status", self.status.code().to_string()),
            ("schema", schema),
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
    fn blank_schema_falls_back_to_default() {
        let fields = StoreThemeFields {
            theme_id: "t-1".into(),
            name: "Classic".into(),
            allowed_tier_ids: vec![RecordId::new("1"), RecordId::new("2")],
            ..Default::default()
        };
        let parts = fields.form_parts();
        assert!(parts.contains(&("schema", DEFAULT_THEME_SCHEMA.to_string())));
        assert!(parts.contains(&("type", THEME_TYPE.to_string())));
        let tiers: Vec<_> = parts.iter().filter(|(k, _)| *k == "allowedTierIds").collect();
        assert_eq!(tiers.len(), 2);
    }

    #[test]
    fn at_least_one_tier_required() {
        let fields = StoreThemeFields {
            name: "Classic".into(),
            ..Default::default()
        };
        assert!(fields.validate().is_err());
    }

    #[test]
    fn schema_is_pretty_printed_when_json() {
        let theme = StoreThemeDto {
            schema: Some(r#"{"color":"red"}"#.into()),
            ..Default::default()
        };
        assert!(theme.schema_display().contains("\n"));

        let plain = StoreThemeDto {
            schema: Some("chacker".into()),
            ..Default::default()
        };
        assert_eq!(plain.schema_display(), "chacker");
    }
}
