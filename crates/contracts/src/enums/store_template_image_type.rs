use serde::{Deserialize, Serialize};

/// Slot a store template image fills on the consultant storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreTemplateImageType {
    #[default]
    Header,
    Mission,
}

impl StoreTemplateImageType {
    pub fn code(&self) -> &'static str {
        match self {
            StoreTemplateImageType::Header => "HEADER",
            StoreTemplateImageType::Mission => "MISSION",
        }
    }

    pub fn all() -> Vec<StoreTemplateImageType> {
        vec![StoreTemplateImageType::Header, StoreTemplateImageType::Mission]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HEADER" => Some(StoreTemplateImageType::Header),
            "MISSION" => Some(StoreTemplateImageType::Mission),
            _ => None,
        }
    }
}
