use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;
use crate::shared::RecordId;

/// Platform user (buyer, seller or consultant owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: RecordId,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub user_role: Option<String>,
    pub status: RecordStatus,
}

impl UserDto {
    pub fn full_name(&self) -> String {
        let name = [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            "-".to_string()
        } else {
            name
        }
    }

    pub fn phone(&self) -> Option<String> {
        let number = self.phone_number.as_deref().filter(|n| !n.is_empty())?;
        Some(match self.country_code.as_deref().filter(|c| !c.is_empty()) {
            Some(code) => format!("{} {}", code, number),
            None => number.to_string(),
        })
    }
}

/// Profile details of `GET /user/meta-data/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserMetaData {
    pub profession: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Body of `PATCH /user/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserStatusDto {
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_defaults_to_active() {
        let user: UserDto = serde_json::from_str(r#"{"id":5,"firstname":"Neha"}"#).unwrap();
        assert_eq!(user.status, RecordStatus::Active);
        assert_eq!(user.full_name(), "Neha");
        assert_eq!(user.phone(), None);
    }

    #[test]
    fn phone_includes_country_code() {
        let user = UserDto {
            country_code: Some("+91".into()),
            phone_number: Some("9800000000".into()),
            ..Default::default()
        };
        assert_eq!(user.phone().as_deref(), Some("+91 9800000000"));
    }
}
