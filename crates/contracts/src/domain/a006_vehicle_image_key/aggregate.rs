use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;
use crate::shared::RecordId;

/// Photo slot a seller must (or may) fill for a vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleImageKeyDto {
    pub id: RecordId,
    pub vehicle_type: String,
    pub image_key: String,
    pub required: bool,
    pub display_order: u32,
    pub status: Option<RecordStatus>,
}

/// Body of `POST /vehicle-image-key` and `PUT /vehicle-image-key/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleImageKeyPayload {
    pub vehicle_type: String,
    pub image_key: String,
    pub required: bool,
    pub display_order: u32,
    pub status: RecordStatus,
}

impl VehicleImageKeyPayload {
    /// Blank form for a new key under `vehicle_type`
    pub fn new_for(vehicle_type: &str) -> Self {
        Self {
            vehicle_type: vehicle_type.to_string(),
            image_key: String::new(),
            required: true,
            display_order: 1,
            status: RecordStatus::Active,
        }
    }

    pub fn from_key(key: &VehicleImageKeyDto) -> Self {
        Self {
            vehicle_type: key.vehicle_type.clone(),
            image_key: key.image_key.clone(),
            required: key.required,
            display_order: key.display_order,
            status: key.status.unwrap_or_default(),
        }
    }

    /// Same key with its status flipped
    pub fn with_status_toggled(key: &VehicleImageKeyDto) -> Self {
        let mut payload = Self::from_key(key);
        payload.status = payload.status.toggled();
        payload
    }

    /// Trims the key and checks the form constraints.
    pub fn normalized(mut self) -> Result<Self, String> {
        self.image_key = self.image_key.trim().to_string();
        if self.image_key.is_empty() {
            return Err("Image key is required".into());
        }
        if self.display_order < 1 {
            return Err("Display order must be at least 1".into());
        }
        Ok(self)
    }
}

/// Query of `GET /vehicle-image-key`
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageKeyListQuery {
    pub page_no: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

/// Keys of one vehicle type, in backend order
#[derive(Debug, Clone, PartialEq)]
pub struct ImageKeyGroup {
    pub vehicle_type: String,
    pub keys: Vec<VehicleImageKeyDto>,
}

/// Buckets `keys` under the known vehicle types. Types with no keys get an
/// empty group; keys of unknown types are left out.
pub fn group_by_vehicle_type(types: &[String], keys: &[VehicleImageKeyDto]) -> Vec<ImageKeyGroup> {
    types
        .iter()
        .map(|t| ImageKeyGroup {
            vehicle_type: t.clone(),
            keys: keys.iter().filter(|k| &k.vehicle_type == t).cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: &str, vehicle_type: &str) -> VehicleImageKeyDto {
        VehicleImageKeyDto {
            id: RecordId::new(id),
            vehicle_type: vehicle_type.into(),
            image_key: format!("KEY_{}", id),
            required: true,
            display_order: 1,
            status: Some(RecordStatus::Active),
        }
    }

    #[test]
    fn groups_keys_under_known_types() {
        let types = vec!["CAR".to_string(), "BIKE".to_string(), "TRUCK".to_string()];
        let keys = vec![key("1", "CAR"), key("2", "BIKE"), key("3", "CAR"), key("4", "BUS")];
        let groups = group_by_vehicle_type(&types, &keys);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].keys.len(), 2);
        assert_eq!(groups[1].keys.len(), 1);
        assert!(groups[2].keys.is_empty());
    }

    #[test]
    fn toggled_payload_keeps_other_fields() {
        let payload = VehicleImageKeyPayload::with_status_toggled(&key("9", "CAR"));
        assert_eq!(payload.status, RecordStatus::Inactive);
        assert_eq!(payload.image_key, "KEY_9");
    }

    #[test]
    fn normalized_rejects_blank_key_and_zero_order() {
        let mut payload = VehicleImageKeyPayload::new_for("CAR");
        payload.image_key = "  ".into();
        assert!(payload.clone().normalized().is_err());
        payload.image_key = " FRONT ".into();
        payload.display_order = 0;
        assert!(payload.clone().normalized().is_err());
        payload.display_order = 2;
        assert_eq!(payload.normalized().unwrap().image_key, "FRONT");
    }
}
