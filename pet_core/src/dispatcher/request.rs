//! Request values accepted by the dispatcher

use serde::{Deserialize, Serialize};

use crate::types::PetType;

/// Input for creating a pet
///
/// `pet_type` stays textual so that an unrecognized species surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl NewPet {
    pub fn new(name: impl Into<String>, pet_type: PetType) -> Self {
        NewPet {
            name: name.into(),
            pet_type: pet_type.as_str().to_string(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_color() {
        let request: NewPet = serde_json::from_str(r#"{"name":"Fido","type":"MOLE"}"#).unwrap();
        assert_eq!(request, NewPet::new("Fido", PetType::Mole));
    }

    #[test]
    fn test_unknown_type_still_deserializes() {
        let request: NewPet =
            serde_json::from_str(r##"{"name":"Rex","type":"DRAGON","color":"#000000"}"##).unwrap();
        assert_eq!(request.pet_type, "DRAGON");
        assert_eq!(request.color.as_deref(), Some("#000000"));
    }
}
