//! PetView - Serializable snapshot of a pet with its derived labels

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::{mood, status, Mood, PetStatus};
use crate::pet::Pet;
use crate::types::{OwnerId, PetId, PetType};

/// Everything a presentation layer needs to render a pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetView {
    pub id: PetId,
    pub owner_id: OwnerId,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub type_display_name: &'static str,
    pub icon: &'static str,
    pub color: String,
    pub happiness_level: u8,
    pub energy_level: u8,
    pub hunger_level: u8,
    pub status: PetStatus,
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
    pub last_interaction_at: DateTime<Utc>,
}

impl PetView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Pet> for PetView {
    fn from(pet: &Pet) -> Self {
        PetView {
            id: pet.id,
            owner_id: pet.owner_id.clone(),
            name: pet.name.clone(),
            pet_type: pet.pet_type,
            type_display_name: pet.pet_type.display_name(),
            icon: pet.pet_type.icon_file(),
            color: pet.color.clone(),
            happiness_level: pet.happiness_level.value(),
            energy_level: pet.energy_level.value(),
            hunger_level: pet.hunger_level.value(),
            status: status(pet),
            mood: mood(pet),
            created_at: pet.created_at,
            last_interaction_at: pet.last_interaction_at,
        }
    }
}
