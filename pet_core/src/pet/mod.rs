//! Pet - The entity whose stats the engine evolves

mod stat_level;
mod validation;

pub use stat_level::StatLevel;
pub use validation::{validate_color, validate_name};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OwnerId, PetId, PetType};

/// A virtual pet owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    // === Identity ===
    pub id: PetId,
    pub owner_id: OwnerId,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    /// Display color as `#RRGGBB`
    pub color: String,

    // === Stats ===
    pub happiness_level: StatLevel,
    pub energy_level: StatLevel,
    /// Accumulated hunger; lower is better
    pub hunger_level: StatLevel,

    // === Timestamps ===
    pub created_at: DateTime<Utc>,
    /// Drives idle decay
    pub last_interaction_at: DateTime<Utc>,

    /// Storage version, bumped by the store on every save
    #[serde(default)]
    pub version: u64,
}

impl Pet {
    /// Create a pet with every stat at `starting_level`
    ///
    /// Inputs are assumed to be validated already; see [`validate_name`]
    /// and [`validate_color`].
    pub fn new(
        id: PetId,
        owner_id: OwnerId,
        name: impl Into<String>,
        pet_type: PetType,
        color: impl Into<String>,
        starting_level: StatLevel,
        now: DateTime<Utc>,
    ) -> Self {
        Pet {
            id,
            owner_id,
            name: name.into(),
            pet_type,
            color: color.into(),
            happiness_level: starting_level,
            energy_level: starting_level,
            hunger_level: starting_level,
            created_at: now,
            last_interaction_at: now,
            version: 0,
        }
    }

    /// Set all three stats at once, clamping each into range
    pub fn with_levels(mut self, happiness: u32, energy: u32, hunger: u32) -> Self {
        self.happiness_level = StatLevel::clamped(happiness);
        self.energy_level = StatLevel::clamped(energy);
        self.hunger_level = StatLevel::clamped(hunger);
        self
    }

    /// Stats as `(happiness, energy, hunger)`
    pub fn levels(&self) -> (u8, u8, u8) {
        (
            self.happiness_level.value(),
            self.energy_level.value(),
            self.hunger_level.value(),
        )
    }

    /// Fullness is the inverse of hunger, used for display and mood
    pub fn fullness(&self) -> StatLevel {
        self.hunger_level.inverted()
    }

    /// Whether `owner` owns this pet
    pub fn is_owned_by(&self, owner: &OwnerId) -> bool {
        &self.owner_id == owner
    }

    /// Whole minutes since the last interaction, zero if `now` is earlier
    pub fn idle_minutes(&self, now: DateTime<Utc>) -> u64 {
        let minutes = (now - self.last_interaction_at).num_minutes();
        u64::try_from(minutes).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample(now: DateTime<Utc>) -> Pet {
        Pet::new(
            PetId(1),
            OwnerId::from("u1"),
            "Fido",
            PetType::Mole,
            "#FFFFFF",
            StatLevel::default(),
            now,
        )
    }

    #[test]
    fn test_new_pet_defaults() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let pet = sample(now);
        assert_eq!(pet.levels(), (50, 50, 50));
        assert_eq!(pet.created_at, pet.last_interaction_at);
        assert_eq!(pet.version, 0);
    }

    #[test]
    fn test_with_levels_clamps() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let pet = sample(now).with_levels(150, 10, 90);
        assert_eq!(pet.levels(), (100, 10, 90));
        assert_eq!(pet.fullness().value(), 10);
    }

    #[test]
    fn test_idle_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let pet = sample(now);
        assert_eq!(pet.idle_minutes(now + Duration::seconds(59)), 0);
        assert_eq!(pet.idle_minutes(now + Duration::minutes(25)), 25);
        // Clock skew backwards never produces negative idle time
        assert_eq!(pet.idle_minutes(now - Duration::minutes(5)), 0);
    }

    #[test]
    fn test_serializes_type_field() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_value(sample(now)).unwrap();
        assert_eq!(json["type"], "MOLE");
        assert_eq!(json["happinessLevel"], 50);
        assert_eq!(json["ownerId"], "u1");
    }
}
