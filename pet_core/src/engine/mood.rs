//! Derived status tiers and mood

use serde::{Deserialize, Serialize};

use crate::pet::{Pet, StatLevel};

const GREAT_THRESHOLD: u32 = 70;
const OKAY_THRESHOLD: u32 = 40;

/// Display tier for a single stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelTier {
    Poor,
    Okay,
    Great,
}

impl LevelTier {
    pub fn label(&self) -> &'static str {
        match self {
            LevelTier::Poor => "Poor",
            LevelTier::Okay => "Okay",
            LevelTier::Great => "Great",
        }
    }
}

/// Overall mood from the three stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Sad,
    Neutral,
    Happy,
}

/// Tiers for each displayed axis; hunger is shown as fullness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStatus {
    pub happiness: LevelTier,
    pub energy: LevelTier,
    pub fullness: LevelTier,
}

/// `>= 70` is great, `>= 40` okay, anything lower poor
pub fn classify_level(level: StatLevel) -> LevelTier {
    let value = u32::from(level);
    if value >= GREAT_THRESHOLD {
        LevelTier::Great
    } else if value >= OKAY_THRESHOLD {
        LevelTier::Okay
    } else {
        LevelTier::Poor
    }
}

/// Mood from the mean of happiness, energy and fullness
pub fn mood(pet: &Pet) -> Mood {
    // Compare the sum against threshold * 3 so the mean is exact
    let sum = u32::from(pet.happiness_level)
        + u32::from(pet.energy_level)
        + u32::from(pet.fullness());
    if sum >= GREAT_THRESHOLD * 3 {
        Mood::Happy
    } else if sum >= OKAY_THRESHOLD * 3 {
        Mood::Neutral
    } else {
        Mood::Sad
    }
}

pub fn status(pet: &Pet) -> PetStatus {
    PetStatus {
        happiness: classify_level(pet.happiness_level),
        energy: classify_level(pet.energy_level),
        fullness: classify_level(pet.fullness()),
    }
}
