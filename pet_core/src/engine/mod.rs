//! Stat Engine - Pure transitions of pet stats
//!
//! Every function here takes a pet by reference and returns the next pet.
//! Nothing reads the wall clock or touches storage.

mod actions;
mod decay;
mod mood;

pub use mood::{classify_level, mood, status, LevelTier, Mood, PetStatus};

use crate::config::PetConstants;
use crate::pet::Pet;
use crate::types::CareAction;

/// Applies care actions and idle decay using a set of constants
#[derive(Debug, Clone, Default)]
pub struct StatEngine {
    constants: PetConstants,
}

impl StatEngine {
    pub fn new(constants: PetConstants) -> Self {
        StatEngine { constants }
    }

    pub fn constants(&self) -> &PetConstants {
        &self.constants
    }

    /// Apply a care action
    pub fn apply(&self, pet: &Pet, action: CareAction) -> Pet {
        match action {
            CareAction::Feed => self.apply_feed(pet),
            CareAction::Play => self.apply_play(pet),
            CareAction::Rest => self.apply_rest(pet),
        }
    }
}
