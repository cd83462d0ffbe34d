//! Idle decay - passive stat drift while a pet is left alone

use chrono::{DateTime, Utc};

use super::StatEngine;
use crate::pet::Pet;

impl StatEngine {
    /// Number of whole decay intervals in `elapsed_minutes`
    pub fn decay_intervals(&self, elapsed_minutes: u64) -> u64 {
        elapsed_minutes / self.constants.decay.interval_minutes.max(1)
    }

    /// Apply decay for `elapsed_minutes` of idle time
    ///
    /// Each whole interval costs happiness and energy and adds hunger.
    /// Partial intervals have no effect. The result depends only on the
    /// arguments, so calling it twice with the same pet and minutes gives
    /// the same pet.
    pub fn apply_idle_decay(&self, pet: &Pet, elapsed_minutes: u64) -> Pet {
        let intervals = self.decay_intervals(elapsed_minutes);
        if intervals == 0 {
            return pet.clone();
        }

        let decay = &self.constants.decay;
        let mut next = pet.clone();
        next.happiness_level = pet
            .happiness_level
            .lower(scaled(intervals, decay.happiness_per_interval));
        next.energy_level = pet
            .energy_level
            .lower(scaled(intervals, decay.energy_per_interval));
        next.hunger_level = pet
            .hunger_level
            .raise(scaled(intervals, decay.hunger_per_interval));
        next
    }

    /// Pet as it would look at `now`, with decay since its last interaction
    pub fn decayed_at(&self, pet: &Pet, now: DateTime<Utc>) -> Pet {
        self.apply_idle_decay(pet, pet.idle_minutes(now))
    }

    /// Whether the pet has been idle longer than the attention window
    pub fn needs_attention(&self, pet: &Pet, now: DateTime<Utc>) -> bool {
        pet.idle_minutes(now) > self.constants.decay.attention_after_minutes
    }
}

/// `intervals * per_interval`, saturating into `u32`
fn scaled(intervals: u64, per_interval: u32) -> u32 {
    let total = intervals.saturating_mul(u64::from(per_interval));
    u32::try_from(total).unwrap_or(u32::MAX)
}
