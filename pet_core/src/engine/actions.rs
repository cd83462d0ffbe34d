//! Feed, play and rest transitions

use super::StatEngine;
use crate::pet::Pet;

impl StatEngine {
    /// Lower hunger and restore a little energy
    pub fn apply_feed(&self, pet: &Pet) -> Pet {
        let feed = &self.constants.feed;
        let mut next = pet.clone();
        next.hunger_level = pet.hunger_level.lower(feed.hunger_decrease);
        next.energy_level = pet.energy_level.raise(feed.energy_increase);
        next
    }

    /// Raise happiness at the cost of energy and hunger
    pub fn apply_play(&self, pet: &Pet) -> Pet {
        let play = &self.constants.play;
        let mut next = pet.clone();
        next.happiness_level = pet.happiness_level.raise(play.happiness_increase);
        next.hunger_level = pet.hunger_level.raise(play.hunger_increase);
        next.energy_level = pet.energy_level.lower(play.energy_decrease);
        next
    }

    /// Restore energy; resting makes the pet slightly hungrier
    pub fn apply_rest(&self, pet: &Pet) -> Pet {
        let rest = &self.constants.rest;
        let mut next = pet.clone();
        next.energy_level = pet.energy_level.raise(rest.energy_increase);
        next.hunger_level = pet.hunger_level.raise(rest.hunger_increase);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::StatLevel;
    use crate::types::{CareAction, OwnerId, PetId, PetType};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn pet(happiness: u32, energy: u32, hunger: u32) -> Pet {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Pet::new(
            PetId(1),
            OwnerId::from("u1"),
            "Fido",
            PetType::Mole,
            "#FFFFFF",
            StatLevel::default(),
            now,
        )
        .with_levels(happiness, energy, hunger)
    }

    #[test]
    fn test_feed_mid_range() {
        let engine = StatEngine::default();
        let fed = engine.apply_feed(&pet(50, 50, 50));
        assert_eq!(fed.levels(), (50, 55, 20));
    }

    #[test]
    fn test_feed_floors_hunger() {
        let engine = StatEngine::default();
        let fed = engine.apply_feed(&pet(50, 98, 10));
        assert_eq!(fed.levels(), (50, 100, 0));
    }

    #[test]
    fn test_play_caps_and_floors() {
        let engine = StatEngine::default();
        let played = engine.apply_play(&pet(90, 10, 90));
        assert_eq!(played.levels(), (100, 0, 100));
    }

    #[test]
    fn test_play_mid_range() {
        let engine = StatEngine::default();
        let played = engine.apply_play(&pet(50, 50, 50));
        assert_eq!(played.levels(), (75, 35, 60));
    }

    #[test]
    fn test_rest() {
        let engine = StatEngine::default();
        assert_eq!(engine.apply_rest(&pet(50, 50, 50)).levels(), (50, 80, 55));
        assert_eq!(engine.apply_rest(&pet(50, 90, 98)).levels(), (50, 100, 100));
    }

    #[test]
    fn test_actions_leave_identity_untouched() {
        let engine = StatEngine::default();
        let before = pet(50, 50, 50);
        for action in CareAction::all() {
            let after = engine.apply(&before, *action);
            assert_eq!(after.id, before.id);
            assert_eq!(after.pet_type, before.pet_type);
            assert_eq!(after.last_interaction_at, before.last_interaction_at);
            assert_eq!(after.version, before.version);
        }
    }

    fn action_strategy() -> impl Strategy<Value = CareAction> {
        prop_oneof![
            Just(CareAction::Feed),
            Just(CareAction::Play),
            Just(CareAction::Rest),
        ]
    }

    proptest! {
        #[test]
        fn prop_actions_stay_in_range(
            h in 0u32..=100,
            e in 0u32..=100,
            g in 0u32..=100,
            actions in proptest::collection::vec(action_strategy(), 0..50),
        ) {
            let engine = StatEngine::default();
            let mut current = pet(h, e, g);
            for action in actions {
                current = engine.apply(&current, action);
                let (h, e, g) = current.levels();
                prop_assert!(h <= 100 && e <= 100 && g <= 100);
            }
        }

        #[test]
        fn prop_feed_play_rest_terminates_valid(
            h in 0u32..=100,
            e in 0u32..=100,
            g in 0u32..=100,
        ) {
            let engine = StatEngine::default();
            let start = pet(h, e, g);
            let end = engine.apply_rest(&engine.apply_play(&engine.apply_feed(&start)));
            let (h, e, g) = end.levels();
            prop_assert!(h <= 100 && e <= 100 && g <= 100);
        }
    }
}
