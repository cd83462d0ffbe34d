//! StatLevel - A stat bounded to the 0..=100 range

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pet stat (happiness, energy or hunger) that always lies in `0..=100`
///
/// All arithmetic saturates at the bounds, so no sequence of actions can
/// push a level out of range. Deserializing an out-of-range value fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StatLevel(u8);

impl StatLevel {
    pub const MIN: StatLevel = StatLevel(0);
    pub const MAX: StatLevel = StatLevel(100);

    /// Create a level, clamping anything above 100
    pub fn clamped(value: u32) -> Self {
        StatLevel(value.min(100) as u8)
    }

    /// Raw value in `0..=100`
    pub fn value(self) -> u8 {
        self.0
    }

    /// The complement `100 - value`, e.g. fullness for a hunger level
    pub fn inverted(self) -> Self {
        StatLevel(100 - self.0)
    }

    /// Add, capped at 100
    pub fn raise(self, amount: u32) -> Self {
        Self::clamped(u32::from(self.0).saturating_add(amount))
    }

    /// Subtract, floored at 0
    pub fn lower(self, amount: u32) -> Self {
        StatLevel(u32::from(self.0).saturating_sub(amount) as u8)
    }
}

impl Default for StatLevel {
    fn default() -> Self {
        StatLevel(50)
    }
}

impl TryFrom<u32> for StatLevel {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(format!("stat level {} is outside 0..=100", value));
        }
        Ok(StatLevel(value as u8))
    }
}

impl From<StatLevel> for u32 {
    fn from(level: StatLevel) -> u32 {
        u32::from(level.0)
    }
}

impl fmt::Display for StatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_caps_at_max() {
        assert_eq!(StatLevel::clamped(90).raise(25), StatLevel::MAX);
        assert_eq!(StatLevel::clamped(40).raise(25).value(), 65);
    }

    #[test]
    fn test_lower_floors_at_min() {
        assert_eq!(StatLevel::clamped(10).lower(15), StatLevel::MIN);
        assert_eq!(StatLevel::clamped(50).lower(30).value(), 20);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        assert_eq!(StatLevel::clamped(50).raise(u32::MAX), StatLevel::MAX);
        assert_eq!(StatLevel::clamped(50).lower(u32::MAX), StatLevel::MIN);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(StatLevel::clamped(20).inverted().value(), 80);
        assert_eq!(StatLevel::MIN.inverted(), StatLevel::MAX);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<StatLevel>("101").is_err());
        let level: StatLevel = serde_json::from_str("100").unwrap();
        assert_eq!(level, StatLevel::MAX);
    }

    #[test]
    fn test_default_is_mid_range() {
        assert_eq!(StatLevel::default().value(), 50);
    }
}
