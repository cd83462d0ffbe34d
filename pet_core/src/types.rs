//! Core identifiers and enums shared across the pet model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Identifier for a pet, assigned by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub u64);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PetId {
    fn from(id: u64) -> Self {
        PetId(id)
    }
}

/// Identifier for the user owning a pet
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        OwnerId(s.to_string())
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        OwnerId(s)
    }
}

/// Species of a pet, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetType {
    Mole,
    Magpie,
    Toad,
}

impl PetType {
    /// Get all pet types
    pub fn all() -> &'static [PetType] {
        &[PetType::Mole, PetType::Magpie, PetType::Toad]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PetType::Mole => "Mole",
            PetType::Magpie => "Magpie",
            PetType::Toad => "Toad",
        }
    }

    /// Icon asset shown for this species
    pub fn icon_file(&self) -> &'static str {
        match self {
            PetType::Mole => "mole.svg",
            PetType::Magpie => "magpie.svg",
            PetType::Toad => "toad.svg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Mole => "MOLE",
            PetType::Magpie => "MAGPIE",
            PetType::Toad => "TOAD",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetType {
    type Err = ValidationError;

    /// Case-insensitive parse of the wire name ("MOLE", "magpie", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownType(s.to_string()))
    }
}

/// A care action that changes a pet's stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareAction {
    Feed,
    Play,
    Rest,
}

impl CareAction {
    /// Get all care actions
    pub fn all() -> &'static [CareAction] {
        &[CareAction::Feed, CareAction::Play, CareAction::Rest]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CareAction::Feed => "feed",
            CareAction::Play => "play",
            CareAction::Rest => "rest",
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
