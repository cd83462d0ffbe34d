//! pet_core - Stat engine and action dispatcher for virtual pets
//!
//! This library provides:
//! - Pet: The entity with bounded happiness, energy and hunger levels
//! - StatEngine: Pure feed/play/rest transitions, idle decay, status and mood
//! - ActionDispatcher: Ownership checks and per-pet serialized mutations
//! - PetStore: The persistence seam, with an in-memory implementation

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod pet;
pub mod prelude;
pub mod store;
pub mod types;
pub mod view;

// Re-export core types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{load_constants, parse_constants, ConfigError, PetConstants};
pub use dispatcher::{ActionDispatcher, NewPet};
pub use engine::{classify_level, mood, status, LevelTier, Mood, PetStatus, StatEngine};
pub use error::{PetError, Result, ValidationError};
pub use pet::{Pet, StatLevel};
pub use store::{MemoryStore, PetStore, StoreError};
pub use types::{CareAction, OwnerId, PetId, PetType};
pub use view::PetView;
