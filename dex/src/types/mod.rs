//! Domain types for the reference browser

mod creature;
mod pokemon_type;
mod profile;
mod stats;

pub use creature::{AbilitySlot, Creature, StatSlot, TypeSlot};
pub use pokemon_type::Type;
pub use profile::TypeEffectivenessProfile;
pub use stats::Stat;
