//! Creature and type-effectiveness domain model for the Pokedex.
//!
//! # Overview
//!
//! `pokedex-dex` sits between `pokedex-fixtures` (bundled JSON records) and
//! the browser layer:
//!
//! ```text
//! pokedex-fixtures (records + sources)
//!        │
//!        ▼
//! pokedex-dex (domain + store + resolver + queries) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-browser (async loading, screen state)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - The 18 elemental types in chart order, with colours and icons
//! - [`Creature`] - One species record as shown by list and detail views
//! - [`Stat`] - Base stat kinds with display labels
//! - [`TypeEffectivenessProfile`] - What a type is weak to, resists, and so on
//!
//! ## Access
//! - [`FixtureStore`] - Typed reads of creature and type fixtures
//! - [`TypeResolver`] - Derives and caches effectiveness profiles
//!
//! ## Queries
//! - [`CreatureFilter`], [`TextQuery`], [`CategoryFilter`] - List predicates
//! - [`IdRange`] - Contiguous id pages for batch loading
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_dex::{CreatureFilter, FixtureStore, IdRange, TypeResolver, filter};
//! use pokedex_fixtures::DirectorySource;
//!
//! let store = FixtureStore::new(DirectorySource::new("assets"));
//! let page = IdRange::paginate(1025, 60)[0];
//! let creatures = store.load_batch(page);
//!
//! let fire_chars = CreatureFilter::new().with_text("char").with_category("fire");
//! for creature in filter(&creatures, &fire_chars) {
//!     println!("#{} {}", creature.id, creature.display_name());
//! }
//!
//! let resolver = TypeResolver::new(store);
//! println!("Fire is weak to {:?}", resolver.resolve("fire").weak_against);
//! ```

pub mod display;
pub mod query;
pub mod resolver;
pub mod store;
pub mod types;

pub use query::{CategoryFilter, CreatureFilter, IdRange, Matches, TextQuery, filter, filter_type_names};
pub use resolver::{TypeResolver, derive_profile};
pub use store::FixtureStore;
pub use types::{AbilitySlot, Creature, Stat, StatSlot, Type, TypeEffectivenessProfile, TypeSlot};

// Re-export the fixture layer so downstream crates need only one dependency
pub use pokedex_fixtures::{DamageRelations, DirectorySource, FixtureError, FixtureSource, MemorySource};
