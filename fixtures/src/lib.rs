//! Fixture records for the bundled Pokedex reference data.
//!
//! Every creature and every type ships as one read-only JSON document. This
//! crate knows where those documents live, how to read them, and how to turn
//! them into typed records with explicit, field-by-field validation.
//!
//! ```text
//! pokedex-fixtures (records + sources) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-dex (domain, resolver, queries)
//!        │
//!        ▼
//! pokedex-browser (async loading, screen state)
//! ```

use thiserror::Error;

mod creature;
mod decode;
mod source;
mod type_record;


pub use creature::{AbilitySlotRecord, CreatureRecord, SpritesRecord, StatSlotRecord, TypeSlotRecord};
pub use source::{DirectorySource, FixtureSource, MemorySource, creature_path, type_path};
pub use type_record::{DamageRelations, NamedRef, TypeMember, TypeRecord};

/// Error produced while decoding a fixture document
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

/// Error produced while fetching a fixture from a source
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Fixture not found: {path}")]
    NotFound { path: String },

    #[error("Malformed fixture {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FixtureError {
    /// Attach the fixture path to a decode failure
    pub fn parse(path: impl Into<String>, source: DecodeError) -> Self {
        FixtureError::Parse {
            path: path.into(),
            source,
        }
    }

    /// Whether the fixture simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, FixtureError::NotFound { .. })
    }
}
