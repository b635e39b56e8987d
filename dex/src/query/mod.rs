//! List queries: search predicates, stable filtering, and id paging
//!
//! Filtering never re-sorts; results keep the relative order of the input.

mod filter;
mod range;

pub use filter::{CategoryFilter, CreatureFilter, Matches, TextQuery, filter, filter_type_names};
pub use range::IdRange;
