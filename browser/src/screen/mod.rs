//! Screen state machines
//!
//! Each screen is an immutable snapshot; `apply` takes an event and returns
//! the next snapshot. Background loads report back through an
//! [`EventSender`](crate::EventSender).

pub mod detail;
pub mod list;
pub mod type_chart;

pub use detail::{AbilityRow, DetailEvent, DetailState, DetailView, StatRow, TypeChip};
pub use list::{ListEvent, ListState, LoadToken};
pub use type_chart::{TypeChartEvent, TypeChartState};
