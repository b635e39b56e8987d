//! Paged, searchable creature list

use std::sync::Arc;

use pokedex_dex::{Creature, CreatureFilter, IdRange, filter};

/// Identifies one batch load; completions carrying an older token are stale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    fn next(self) -> Self {
        LoadToken(self.0 + 1)
    }
}

#[derive(Debug, Clone)]
pub enum ListEvent {
    /// Search box contents changed
    QueryChanged(String),

    /// A type chip was tapped; tapping the selected chip clears it
    TypeToggled(String),

    /// The reset button next to the chips
    TypeCleared,

    /// A different id page was picked
    RangeSelected(IdRange),

    /// A batch load finished
    LoadCompleted {
        token: LoadToken,
        creatures: Vec<Creature>,
    },
}

/// Snapshot of the list screen
///
/// Each event produces a new snapshot; the loaded batch is shared between
/// snapshots rather than copied.
#[derive(Debug, Clone)]
pub struct ListState {
    query: String,
    selected_type: Option<String>,
    range: IdRange,
    creatures: Arc<Vec<Creature>>,
    loading: bool,
    token: LoadToken,
}

impl ListState {
    /// Start on `range` with its load pending
    pub fn new(range: IdRange) -> Self {
        Self {
            query: String::new(),
            selected_type: None,
            range,
            creatures: Arc::new(Vec::new()),
            loading: true,
            token: LoadToken::default().next(),
        }
    }

    /// Apply an event and return the resulting snapshot
    pub fn apply(&self, event: ListEvent) -> ListState {
        let mut next = self.clone();

        match event {
            ListEvent::QueryChanged(query) => {
                next.query = query;
            }

            ListEvent::TypeToggled(type_name) => {
                let already_selected = self
                    .selected_type
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(&type_name));
                next.selected_type = if already_selected {
                    None
                } else {
                    Some(type_name)
                };
            }

            ListEvent::TypeCleared => {
                next.selected_type = None;
            }

            ListEvent::RangeSelected(range) => {
                if range != self.range {
                    next.range = range;
                    next.loading = true;
                    next.token = self.token.next();
                }
            }

            ListEvent::LoadCompleted { token, creatures } => {
                if token == self.token {
                    next.creatures = Arc::new(creatures);
                    next.loading = false;
                } else {
                    tracing::debug!(?token, current = ?self.token, "Discarding stale batch");
                }
            }
        }

        next
    }

    /// The load this snapshot is waiting for, if any
    pub fn pending_load(&self) -> Option<(LoadToken, IdRange)> {
        self.loading.then_some((self.token, self.range))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_type(&self) -> Option<&str> {
        self.selected_type.as_deref()
    }

    pub fn range(&self) -> IdRange {
        self.range
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Every creature of the loaded batch
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// The filter built from the search box and the selected chip
    pub fn filter(&self) -> CreatureFilter {
        let mut filter = CreatureFilter::new();
        if !self.query.trim().is_empty() {
            filter = filter.with_text(self.query.clone());
        }
        if let Some(type_name) = &self.selected_type {
            filter = filter.with_category(type_name.clone());
        }
        filter
    }

    /// Creatures to show, in id order
    pub fn visible(&self) -> Vec<&Creature> {
        filter(self.creatures.as_slice(), &self.filter())
    }

    /// "Showing N Pokemon", only while a filter is active
    pub fn result_summary(&self) -> Option<String> {
        let filter = self.filter();
        filter
            .is_active()
            .then(|| format!("Showing {} Pokemon", self.visible().len()))
    }

    /// Loaded, but nothing passes the filter
    pub fn shows_empty_message(&self) -> bool {
        !self.loading && self.visible().is_empty()
    }

    /// Header of the range picker
    pub fn range_label(&self) -> String {
        format!("Pokemon {}", self.range.label())
    }
}
