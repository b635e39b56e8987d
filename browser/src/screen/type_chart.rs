//! Type chart grid and its effectiveness dialog

use std::sync::Arc;

use pokedex_dex::{TextQuery, Type, TypeEffectivenessProfile, filter};

#[derive(Debug, Clone)]
pub enum TypeChartEvent {
    QueryChanged(String),

    /// Profiles for the whole chart are ready
    ChartLoaded(Vec<Arc<TypeEffectivenessProfile>>),

    /// A type card was tapped
    TypeSelected(Type),

    DialogDismissed,
}

/// Snapshot of the type chart screen
#[derive(Debug, Clone, Default)]
pub struct TypeChartState {
    query: String,
    profiles: Arc<Vec<Arc<TypeEffectivenessProfile>>>,
    loaded: bool,
    selected: Option<Arc<TypeEffectivenessProfile>>,
}

impl TypeChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, event: TypeChartEvent) -> TypeChartState {
        let mut next = self.clone();

        match event {
            TypeChartEvent::QueryChanged(query) => {
                next.query = query;
            }

            TypeChartEvent::ChartLoaded(profiles) => {
                next.profiles = Arc::new(profiles);
                next.loaded = true;
            }

            TypeChartEvent::TypeSelected(t) => {
                next.selected = self.profile(t);
                if next.selected.is_none() {
                    tracing::debug!(type_name = %t, "Type selected before chart loaded");
                }
            }

            TypeChartEvent::DialogDismissed => {
                next.selected = None;
            }
        }

        next
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// Cards to show, in chart order
    pub fn visible_types(&self) -> Vec<Type> {
        filter(Type::all(), &TextQuery::new(self.query.as_str()))
            .into_iter()
            .copied()
            .collect()
    }

    /// Loaded but no type matches the search
    pub fn shows_empty_message(&self) -> bool {
        self.loaded && self.visible_types().is_empty()
    }

    /// Profile of the open dialog
    pub fn selected(&self) -> Option<&TypeEffectivenessProfile> {
        self.selected.as_deref()
    }

    /// Loaded profile for `t`
    pub fn profile(&self, t: Type) -> Option<Arc<TypeEffectivenessProfile>> {
        self.profiles
            .iter()
            .find(|p| p.type_name.eq_ignore_ascii_case(t.as_str()))
            .cloned()
    }
}
