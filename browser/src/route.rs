/// Screens reachable from the dashboard
///
/// Only the detail screen takes input: the id of the creature to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    List,
    Detail { id: u32 },
    TypeChart,
}

impl Route {
    /// Parse a route path: `/`, `/pokemon`, `/pokemon/{id}`, `/types`
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Dashboard),
            ["pokemon"] => Some(Route::List),
            ["pokemon", id] => id.parse().ok().map(|id| Route::Detail { id }),
            ["types"] => Some(Route::TypeChart),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::List => "/pokemon".to_string(),
            Route::Detail { id } => format!("/pokemon/{}", id),
            Route::TypeChart => "/types".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Pokedex",
            Route::List => "Pokemon List",
            Route::Detail { .. } => "Pokemon Details",
            Route::TypeChart => "Type Chart",
        }
    }
}
