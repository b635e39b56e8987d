//! Type-effectiveness profiles derived from type fixtures

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use pokedex_fixtures::{DamageRelations, FixtureSource, NamedRef};

use crate::display::capitalize;
use crate::store::FixtureStore;
use crate::types::{Type, TypeEffectivenessProfile};

/// Map a type's damage relations onto a profile
///
/// Each relation list is copied name by name, capitalized, in fixture order.
/// Nothing is deduplicated or reconciled across lists. `no_damage_to` has no
/// profile field and is ignored.
pub fn derive_profile(type_name: &str, relations: &DamageRelations) -> TypeEffectivenessProfile {
    let names = |refs: &[NamedRef]| -> Vec<String> {
        refs.iter().map(|r| capitalize(&r.name)).collect()
    };

    TypeEffectivenessProfile {
        type_name: capitalize(&type_name.to_lowercase()),
        weak_against: names(&relations.double_damage_from),
        resistant_to: names(&relations.half_damage_from),
        immune_to: names(&relations.no_damage_from),
        super_effective_against: names(&relations.double_damage_to),
        not_very_effective_against: names(&relations.half_damage_to),
    }
}

/// Resolves type names to effectiveness profiles, caching each one
///
/// A profile is computed on first request and reused for the lifetime of the
/// resolver. A missing or malformed fixture yields an all-empty profile; that
/// fallback is cached too, so a bad fixture is not re-read.
pub struct TypeResolver<S> {
    store: FixtureStore<S>,
    cache: RwLock<HashMap<String, Arc<TypeEffectivenessProfile>>>,
}

impl<S: FixtureSource> TypeResolver<S> {
    pub fn new(store: FixtureStore<S>) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &FixtureStore<S> {
        &self.store
    }

    /// Profile for `type_name` (any case); never fails
    pub fn resolve(&self, type_name: &str) -> Arc<TypeEffectivenessProfile> {
        let key = type_name.to_lowercase();

        if let Some(profile) = self.cached(&key) {
            tracing::debug!(type_name = %key, "Effectiveness profile cache hit");
            return profile;
        }

        let profile = Arc::new(self.compute(&key));

        match self.cache.write() {
            // A concurrent resolve may have won the race; keep the first entry
            Ok(mut cache) => cache.entry(key).or_insert(profile).clone(),
            Err(_) => profile,
        }
    }

    /// Profiles of all 18 standard types, in chart order
    pub fn chart(&self) -> Vec<Arc<TypeEffectivenessProfile>> {
        Type::all()
            .iter()
            .map(|t| self.resolve(t.api_name()))
            .collect()
    }

    /// Number of profiles computed so far
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    fn cached(&self, key: &str) -> Option<Arc<TypeEffectivenessProfile>> {
        self.cache.read().ok()?.get(key).cloned()
    }

    /// `key` is the lowercased type name
    fn compute(&self, key: &str) -> TypeEffectivenessProfile {
        match self.store.damage_relations(key) {
            Ok(relations) => derive_profile(key, &relations),
            Err(e) => {
                tracing::warn!(type_name = key, error = %e, "Using empty effectiveness profile");
                TypeEffectivenessProfile::empty(capitalize(key))
            }
        }
    }
}
