//! Typed, read-only access to the bundled fixtures

use pokedex_fixtures::{
    CreatureRecord, DamageRelations, FixtureError, FixtureSource, TypeRecord, creature_path,
    type_path,
};

use crate::query::IdRange;
use crate::types::{Creature, Type};

/// Read-only store of creature and type fixtures
///
/// Every read goes to the underlying source; nothing is cached here. Reads
/// block, so async callers should run them on a blocking pool.
#[derive(Debug, Clone)]
pub struct FixtureStore<S> {
    source: S,
}

impl<S: FixtureSource> FixtureStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read and decode `pokemon/{id}.json`
    pub fn creature_record(&self, id: u32) -> Result<CreatureRecord, FixtureError> {
        let path = creature_path(id);
        let json = self.source.read(&path)?;
        CreatureRecord::decode(&json).map_err(|e| FixtureError::parse(path, e))
    }

    /// Load creature `id`
    pub fn creature(&self, id: u32) -> Result<Creature, FixtureError> {
        self.creature_record(id).map(Creature::from_record)
    }

    /// Read and decode `type/{name}.json`; `name` may be in any case
    pub fn type_record(&self, name: &str) -> Result<TypeRecord, FixtureError> {
        let path = type_path(name);
        let json = self.source.read(&path)?;
        TypeRecord::decode(&json).map_err(|e| FixtureError::parse(path, e))
    }

    /// Read only the damage relations of `type/{name}.json`
    pub fn damage_relations(&self, name: &str) -> Result<DamageRelations, FixtureError> {
        let path = type_path(name);
        let json = self.source.read(&path)?;
        DamageRelations::from_type_json(&json).map_err(|e| FixtureError::parse(path, e))
    }

    /// Fixture keys of the 18 standard types, in chart order
    pub fn type_names(&self) -> Vec<&'static str> {
        Type::all().iter().map(|t| t.api_name()).collect()
    }

    /// Load every creature in `range`, in id order
    ///
    /// Ids whose fixture is missing or malformed are logged and skipped, so
    /// the result may be shorter than the range.
    pub fn load_batch(&self, range: IdRange) -> Vec<Creature> {
        range
            .ids()
            .filter_map(|id| match self.creature(id) {
                Ok(creature) => Some(creature),
                Err(e) => {
                    tracing::warn!(id, error = %e, "Skipping creature in batch");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_fixtures::MemorySource;

    fn creature_json(id: u32, name: &str, types: &[&str]) -> String {
        let types: Vec<serde_json::Value> = types
            .iter()
            .enumerate()
            .map(|(i, t)| serde_json::json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
            .collect();
        serde_json::json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": format!("https://example.test/{}.png", id) },
            "types": types,
        })
        .to_string()
    }

    fn store() -> FixtureStore<MemorySource> {
        let source = MemorySource::new()
            .with_creature(1, creature_json(1, "bulbasaur", &["grass", "poison"]))
            .with_creature(2, creature_json(2, "ivysaur", &["grass", "poison"]))
            .with_creature(3, r#"{"id": 3, "name": "venusaur", "sprites": "#)
            .with_creature(4, creature_json(4, "charmander", &["fire"]))
            .with_creature(5, creature_json(5, "charmeleon", &["fire"]))
            .with_type("fire", r#"{"name": "fire", "damage_relations": {}}"#);
        FixtureStore::new(source)
    }

    #[test]
    fn test_creature() {
        let creature = store().creature(4).unwrap();
        assert_eq!(creature.name, "charmander");
        assert_eq!(creature.sprite_url.as_deref(), Some("https://example.test/4.png"));
    }

    #[test]
    fn test_creature_not_found() {
        let err = store().creature(151).unwrap_err();
        assert!(matches!(err, FixtureError::NotFound { ref path } if path == "pokemon/151.json"));
    }

    #[test]
    fn test_creature_malformed() {
        let err = store().creature(3).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { ref path, .. } if path == "pokemon/3.json"));
    }

    #[test]
    fn test_type_record_lookup_is_case_insensitive() {
        let err = store().type_record("FIRE").unwrap_err();
        // Present but missing its relation lists
        assert!(matches!(err, FixtureError::Parse { ref path, .. } if path == "type/fire.json"));

        let err = store().type_record("water").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_batch_skips_malformed_entry() {
        let batch = store().load_batch(IdRange::new(1, 5));

        let ids: Vec<u32> = batch.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_load_batch_past_the_end() {
        let batch = store().load_batch(IdRange::new(4, 60));
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_type_names() {
        let names = store().type_names();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "normal");
        assert_eq!(names[17], "fairy");
    }
}
