//! Search predicates for list views

use crate::types::{Creature, Type};

/// A predicate over list items
pub trait Matches<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;
}

/// Stable filter: the matching items, in their original order
pub fn filter<'a, T, M>(items: &'a [T], matcher: &M) -> Vec<&'a T>
where
    M: Matches<T> + ?Sized,
{
    items.iter().filter(|item| matcher.matches(item)).collect()
}

/// Type-chart search: names containing `query`, case-insensitively
///
/// A blank query keeps every name.
pub fn filter_type_names<'a, S: AsRef<str>>(names: &'a [S], query: &str) -> Vec<&'a S> {
    let query = TextQuery::new(query);
    names
        .iter()
        .filter(|name| query.matches_text(name.as_ref()))
        .collect()
}

/// Free-text search box contents
///
/// A creature matches when its name contains the query (case-insensitive) or
/// when the decimal text of its id contains the query. The id test is a plain
/// substring test, so "1" matches 1, 10-19, 21, 31, and so on. A blank query
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    folded: String,
}

impl TextQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whitespace-only queries do not filter
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    fn matches_text(&self, text: &str) -> bool {
        self.is_blank() || text.to_lowercase().contains(&self.folded)
    }
}

impl Matches<Creature> for TextQuery {
    fn matches(&self, creature: &Creature) -> bool {
        self.matches_text(&creature.name) || creature.id.to_string().contains(&self.raw)
    }
}

impl Matches<Type> for TextQuery {
    fn matches(&self, t: &Type) -> bool {
        self.matches_text(t.as_str())
    }
}

/// Selected type chip: any type slot equal to the name (case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    type_name: String,
}

impl CategoryFilter {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Matches<Creature> for CategoryFilter {
    fn matches(&self, creature: &Creature) -> bool {
        creature.has_type(&self.type_name)
    }
}

/// Combined list filter; active parts are ANDed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatureFilter {
    pub text: Option<TextQuery>,
    pub category: Option<CategoryFilter>,
}

impl CreatureFilter {
    /// Filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text = Some(TextQuery::new(query));
        self
    }

    pub fn with_category(mut self, type_name: impl Into<String>) -> Self {
        self.category = Some(CategoryFilter::new(type_name));
        self
    }

    /// Check if any part would exclude items
    pub fn is_active(&self) -> bool {
        self.text.as_ref().is_some_and(|t| !t.is_blank()) || self.category.is_some()
    }
}

impl Matches<Creature> for CreatureFilter {
    fn matches(&self, creature: &Creature) -> bool {
        self.text.as_ref().is_none_or(|t| t.matches(creature))
            && self.category.as_ref().is_none_or(|c| c.matches(creature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeSlot;

    fn creature(id: u32, name: &str, types: &[&str]) -> Creature {
        Creature {
            id,
            name: name.to_string(),
            species: None,
            height: None,
            weight: None,
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: i as u8 + 1,
                    name: t.to_string(),
                })
                .collect(),
            abilities: Vec::new(),
            stats: Vec::new(),
            sprite_url: None,
            shiny_sprite_url: None,
            official_artwork_url: None,
        }
    }

    fn dex() -> Vec<Creature> {
        vec![
            creature(1, "bulbasaur", &["grass", "poison"]),
            creature(2, "ivysaur", &["grass", "poison"]),
            creature(4, "charmander", &["fire"]),
            creature(5, "charmeleon", &["fire"]),
            creature(6, "charizard", &["fire", "flying"]),
            creature(10, "caterpie", &["bug"]),
            creature(21, "spearow", &["normal", "flying"]),
            creature(25, "pikachu", &["electric"]),
            creature(26, "raichu", &["electric"]),
            creature(31, "nidoqueen", &["poison", "ground"]),
            creature(172, "pichu", &["electric"]),
            creature(947, "brambleghast", &["grass", "ghost"]),
            creature(999, "Pikachu-Copy", &["electric"]),
        ]
    }

    fn ids(items: &[&Creature]) -> Vec<u32> {
        items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_text_matches_name_case_insensitively() {
        let dex = dex();
        let result = filter(&dex, &TextQuery::new("PIKA"));

        assert_eq!(ids(&result), vec![25, 999]);
    }

    #[test]
    fn test_text_matches_id_as_decimal_substring() {
        let dex = dex();
        let result = filter(&dex, &TextQuery::new("1"));

        // bulbasaur (1), caterpie (10), spearow (21), nidoqueen (31), pichu (172)
        assert_eq!(ids(&result), vec![1, 10, 21, 31, 172]);
        assert!(!ids(&result).contains(&2));
    }

    #[test]
    fn test_text_digit_may_also_hit_names() {
        let dex = vec![creature(3, "porygon2", &["normal"]), creature(7, "squirtle", &["water"])];
        assert_eq!(ids(&filter(&dex, &TextQuery::new("2"))), vec![3]);
    }

    #[test]
    fn test_blank_text_matches_all() {
        let dex = dex();
        assert_eq!(filter(&dex, &TextQuery::new("")).len(), dex.len());
        assert_eq!(filter(&dex, &TextQuery::new("   ")).len(), dex.len());
    }

    #[test]
    fn test_category_is_exact_not_substring() {
        let dex = dex();
        let result = filter(&dex, &CategoryFilter::new("Fire"));
        assert_eq!(ids(&result), vec![4, 5, 6]);

        // "gho" must not match ghost
        assert!(filter(&dex, &CategoryFilter::new("gho")).is_empty());
    }

    #[test]
    fn test_category_matches_second_slot() {
        let dex = dex();
        let result = filter(&dex, &CategoryFilter::new("flying"));
        assert_eq!(ids(&result), vec![6, 21]);
    }

    #[test]
    fn test_text_and_category_combine_with_and() {
        let dex = dex();
        let both = CreatureFilter::new().with_text("char").with_category("fire");
        assert_eq!(ids(&filter(&dex, &both)), vec![4, 5, 6]);

        let flying_chars = CreatureFilter::new().with_text("char").with_category("flying");
        assert_eq!(ids(&filter(&dex, &flying_chars)), vec![6]);

        let none = CreatureFilter::new().with_text("pika").with_category("fire");
        assert!(filter(&dex, &none).is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let mut dex = dex();
        dex.reverse();
        let result = filter(&dex, &CategoryFilter::new("electric"));
        assert_eq!(ids(&result), vec![999, 172, 26, 25]);
    }

    #[test]
    fn test_filter_is_active() {
        assert!(!CreatureFilter::new().is_active());
        assert!(!CreatureFilter::new().with_text(" ").is_active());
        assert!(CreatureFilter::new().with_text("a").is_active());
        assert!(CreatureFilter::new().with_category("ice").is_active());
    }

    #[test]
    fn test_type_search() {
        let names = ["Normal", "Fire", "Water", "Electric", "Grass", "Ice"];
        let result = filter_type_names(&names, "IC");
        assert_eq!(result, vec![&"Electric", &"Ice"]);

        assert_eq!(filter_type_names(&names, "").len(), names.len());

        let types = filter(Type::all(), &TextQuery::new("ro"));
        assert_eq!(types, vec![&Type::Ground, &Type::Rock]);
    }
}
