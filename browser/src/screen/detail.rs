//! Single-creature detail screen

use pokedex_dex::display::{self, StatTier};
use pokedex_dex::{Creature, Type};

#[derive(Debug, Clone)]
pub enum DetailEvent {
    Loaded(Creature),

    /// The fixture for `id` is absent or malformed
    Missing { id: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading { id: u32 },
    Loaded(Creature),
    NotFound { id: u32 },
}

impl DetailState {
    pub fn new(id: u32) -> Self {
        DetailState::Loading { id }
    }

    /// Id of the creature this screen was opened for
    pub fn id(&self) -> u32 {
        match self {
            DetailState::Loading { id } | DetailState::NotFound { id } => *id,
            DetailState::Loaded(creature) => creature.id,
        }
    }

    /// Apply a load result; results for another id are ignored
    pub fn apply(&self, event: DetailEvent) -> DetailState {
        let id = self.id();

        match event {
            DetailEvent::Loaded(creature) if creature.id == id => DetailState::Loaded(creature),
            DetailEvent::Missing { id: missing } if missing == id => DetailState::NotFound { id },
            _ => {
                tracing::debug!(id, "Ignoring detail result for another creature");
                self.clone()
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    pub fn creature(&self) -> Option<&Creature> {
        match self {
            DetailState::Loaded(creature) => Some(creature),
            _ => None,
        }
    }

    pub fn not_found_message(&self) -> Option<String> {
        match self {
            DetailState::NotFound { id } => Some(format!("Pokemon #{} not found", id)),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<DetailView> {
        self.creature().map(DetailView::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChip {
    pub label: String,
    /// `0xRRGGBB`
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub label: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: String,
    pub base: u8,
    /// Bar fill in `0.0..=1.0`
    pub fraction: f32,
    pub tier: StatTier,
}

/// Everything the detail screen draws for a loaded creature
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub number: String,
    pub artwork_url: Option<String>,
    pub types: Vec<TypeChip>,
    pub height: String,
    pub weight: String,
    pub abilities: Vec<AbilityRow>,
    pub stats: Vec<StatRow>,
    pub total: u32,
}

impl DetailView {
    pub fn new(creature: &Creature) -> Self {
        let types = creature
            .type_names()
            .map(|name| TypeChip {
                label: display::capitalize(name),
                color: Type::color_of(name),
            })
            .collect();

        let abilities = creature
            .abilities
            .iter()
            .map(|a| AbilityRow {
                label: a.display_name(),
                hidden: a.is_hidden,
            })
            .collect();

        let stats = creature
            .stats
            .iter()
            .map(|s| StatRow {
                label: s.label(),
                base: s.base,
                fraction: display::stat_fraction(s.base as u32),
                tier: StatTier::of(s.base as u32),
            })
            .collect();

        Self {
            title: creature.display_name(),
            number: display::dex_number(creature.id),
            artwork_url: creature.artwork_url().map(str::to_string),
            types,
            height: display::format_height(creature.height),
            weight: display::format_weight(creature.weight),
            abilities,
            stats,
            total: creature.base_stat_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_dex::{AbilitySlot, StatSlot, TypeSlot};

    fn pikachu() -> Creature {
        Creature {
            id: 25,
            name: "pikachu".to_string(),
            species: Some("pikachu".to_string()),
            height: Some(4),
            weight: Some(60),
            types: vec![TypeSlot {
                slot: 1,
                name: "electric".to_string(),
            }],
            abilities: vec![
                AbilitySlot {
                    name: "static".to_string(),
                    is_hidden: false,
                    slot: 1,
                },
                AbilitySlot {
                    name: "lightning-rod".to_string(),
                    is_hidden: true,
                    slot: 3,
                },
            ],
            stats: vec![
                StatSlot {
                    name: "hp".to_string(),
                    base: 35,
                    effort: 0,
                },
                StatSlot {
                    name: "speed".to_string(),
                    base: 90,
                    effort: 2,
                },
            ],
            sprite_url: Some("https://example.test/25.png".to_string()),
            shiny_sprite_url: None,
            official_artwork_url: None,
        }
    }

    #[test]
    fn test_load_for_matching_id() {
        let state = DetailState::new(25);
        assert!(state.is_loading());

        let loaded = state.apply(DetailEvent::Loaded(pikachu()));
        assert_eq!(loaded.creature().map(|c| c.id), Some(25));
        assert_eq!(loaded.not_found_message(), None);
    }

    #[test]
    fn test_result_for_other_id_is_ignored() {
        let state = DetailState::new(1);
        assert_eq!(state.apply(DetailEvent::Loaded(pikachu())), DetailState::Loading { id: 1 });
        assert_eq!(state.apply(DetailEvent::Missing { id: 2 }), DetailState::Loading { id: 1 });
    }

    #[test]
    fn test_missing_fixture() {
        let state = DetailState::new(9999).apply(DetailEvent::Missing { id: 9999 });
        assert_eq!(state.id(), 9999);
        assert!(state.view().is_none());
        assert_eq!(state.not_found_message().as_deref(), Some("Pokemon #9999 not found"));
    }

    #[test]
    fn test_view() {
        let view = DetailView::new(&pikachu());

        assert_eq!(view.title, "Pikachu");
        assert_eq!(view.number, "#025");
        assert_eq!(view.artwork_url.as_deref(), Some("https://example.test/25.png"));
        assert_eq!(
            view.types,
            vec![TypeChip {
                label: "Electric".to_string(),
                color: Type::Electric.color(),
            }]
        );
        assert_eq!(view.height, "0.4 m");
        assert_eq!(view.weight, "6.0 kg");
        assert_eq!(view.abilities[1].label, "Lightning rod");
        assert!(view.abilities[1].hidden);

        assert_eq!(view.stats[0].label, "HP");
        assert_eq!(view.stats[0].tier, StatTier::Poor);
        assert_eq!(view.stats[1].tier, StatTier::Good);
        assert!((view.stats[1].fraction - 90.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(view.total, 125);
    }

    #[test]
    fn test_unknown_type_chip_is_grey() {
        let mut creature = pikachu();
        creature.types[0].name = "shadow".to_string();

        let view = DetailView::new(&creature);
        assert_eq!(view.types[0].color, 0x808080);
        assert_eq!(view.types[0].label, "Shadow");
    }
}
