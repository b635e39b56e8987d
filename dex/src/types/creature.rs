//! Creature records as the views see them

use pokedex_fixtures::CreatureRecord;

use super::pokemon_type::Type;
use super::stats::Stat;
use crate::display;

/// One of a creature's types; `slot` is the display position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeSlot {
    pub slot: u8,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AbilitySlot {
    pub name: String,
    pub is_hidden: bool,
    pub slot: u8,
}

impl AbilitySlot {
    pub fn display_name(&self) -> String {
        display::hyphenated_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatSlot {
    pub name: String,
    /// Base value (0-255)
    pub base: u8,
    /// Effort value yield
    pub effort: u8,
}

impl StatSlot {
    /// Known stat kind, if the fixture name is one of the six
    pub fn stat(&self) -> Option<Stat> {
        Stat::from_name(&self.name)
    }

    pub fn label(&self) -> String {
        display::stat_label(&self.name)
    }
}

/// One species record, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub species: Option<String>,

    /// Tenths of a metre
    pub height: Option<u32>,

    /// Tenths of a kilogram
    pub weight: Option<u32>,

    /// Sorted by slot
    pub types: Vec<TypeSlot>,

    /// Sorted by slot
    pub abilities: Vec<AbilitySlot>,

    /// Fixture order
    pub stats: Vec<StatSlot>,

    pub sprite_url: Option<String>,
    pub shiny_sprite_url: Option<String>,
    pub official_artwork_url: Option<String>,
}

impl Creature {
    /// Build from a decoded fixture record
    pub fn from_record(record: CreatureRecord) -> Self {
        let mut types: Vec<TypeSlot> = record
            .types
            .into_iter()
            .map(|t| TypeSlot {
                slot: t.slot,
                name: t.type_ref.name,
            })
            .collect();
        types.sort_by_key(|t| t.slot);

        let mut abilities: Vec<AbilitySlot> = record
            .abilities
            .into_iter()
            .map(|a| AbilitySlot {
                name: a.ability.name,
                is_hidden: a.is_hidden,
                slot: a.slot,
            })
            .collect();
        abilities.sort_by_key(|a| a.slot);

        let stats = record
            .stats
            .into_iter()
            .map(|s| StatSlot {
                name: s.stat.name,
                base: s.base_stat,
                effort: s.effort,
            })
            .collect();

        Self {
            id: record.id,
            name: record.name,
            species: record.species.map(|s| s.name),
            height: record.height,
            weight: record.weight,
            types,
            abilities,
            stats,
            sprite_url: record.sprites.front_default,
            shiny_sprite_url: record.sprites.front_shiny,
            official_artwork_url: record.sprites.official_artwork,
        }
    }

    /// Name with its first letter uppercased
    pub fn display_name(&self) -> String {
        display::capitalize(&self.name)
    }

    /// Type names in slot order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    /// Check if any type slot equals `name` (case-insensitive, exact)
    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Types that belong to the standard catalogue, in slot order
    pub fn known_types(&self) -> Vec<Type> {
        self.types
            .iter()
            .filter_map(|t| Type::from_name(&t.name))
            .collect()
    }

    /// Largest image available: official artwork, then the front sprite
    pub fn artwork_url(&self) -> Option<&str> {
        self.official_artwork_url
            .as_deref()
            .or(self.sprite_url.as_deref())
    }

    pub fn base_stat(&self, stat: Stat) -> Option<u8> {
        self.stats
            .iter()
            .find(|s| s.stat() == Some(stat))
            .map(|s| s.base)
    }

    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base as u32).sum()
    }

    pub fn hidden_ability(&self) -> Option<&AbilitySlot> {
        self.abilities.iter().find(|a| a.is_hidden)
    }
}
