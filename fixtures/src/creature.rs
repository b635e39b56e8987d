//! Per-creature fixture records (`pokemon/{id}.json`)

use serde_json::Value;

use crate::DecodeError;
use crate::decode::Object;
use crate::type_record::NamedRef;

/// One entry of a creature's `types` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlotRecord {
    pub slot: u8,
    pub type_ref: NamedRef,
}

/// One entry of a creature's `abilities` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlotRecord {
    pub ability: NamedRef,
    pub is_hidden: bool,
    pub slot: u8,
}

/// One entry of a creature's `stats` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSlotRecord {
    pub base_stat: u8,
    pub effort: u8,
    pub stat: NamedRef,
}

/// The image references of a creature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpritesRecord {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    /// `sprites.other["official-artwork"].front_default`
    pub official_artwork: Option<String>,
}

impl SpritesRecord {
    fn decode(obj: &Object<'_>) -> Result<Self, DecodeError> {
        let official_artwork = match obj.opt_object("other")? {
            Some(other) => match other.opt_object("official-artwork")? {
                Some(artwork) => artwork.opt_str("front_default")?,
                None => None,
            },
            None => None,
        };

        Ok(Self {
            front_default: obj.nullable_str("front_default")?,
            front_shiny: obj.opt_str("front_shiny")?,
            back_default: obj.opt_str("back_default")?,
            official_artwork,
        })
    }
}

/// Decoded creature fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    pub species: Option<NamedRef>,
    /// Tenths of a metre
    pub height: Option<u32>,
    /// Tenths of a kilogram
    pub weight: Option<u32>,
    pub types: Vec<TypeSlotRecord>,
    pub abilities: Vec<AbilitySlotRecord>,
    pub stats: Vec<StatSlotRecord>,
    pub sprites: SpritesRecord,
}

impl CreatureRecord {
    /// Decode a creature fixture from its JSON text
    pub fn decode(json: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Decode a creature fixture from an already parsed JSON value
    ///
    /// Required: `id`, `name`, `sprites` and the `sprites.front_default` key
    /// (which may be `null`). Everything else is optional, but entries that
    /// are present must be complete, except that an ability's `is_hidden`
    /// defaults to `false` and its `slot` to 0.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let root = Object::root(value)?;

        let species = match root.opt_object("species")? {
            Some(obj) => Some(NamedRef::decode(&obj)?),
            None => None,
        };

        let types = root
            .opt_array("types")?
            .iter()
            .map(|entry| -> Result<TypeSlotRecord, DecodeError> {
                Ok(TypeSlotRecord {
                    slot: entry.u8("slot")?,
                    type_ref: NamedRef::decode(&entry.object("type")?)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let abilities = root
            .opt_array("abilities")?
            .iter()
            .map(|entry| -> Result<AbilitySlotRecord, DecodeError> {
                Ok(AbilitySlotRecord {
                    ability: NamedRef::decode(&entry.object("ability")?)?,
                    is_hidden: entry.opt_bool("is_hidden")?.unwrap_or(false),
                    slot: entry.opt_u8("slot")?.unwrap_or(0),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let stats = root
            .opt_array("stats")?
            .iter()
            .map(|entry| -> Result<StatSlotRecord, DecodeError> {
                Ok(StatSlotRecord {
                    base_stat: entry.u8("base_stat")?,
                    effort: entry.u8("effort")?,
                    stat: NamedRef::decode(&entry.object("stat")?)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: root.u32("id")?,
            name: root.str("name")?,
            species,
            height: root.opt_u32("height")?,
            weight: root.opt_u32("weight")?,
            types,
            abilities,
            stats,
            sprites: SpritesRecord::decode(&root.object("sprites")?)?,
        })
    }
}
