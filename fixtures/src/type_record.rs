//! Per-type fixture records (`type/{name}.json`)

use serde_json::Value;

use crate::DecodeError;
use crate::decode::Object;

/// A `{name, url}` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub name: String,
    pub url: Option<String>,
}

impl NamedRef {
    pub(crate) fn decode(obj: &Object<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: obj.str("name")?,
            url: obj.opt_str("url")?,
        })
    }
}

/// The six damage relation lists of a type
///
/// `*_from` lists describe attacks landing on this type, `*_to` lists describe
/// this type's attacks landing on others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageRelations {
    pub double_damage_from: Vec<NamedRef>,
    pub half_damage_from: Vec<NamedRef>,
    pub no_damage_from: Vec<NamedRef>,
    pub double_damage_to: Vec<NamedRef>,
    pub half_damage_to: Vec<NamedRef>,
    pub no_damage_to: Vec<NamedRef>,
}

impl DamageRelations {
    /// Read only the `damage_relations` object of a type fixture
    ///
    /// The rest of the document (`id`, `name`, the `pokemon` member list) is
    /// not looked at, so a bad member entry cannot hide the relations.
    pub fn from_type_json(json: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        let root = Object::root(&value)?;
        Self::decode(&root.object("damage_relations")?)
    }

    /// The five lists a profile is built from are required; `no_damage_to`
    /// may be absent
    fn decode(obj: &Object<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            double_damage_from: refs(obj.array("double_damage_from")?)?,
            half_damage_from: refs(obj.array("half_damage_from")?)?,
            no_damage_from: refs(obj.array("no_damage_from")?)?,
            double_damage_to: refs(obj.array("double_damage_to")?)?,
            half_damage_to: refs(obj.array("half_damage_to")?)?,
            no_damage_to: refs(obj.opt_array("no_damage_to")?)?,
        })
    }

    /// Check if every relation list is empty
    pub fn is_empty(&self) -> bool {
        self.double_damage_from.is_empty()
            && self.half_damage_from.is_empty()
            && self.no_damage_from.is_empty()
            && self.double_damage_to.is_empty()
            && self.half_damage_to.is_empty()
            && self.no_damage_to.is_empty()
    }
}

fn refs(entries: Vec<Object<'_>>) -> Result<Vec<NamedRef>, DecodeError> {
    entries.iter().map(NamedRef::decode).collect()
}

/// A creature listed as a member of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMember {
    pub pokemon: NamedRef,
    pub slot: u8,
}

/// Decoded type fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub damage_relations: DamageRelations,
    pub pokemon: Vec<TypeMember>,
}

impl TypeRecord {
    /// Decode a type fixture from its JSON text
    pub fn decode(json: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Decode a type fixture from an already parsed JSON value
    ///
    /// `damage_relations` and its lists are required (except `no_damage_to`);
    /// empty lists are fine. Member entries must be complete.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let root = Object::root(value)?;

        let damage_relations = DamageRelations::decode(&root.object("damage_relations")?)?;

        let pokemon = root
            .opt_array("pokemon")?
            .iter()
            .map(|member| -> Result<TypeMember, DecodeError> {
                Ok(TypeMember {
                    pokemon: NamedRef::decode(&member.object("pokemon")?)?,
                    slot: member.u8("slot")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: root.opt_u32("id")?,
            name: root.opt_str("name")?,
            damage_relations,
            pokemon,
        })
    }
}
