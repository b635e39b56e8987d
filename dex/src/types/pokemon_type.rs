//! The Pokemon type catalogue

/// Pokemon types (18 types as of Gen 6+), in type-chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    fn info(&self) -> &'static TypeInfo {
        &TYPE_INFO[*self as usize]
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.api_name().eq_ignore_ascii_case(s))
    }

    /// Display name, e.g. "Fire"
    pub fn as_str(&self) -> &'static str {
        self.info().label
    }

    /// Fixture key, e.g. "fire"
    pub fn api_name(&self) -> &'static str {
        self.info().key
    }

    /// Badge colour as `0xRRGGBB`
    pub fn color(&self) -> u32 {
        self.info().color
    }

    /// Badge colour for an arbitrary type name; unknown names get the
    /// neutral grey used for unselected chips
    pub fn color_of(name: &str) -> u32 {
        Self::from_name(name).map(|t| t.color()).unwrap_or(0x808080)
    }

    /// Icon reference under the bundled asset root
    pub fn icon_path(&self, asset_base: &str) -> String {
        format!("{}type/{}.png", asset_base, self.api_name())
    }
}

struct TypeInfo {
    key: &'static str,
    label: &'static str,
    color: u32,
}

const fn info(key: &'static str, label: &'static str, color: u32) -> TypeInfo {
    TypeInfo { key, label, color }
}

/// Indexed by the `Type` discriminant
const TYPE_INFO: [TypeInfo; 18] = [
    info("normal", "Normal", 0xA8A878),
    info("fire", "Fire", 0xF08030),
    info("water", "Water", 0x6890F0),
    info("electric", "Electric", 0xF8D030),
    info("grass", "Grass", 0x78C850),
    info("ice", "Ice", 0x98D8D8),
    info("fighting", "Fighting", 0xC03028),
    info("poison", "Poison", 0xA040A0),
    info("ground", "Ground", 0xE0C068),
    info("flying", "Flying", 0xA890F0),
    info("psychic", "Psychic", 0xF85888),
    info("bug", "Bug", 0xA8B820),
    info("rock", "Rock", 0xB8A038),
    info("ghost", "Ghost", 0x705898),
    info("dragon", "Dragon", 0x7038F8),
    info("dark", "Dark", 0x705848),
    info("steel", "Steel", 0xB8B8D0),
    info("fairy", "Fairy", 0xEE99AC),
];

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_name("Psychic"), Some(Type::Psychic));
        assert_eq!(Type::from_name("shadow"), None);
    }

    #[test]
    fn test_type_names_round_trip() {
        for t in Type::all() {
            assert_eq!(Type::from_name(t.as_str()), Some(*t));
            assert_eq!(Type::from_name(t.api_name()), Some(*t));
            assert_eq!(t.api_name(), t.as_str().to_lowercase());
        }
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Type::Fire.color(), 0xF08030);
        assert_eq!(Type::color_of("FAIRY"), 0xEE99AC);
        assert_eq!(Type::color_of("unknown"), 0x808080);
    }

    #[test]
    fn test_icon_path() {
        assert_eq!(Type::Ghost.icon_path("asset:///"), "asset:///type/ghost.png");
        assert_eq!(Type::Ghost.to_string(), "Ghost");
    }
}
