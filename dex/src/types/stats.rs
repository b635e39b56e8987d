//! Base stat kinds

/// The six base stats, in the order fixtures list them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Highest possible base stat
    pub const MAX_BASE: u8 = 255;

    /// Parse a fixture stat name such as "special-attack"
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    /// Label shown next to the stat bar
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Attack",
            Stat::SpecialDefense => "Sp. Defense",
            Stat::Speed => "Speed",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_from_name() {
        assert_eq!(Stat::from_name("hp"), Some(Stat::Hp));
        assert_eq!(Stat::from_name("special-defense"), Some(Stat::SpecialDefense));
        assert_eq!(Stat::from_name("accuracy"), None);
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(Stat::Hp.label(), "HP");
        assert_eq!(Stat::SpecialAttack.label(), "Sp. Attack");
        assert_eq!(Stat::Speed.to_string(), "Speed");
    }

    #[test]
    fn test_api_names_round_trip() {
        for stat in Stat::ALL {
            assert_eq!(Stat::from_name(stat.api_name()), Some(stat));
        }
    }
}
