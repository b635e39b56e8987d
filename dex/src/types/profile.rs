//! Per-type effectiveness profile

/// What a type is weak to, resists, and hits hard, as listed by its fixture
///
/// Every field holds display-form type names in fixture order. The fields are
/// taken independently from the fixture's relation lists: they may overlap,
/// and nothing forces one type's profile to mirror another's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeEffectivenessProfile {
    pub type_name: String,

    /// Attacks of these types deal double damage to this type
    pub weak_against: Vec<String>,

    /// Attacks of these types deal half damage to this type
    pub resistant_to: Vec<String>,

    /// Attacks of these types deal no damage to this type
    pub immune_to: Vec<String>,

    /// This type's attacks deal double damage to these types
    pub super_effective_against: Vec<String>,

    /// This type's attacks deal half damage to these types
    pub not_very_effective_against: Vec<String>,
}

impl TypeEffectivenessProfile {
    /// Profile with every relation empty
    pub fn empty(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Check if all five relations are empty
    pub fn is_empty(&self) -> bool {
        self.weak_against.is_empty()
            && self.resistant_to.is_empty()
            && self.immune_to.is_empty()
            && self.super_effective_against.is_empty()
            && self.not_very_effective_against.is_empty()
    }

    /// Relations paired with their section titles, in dialog order: attacking
    /// relations first, then defending ones
    pub fn sections(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Super Effective Against", self.super_effective_against.as_slice()),
            ("Not Very Effective Against", self.not_very_effective_against.as_slice()),
            ("Weak Against", self.weak_against.as_slice()),
            ("Resistant To", self.resistant_to.as_slice()),
            ("Immune To", self.immune_to.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = TypeEffectivenessProfile::empty("Ghost");
        assert_eq!(profile.type_name, "Ghost");
        assert!(profile.is_empty());
        assert!(profile.sections().iter().all(|(_, names)| names.is_empty()));
    }

    #[test]
    fn test_sections_order() {
        let profile = TypeEffectivenessProfile {
            type_name: "Ground".to_string(),
            immune_to: vec!["Electric".to_string()],
            ..Default::default()
        };

        let titles: Vec<&str> = profile.sections().iter().map(|(title, _)| *title).collect();
        assert_eq!(
            titles,
            [
                "Super Effective Against",
                "Not Very Effective Against",
                "Weak Against",
                "Resistant To",
                "Immune To",
            ]
        );
        assert_eq!(profile.sections()[4].1, ["Electric".to_string()]);
        assert!(!profile.is_empty());
    }
}
