//! Display strings shared by list, detail, and chart views

use crate::types::Stat;

/// Uppercase the first character and keep the rest as-is
///
/// ```
/// assert_eq!(pokedex_dex::display::capitalize("mr-mime"), "Mr-mime");
/// assert_eq!(pokedex_dex::display::capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ability or move name for display: "solar-power" becomes "Solar power"
pub fn hyphenated_name(s: &str) -> String {
    capitalize(&s.replace('-', " "))
}

/// Label for a fixture stat name, falling back to the hyphenated form
pub fn stat_label(name: &str) -> String {
    match Stat::from_name(name) {
        Some(stat) => stat.label().to_string(),
        None => hyphenated_name(name),
    }
}

/// Fill fraction of a stat bar (`base / 255`, clamped)
pub fn stat_fraction(base: u32) -> f32 {
    (base as f32 / Stat::MAX_BASE as f32).clamp(0.0, 1.0)
}

/// Colour band of a base stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    Excellent,
    Great,
    Good,
    Fair,
    Poor,
}

impl StatTier {
    pub fn of(base: u32) -> Self {
        match base {
            150.. => StatTier::Excellent,
            100..=149 => StatTier::Great,
            70..=99 => StatTier::Good,
            50..=69 => StatTier::Fair,
            _ => StatTier::Poor,
        }
    }

    /// Bar colour as `0xRRGGBB`
    pub fn color(&self) -> u32 {
        match self {
            StatTier::Excellent => 0x4CAF50,
            StatTier::Great => 0x8BC34A,
            StatTier::Good => 0xFFEB3B,
            StatTier::Fair => 0xFF9800,
            StatTier::Poor => 0xF44336,
        }
    }
}

/// Height in tenths of a metre, shown as "0.7 m"; missing counts as zero
pub fn format_height(decimetres: Option<u32>) -> String {
    format!("{:.1} m", decimetres.unwrap_or(0) as f64 / 10.0)
}

/// Weight in tenths of a kilogram, shown as "6.9 kg"; missing counts as zero
pub fn format_weight(hectograms: Option<u32>) -> String {
    format!("{:.1} kg", hectograms.unwrap_or(0) as f64 / 10.0)
}

/// Zero-padded dex number, e.g. "#025"
pub fn dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fire"), "Fire");
        assert_eq!(capitalize("Fire"), "Fire");
        assert_eq!(capitalize("fIRE"), "FIRE");
        assert_eq!(capitalize("ß"), "SS");
    }

    #[test]
    fn test_hyphenated_name() {
        assert_eq!(hyphenated_name("solar-power"), "Solar power");
        assert_eq!(hyphenated_name("overgrow"), "Overgrow");
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("hp"), "HP");
        assert_eq!(stat_label("special-attack"), "Sp. Attack");
        assert_eq!(stat_label("evasion-rate"), "Evasion rate");
    }

    #[test]
    fn test_stat_fraction() {
        assert_eq!(stat_fraction(0), 0.0);
        assert_eq!(stat_fraction(255), 1.0);
        assert_eq!(stat_fraction(400), 1.0);
        assert!((stat_fraction(51) - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_stat_tier_boundaries() {
        assert_eq!(StatTier::of(150), StatTier::Excellent);
        assert_eq!(StatTier::of(149), StatTier::Great);
        assert_eq!(StatTier::of(100), StatTier::Great);
        assert_eq!(StatTier::of(70), StatTier::Good);
        assert_eq!(StatTier::of(50), StatTier::Fair);
        assert_eq!(StatTier::of(49), StatTier::Poor);
        assert_eq!(StatTier::Poor.color(), 0xF44336);
    }

    #[test]
    fn test_measurements() {
        assert_eq!(format_height(Some(7)), "0.7 m");
        assert_eq!(format_weight(Some(69)), "6.9 kg");
        assert_eq!(format_height(None), "0.0 m");
        assert_eq!(format_weight(Some(9999)), "999.9 kg");
    }

    #[test]
    fn test_dex_number() {
        assert_eq!(dex_number(25), "#025");
        assert_eq!(dex_number(1025), "#1025");
    }
}
