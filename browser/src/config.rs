use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pokedex_dex::IdRange;
use serde::Deserialize;

/// Settings for the browser; every field has a default
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    /// Directory holding `pokemon/` and `type/` fixtures
    pub fixture_root: PathBuf,

    /// Highest creature id in the bundled set
    pub max_creature_id: u32,

    /// Ids per list page
    pub page_size: u32,

    /// Prefix for bundled image assets such as type icons
    pub asset_base: String,

    pub image_cache: ImageCacheConfig,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            fixture_root: PathBuf::from("assets"),
            max_creature_id: 1025,
            page_size: 60,
            asset_base: "asset:///".to_string(),
            image_cache: ImageCacheConfig::default(),
        }
    }
}

impl PokedexConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid config JSON")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// List pages covering every bundled id
    pub fn ranges(&self) -> Vec<IdRange> {
        IdRange::paginate(self.max_creature_id, self.page_size)
    }
}

/// In-memory image cache sizing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageCacheConfig {
    /// Share of the memory pool the cache may use
    pub memory_fraction: f64,

    /// Memory the fraction is taken from
    pub memory_pool_bytes: u64,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            memory_fraction: 0.25,
            memory_pool_bytes: 512 * 1024 * 1024,
        }
    }
}

impl ImageCacheConfig {
    /// Byte budget of the cache
    pub fn memory_budget(&self) -> usize {
        let fraction = self.memory_fraction.clamp(0.0, 1.0);
        (self.memory_pool_bytes as f64 * fraction) as usize
    }
}
