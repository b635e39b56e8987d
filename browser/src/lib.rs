//! Async loading and screen state for the Pokedex reference browser.
//!
//! [`Pokedex`] owns the fixture store, the effectiveness resolver, and the
//! image cache. Fixture reads block, so every load runs on tokio's blocking
//! pool and is delivered to a screen as an event:
//!
//! ```ignore
//! use pokedex_browser::{Pokedex, PokedexConfig, event_channel};
//! use pokedex_browser::screen::ListState;
//!
//! let dex = Pokedex::new(PokedexConfig::default());
//! let (events, mut rx) = event_channel();
//!
//! let mut list = ListState::new(dex.ranges()[0]);
//! dex.spawn_list_load(&list, &events);
//! while let Some(event) = rx.recv().await {
//!     list = list.apply(event);
//!     if !list.is_loading() {
//!         break;
//!     }
//! }
//! ```

pub mod config;
mod handle;
pub mod image;
pub mod route;
pub mod screen;

use std::sync::Arc;

use anyhow::{Context, Result};
use futures_util::future::join_all;
use pokedex_dex::display::capitalize;
use tokio::task::{self, JoinHandle};

pub use config::{ImageCacheConfig, PokedexConfig};
pub use handle::{EventSender, event_channel};
pub use image::{ImageCache, ImageError, ImageLoader, ImageSlot, LazyImageCache};
pub use route::Route;

pub use pokedex_dex::{
    Creature, DirectorySource, FixtureSource, FixtureStore, IdRange, MemorySource, Type,
    TypeEffectivenessProfile, TypeResolver,
};

use screen::{DetailEvent, ListEvent, ListState, TypeChartEvent};

type SharedSource = Arc<dyn FixtureSource>;

/// The browser's shared services
///
/// Cheap to clone; clones share the resolver cache and the image cache.
#[derive(Clone)]
pub struct Pokedex {
    config: Arc<PokedexConfig>,
    store: Arc<FixtureStore<SharedSource>>,
    resolver: Arc<TypeResolver<SharedSource>>,
    images: Arc<LazyImageCache>,
}

impl Pokedex {
    /// Read fixtures from `config.fixture_root`
    pub fn new(config: PokedexConfig) -> Self {
        let source = DirectorySource::new(config.fixture_root.clone());
        Self::with_source(config, source)
    }

    pub fn with_source(config: PokedexConfig, source: impl FixtureSource + 'static) -> Self {
        let source: SharedSource = Arc::new(source);
        let store = FixtureStore::new(source);
        let resolver = TypeResolver::new(store.clone());
        let images = LazyImageCache::new(config.image_cache.clone());

        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            resolver: Arc::new(resolver),
            images: Arc::new(images),
        }
    }

    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    /// Id pages offered by the list screen
    pub fn ranges(&self) -> Vec<IdRange> {
        self.config.ranges()
    }

    /// Load every creature in `range`, in id order
    ///
    /// Each id is read on the blocking pool; ids that fail to load are
    /// logged and left out.
    pub async fn load_batch(&self, range: IdRange) -> Vec<Creature> {
        let reads = range.ids().map(|id| {
            let store = Arc::clone(&self.store);
            task::spawn_blocking(move || (id, store.creature(id)))
        });

        let creatures: Vec<Creature> = join_all(reads)
            .await
            .into_iter()
            .filter_map(|joined| match joined {
                Ok((_, Ok(creature))) => Some(creature),
                Ok((id, Err(e))) => {
                    tracing::warn!(id, error = %e, "Skipping creature in batch");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Creature load task failed");
                    None
                }
            })
            .collect();

        tracing::debug!(range = %range, loaded = creatures.len(), "Batch loaded");
        creatures
    }

    /// Load a single creature for the detail screen
    pub async fn load_creature(&self, id: u32) -> Result<Creature> {
        let store = Arc::clone(&self.store);
        let creature = task::spawn_blocking(move || store.creature(id))
            .await
            .context("Creature load task failed")?
            .with_context(|| format!("Failed to load Pokemon #{}", id))?;
        Ok(creature)
    }

    /// Effectiveness profile of `type_name`; never fails
    pub async fn type_profile(&self, type_name: &str) -> Arc<TypeEffectivenessProfile> {
        let resolver = Arc::clone(&self.resolver);
        let name = type_name.to_string();

        match task::spawn_blocking(move || resolver.resolve(&name)).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(type_name, error = %e, "Profile task failed");
                Arc::new(TypeEffectivenessProfile::empty(capitalize(type_name)))
            }
        }
    }

    /// Profiles of all 18 standard types, in chart order
    pub async fn type_chart(&self) -> Vec<Arc<TypeEffectivenessProfile>> {
        let resolver = Arc::clone(&self.resolver);

        match task::spawn_blocking(move || resolver.chart()).await {
            Ok(chart) => chart,
            Err(e) => {
                tracing::warn!(error = %e, "Type chart task failed");
                Type::all()
                    .iter()
                    .map(|t| Arc::new(TypeEffectivenessProfile::empty(t.as_str())))
                    .collect()
            }
        }
    }

    /// The shared image cache, built on first use
    pub fn images(&self) -> &ImageCache {
        self.images.get()
    }

    pub fn image_slot(&self, url: Option<&str>, loader: &dyn ImageLoader) -> ImageSlot {
        self.images().fetch(url, loader)
    }

    /// Asset path of the icon for `t`
    pub fn type_icon(&self, t: Type) -> String {
        t.icon_path(&self.config.asset_base)
    }

    /// Start the batch load `state` is waiting for, if any
    pub fn spawn_list_load(
        &self,
        state: &ListState,
        events: &EventSender<ListEvent>,
    ) -> Option<JoinHandle<()>> {
        let (token, range) = state.pending_load()?;
        let dex = self.clone();

        Some(events.spawn(async move {
            let creatures = dex.load_batch(range).await;
            ListEvent::LoadCompleted { token, creatures }
        }))
    }

    pub fn spawn_detail_load(&self, id: u32, events: &EventSender<DetailEvent>) -> JoinHandle<()> {
        let dex = self.clone();

        events.spawn(async move {
            match dex.load_creature(id).await {
                Ok(creature) => DetailEvent::Loaded(creature),
                Err(e) => {
                    tracing::warn!(id, error = %format!("{:#}", e), "Pokemon not found");
                    DetailEvent::Missing { id }
                }
            }
        })
    }

    pub fn spawn_chart_load(&self, events: &EventSender<TypeChartEvent>) -> JoinHandle<()> {
        let dex = self.clone();
        events.spawn(async move { TypeChartEvent::ChartLoaded(dex.type_chart().await) })
    }
}
