//! Image cache shared by every screen
//!
//! The cache is owned by the [`Pokedex`](crate::Pokedex) that builds it and is
//! created lazily on first use. Fetching image bytes is left to an
//! [`ImageLoader`] supplied by the caller.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;

use crate::config::ImageCacheConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Failed to load image {url}: {reason}")]
    LoadFailure { url: String, reason: String },
}

/// Fetches image bytes for a URL or asset path
pub trait ImageLoader: Send + Sync {
    fn load(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// What a view should draw in an image slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Ready(Arc<[u8]>),
    /// The load failed; draw the placeholder glyph
    Placeholder,
    /// The record has no image reference
    Missing,
}

struct CacheInner {
    entries: HashMap<String, Arc<[u8]>>,
    /// Least recently used first
    order: VecDeque<String>,
    bytes: usize,
}

/// Byte-budgeted, least-recently-used cache of image bytes
pub struct ImageCache {
    budget: usize,
    inner: Mutex<CacheInner>,
}

impl ImageCache {
    pub fn new(config: &ImageCacheConfig) -> Self {
        Self::with_budget(config.memory_budget())
    }

    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
                bytes: 0,
            }),
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn get(&self, url: &str) -> Option<Arc<[u8]>> {
        let mut inner = self.inner.lock().ok()?;
        let bytes = inner.entries.get(url).cloned()?;
        touch(&mut inner.order, url);
        Some(bytes)
    }

    /// Store bytes, evicting the least recently used entries to stay in budget
    ///
    /// Images larger than the whole budget are not cached.
    pub fn insert(&self, url: &str, bytes: Arc<[u8]>) {
        if bytes.len() > self.budget {
            tracing::debug!(url, size = bytes.len(), "Image exceeds cache budget");
            return;
        }
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };

        if let Some(old) = inner.entries.remove(url) {
            inner.bytes -= old.len();
            inner.order.retain(|u| u != url);
        }

        while inner.bytes + bytes.len() > self.budget {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            if let Some(evicted) = inner.entries.remove(&oldest) {
                inner.bytes -= evicted.len();
            }
        }

        inner.bytes += bytes.len();
        inner.entries.insert(url.to_string(), bytes);
        inner.order.push_back(url.to_string());
    }

    /// Cached bytes for `url`, loading them on a miss
    ///
    /// A failed load is logged and shown as a placeholder; it is not cached,
    /// so a later request tries again.
    pub fn fetch(&self, url: Option<&str>, loader: &dyn ImageLoader) -> ImageSlot {
        let Some(url) = url else {
            return ImageSlot::Missing;
        };
        if let Some(bytes) = self.get(url) {
            return ImageSlot::Ready(bytes);
        }

        match loader.load(url) {
            Ok(bytes) => {
                let bytes: Arc<[u8]> = bytes.into();
                self.insert(url, Arc::clone(&bytes));
                ImageSlot::Ready(bytes)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Showing image placeholder");
                ImageSlot::Placeholder
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes currently held
    pub fn size(&self) -> usize {
        self.inner.lock().map(|i| i.bytes).unwrap_or(0)
    }
}

fn touch(order: &mut VecDeque<String>, url: &str) {
    if let Some(pos) = order.iter().position(|u| u == url)
        && let Some(entry) = order.remove(pos)
    {
        order.push_back(entry);
    }
}

/// An [`ImageCache`] built on first access
///
/// Concurrent first accesses build the cache exactly once.
pub struct LazyImageCache {
    config: ImageCacheConfig,
    cell: OnceLock<ImageCache>,
    builds: AtomicUsize,
}

impl LazyImageCache {
    pub fn new(config: ImageCacheConfig) -> Self {
        Self {
            config,
            cell: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn get(&self) -> &ImageCache {
        self.cell.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(budget = self.config.memory_budget(), "Building image cache");
            ImageCache::new(&self.config)
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times the cache has been constructed (0 or 1)
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
