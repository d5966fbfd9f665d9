use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Budget used when the pool is touched before [`initialize`] runs.
pub const DEFAULT_POOL_BYTES: usize = 10 * 1024 * 1024;

/// Pool configuration for cached frame pixmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePoolOpts {
    /// Maximum bytes retained across all buckets.
    pub max_pool_bytes: usize,
    /// Maximum number of retained pixmaps per `(w, h)` bucket.
    pub max_pixmaps_per_bucket: usize,
}

impl Default for FramePoolOpts {
    fn default() -> Self {
        Self {
            max_pool_bytes: DEFAULT_POOL_BYTES,
            max_pixmaps_per_bucket: 4,
        }
    }
}

impl FramePoolOpts {
    /// Default bucket cap with a custom byte budget.
    pub fn with_budget(max_pool_bytes: usize) -> Self {
        Self {
            max_pool_bytes,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PixmapKey {
    w: u16,
    h: u16,
}

impl PixmapKey {
    fn byte_len(self) -> usize {
        (self.w as usize)
            .saturating_mul(self.h as usize)
            .saturating_mul(4)
    }
}

/// Counters describing pool behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FramePoolStats {
    /// Pixmaps currently held for reuse.
    pub retained_pixmaps: usize,
    /// Bytes currently held for reuse.
    pub retained_bytes: usize,
    /// Fresh allocations made because no pooled pixmap fit.
    pub alloc_pixmaps: u64,
    /// Bytes of fresh allocations.
    pub alloc_bytes: u64,
    /// Released pixmaps that were dropped because a cap was hit.
    pub dropped_on_release: u64,
}

/// Bounded pool of CPU pixmaps keyed by size.
///
/// Borrow/release happens per canvas, never per pixel.
pub struct FramePool {
    opts: FramePoolOpts,
    stats: FramePoolStats,
    buckets: HashMap<PixmapKey, Vec<vello_cpu::Pixmap>>,
}

impl FramePool {
    /// Create an empty pool.
    pub fn new(opts: FramePoolOpts) -> Self {
        Self {
            opts,
            stats: FramePoolStats::default(),
            buckets: HashMap::new(),
        }
    }

    /// Configuration this pool was created with.
    pub fn opts(&self) -> FramePoolOpts {
        self.opts
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> FramePoolStats {
        self.stats.clone()
    }

    /// Take a transparent pixmap of the given size, reusing a pooled one when available.
    pub fn borrow(&mut self, w: u16, h: u16) -> vello_cpu::Pixmap {
        let key = PixmapKey { w, h };
        if let Some(mut p) = self.buckets.get_mut(&key).and_then(Vec::pop) {
            self.stats.retained_pixmaps = self.stats.retained_pixmaps.saturating_sub(1);
            self.stats.retained_bytes = self.stats.retained_bytes.saturating_sub(key.byte_len());
            p.data_as_u8_slice_mut().fill(0);
            return p;
        }

        self.stats.alloc_pixmaps = self.stats.alloc_pixmaps.saturating_add(1);
        self.stats.alloc_bytes = self.stats.alloc_bytes.saturating_add(key.byte_len() as u64);
        vello_cpu::Pixmap::new(w, h)
    }

    /// Return a pixmap for reuse; it is dropped instead when a cap would be exceeded.
    pub fn release(&mut self, pixmap: vello_cpu::Pixmap) {
        if self.opts.max_pool_bytes == 0 || self.opts.max_pixmaps_per_bucket == 0 {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return;
        }

        let key = PixmapKey {
            w: pixmap.width(),
            h: pixmap.height(),
        };
        let bytes = key.byte_len();

        if self.stats.retained_bytes.saturating_add(bytes) > self.opts.max_pool_bytes {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return;
        }

        let bucket = self.buckets.entry(key).or_default();
        if bucket.len() >= self.opts.max_pixmaps_per_bucket {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return;
        }

        bucket.push(pixmap);
        self.stats.retained_pixmaps = self.stats.retained_pixmaps.saturating_add(1);
        self.stats.retained_bytes = self.stats.retained_bytes.saturating_add(bytes);
    }
}

static GLOBAL_POOL: OnceLock<Mutex<FramePool>> = OnceLock::new();

/// Initialize the process-wide frame pool.
///
/// Only the first call has an effect and returns `true`; later calls return `false` and keep the
/// existing pool. Widgets call this on construction, so hosts that want a different budget call it
/// before creating any widget.
pub fn initialize(opts: FramePoolOpts) -> bool {
    let mut fresh = false;
    GLOBAL_POOL.get_or_init(|| {
        fresh = true;
        tracing::info!(
            max_pool_bytes = opts.max_pool_bytes,
            max_pixmaps_per_bucket = opts.max_pixmaps_per_bucket,
            "frame pool initialized"
        );
        Mutex::new(FramePool::new(opts))
    });
    fresh
}

/// Run `f` against the process-wide pool, initializing it with defaults if needed.
pub(crate) fn with_global<R>(f: impl FnOnce(&mut FramePool) -> R) -> R {
    let pool = GLOBAL_POOL.get_or_init(|| Mutex::new(FramePool::new(FramePoolOpts::default())));
    let mut guard = pool.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Counters of the process-wide pool.
pub fn global_stats() -> FramePoolStats {
    with_global(|p| p.stats())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pool.rs"]
mod tests;
