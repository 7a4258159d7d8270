use alloc::sync::Arc;

/// Configuration for [`crate::RowWindow`].
///
/// Cheap to clone: the size estimator is stored in an `Arc`, so callers can keep a copy around
/// and build fresh windows without reallocating the closure.
pub struct WindowOptions {
    pub count: usize,
    /// Estimated row size in the scroll axis. Used until a row is measured.
    pub estimate_size: Arc<dyn Fn(usize) -> u32 + Send + Sync>,
    /// Extra rows windowed on each side of the visible range.
    pub overscan: usize,
    /// Viewport size applied at construction.
    pub initial_viewport: u32,
    /// Scroll offset applied at construction.
    pub initial_offset: u64,
}

impl WindowOptions {
    /// Creates options for a list of `count` rows sized by `estimate_size(index)`.
    pub fn new(count: usize, estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            count,
            estimate_size: Arc::new(estimate_size),
            overscan: 1,
            initial_viewport: 0,
            initial_offset: 0,
        }
    }

    /// Creates options for a list of `count` uniform rows of `row_size`.
    pub fn fixed(count: usize, row_size: u32) -> Self {
        Self::new(count, move |_| row_size)
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_viewport(mut self, initial_viewport: u32) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            estimate_size: Arc::clone(&self.estimate_size),
            overscan: self.overscan,
            initial_viewport: self.initial_viewport,
            initial_offset: self.initial_offset,
        }
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("overscan", &self.overscan)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
