//! Scroll surfaces
//!
//! A surface is the scrollable element a carousel drives. Its content is the
//! panel's list rendered twice in sequence, so one logical copy spans half of
//! [`ScrollSurface::content_height`].
//!
//! Surfaces clamp writes to their reachable range. When the viewport is
//! taller than one copy's worth of headroom (`content_height - viewport <
//! content_height / 2`), the seam can't be reached: the carousel's offset
//! runs ahead of `scroll_top` until the next user signal re-reads it.

/// A vertically scrollable element
pub trait ScrollSurface {
    /// Total scrollable content height, both copies included
    fn content_height(&self) -> f32;

    /// Current scroll position
    fn scroll_top(&self) -> f32;

    /// Move the scroll position; implementations may clamp it
    fn set_scroll_top(&mut self, offset: f32);

    /// Visible height, if the surface knows it
    fn viewport_height(&self) -> Option<f32> {
        None
    }
}

/// Headless surface with explicit measurements
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VirtualPanel {
    content_height: f32,
    viewport_height: f32,
    scroll_top: f32,
    writes: u64,
}

impl VirtualPanel {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            content_height,
            viewport_height,
            scroll_top: 0.0,
            writes: 0,
        }
    }

    /// Panel showing `rows` rows of `row_height`, list duplicated
    pub fn for_rows(rows: usize, row_height: f32, viewport_height: f32) -> Self {
        Self::new(rows as f32 * row_height * 2.0, viewport_height)
    }

    /// Panel whose content has not been laid out yet
    pub fn unmeasured(viewport_height: f32) -> Self {
        Self::new(0.0, viewport_height)
    }

    /// Simulate layout completing or content changing size
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Largest reachable scroll position
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Number of times the scroll position was written
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl ScrollSurface for VirtualPanel {
    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: f32) {
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
        self.writes += 1;
    }

    fn viewport_height(&self) -> Option<f32> {
        Some(self.viewport_height)
    }
}
