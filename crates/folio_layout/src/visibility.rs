//! Viewport visibility
//!
//! Decides when a section has scrolled far enough into view to play its
//! entrance animation.

use folio_core::Rect;

/// Fraction of an element that must be visible by default
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Visibility observer for one element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InView {
    /// Minimum visible fraction of the element's area (0.0 - 1.0)
    pub threshold: f32,
    /// Once in view, stay in view
    pub trigger_once: bool,
    latched: bool,
    visible: bool,
}

impl Default for InView {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, true)
    }
}

impl InView {
    pub fn new(threshold: f32, trigger_once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            trigger_once,
            latched: false,
            visible: false,
        }
    }

    /// Observer that tracks visibility in both directions
    pub fn repeating(threshold: f32) -> Self {
        Self::new(threshold, false)
    }

    /// Visible fraction of `element` inside `viewport`.
    ///
    /// Zero-area elements report 0.
    pub fn visible_fraction(element: &Rect, viewport: &Rect) -> f32 {
        let area = element.area();
        if !(area > 0.0) {
            return 0.0;
        }
        element
            .intersection(viewport)
            .map(|overlap| (overlap.area() / area).min(1.0))
            .unwrap_or(0.0)
    }

    /// Feed new geometry and return whether the element counts as in view
    pub fn update(&mut self, element: Rect, viewport: Rect) -> bool {
        if self.trigger_once && self.latched {
            return true;
        }

        let fraction = Self::visible_fraction(&element, &viewport);
        let visible = fraction > 0.0 && fraction >= self.threshold;

        if visible && !self.visible {
            tracing::trace!("InView - entered at fraction {:.2}", fraction);
        }
        self.visible = visible;
        if visible && self.trigger_once {
            self.latched = true;
        }
        self.is_in_view()
    }

    pub fn is_in_view(&self) -> bool {
        self.latched || self.visible
    }

    pub fn reset(&mut self) {
        self.latched = false;
        self.visible = false;
    }
}
