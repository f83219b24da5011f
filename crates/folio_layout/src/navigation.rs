//! Anchor navigation and header state
//!
//! Clicking a `#section` link smooth-scrolls the page so the section's top
//! lands at the top of the viewport. The header tracks whether the page has
//! left the top and whether the mobile menu is open.

use folio_animation::Easing;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Default smooth-scroll duration
pub const SMOOTH_SCROLL_MS: u32 = 600;

/// Page offset past which the header counts as scrolled
pub const SCROLLED_THRESHOLD: f32 = 10.0;

/// An in-flight eased page scroll
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u32,
    pub easing: Easing,
    elapsed_ms: f32,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::EaseInOut,
            elapsed_ms: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Offset at the current progress
    pub fn value(&self) -> f32 {
        let t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * t
    }

    fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed_ms += dt.as_secs_f32() * 1000.0;
        if self.is_finished() {
            self.to
        } else {
            self.value()
        }
    }
}

/// Resolves anchor links and drives the page scroll position
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    anchors: FxHashMap<String, f32>,
    page_offset: f32,
    duration_ms: u32,
    active: Option<SmoothScroll>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            duration_ms: SMOOTH_SCROLL_MS,
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Record where a section starts on the page
    pub fn set_anchor(&mut self, id: impl Into<String>, top: f32) {
        self.anchors.insert(id.into(), top.max(0.0));
    }

    pub fn remove_anchor(&mut self, id: &str) -> Option<f32> {
        self.anchors.remove(id)
    }

    pub fn anchor(&self, id: &str) -> Option<f32> {
        self.anchors.get(id).copied()
    }

    pub fn page_offset(&self) -> f32 {
        self.page_offset
    }

    /// The user scrolled the page directly; any smooth scroll is abandoned
    pub fn set_page_offset(&mut self, offset: f32) {
        if self.active.take().is_some() {
            tracing::trace!("Navigator - smooth scroll interrupted at {}", offset);
        }
        self.page_offset = offset.max(0.0);
    }

    /// Follow a link.
    ///
    /// `#id` hrefs naming a known section start a smooth scroll and return
    /// the target offset. Anything else returns `None` and leaves the page
    /// where it is.
    pub fn navigate(&mut self, href: &str) -> Option<f32> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let Some(target) = self.anchor(id) else {
            tracing::debug!("Navigator::navigate - no section {:?}", id);
            return None;
        };

        tracing::debug!(
            "Navigator::navigate - {:?} from {} to {}",
            id,
            self.page_offset,
            target
        );
        self.active = Some(SmoothScroll::new(self.page_offset, target, self.duration_ms));
        Some(target)
    }

    pub fn is_scrolling(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the smooth scroll in progress
    pub fn target(&self) -> Option<f32> {
        self.active.map(|scroll| scroll.to)
    }

    /// Advance the smooth scroll, returning the new page offset
    pub fn tick(&mut self, dt: Duration) -> f32 {
        if let Some(scroll) = self.active.as_mut() {
            self.page_offset = scroll.advance(dt);
            if scroll.is_finished() {
                self.active = None;
            }
        }
        self.page_offset
    }
}

/// Sticky header: scrolled styling and the mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Update from the page offset. Returns true if `scrolled` changed.
    pub fn on_page_scroll(&mut self, offset: f32) -> bool {
        let scrolled = offset > SCROLLED_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Icon on the menu button
    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open {
            "x"
        } else {
            "menu"
        }
    }

    /// A menu link was chosen: close the menu and navigate
    pub fn select_link(&mut self, navigator: &mut Navigator, href: &str) -> Option<f32> {
        self.menu_open = false;
        navigator.navigate(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        let mut nav = Navigator::new().with_duration(500);
        nav.set_anchor("home", 0.0);
        nav.set_anchor("about", 900.0);
        nav.set_anchor("contact", 4000.0);
        nav
    }

    #[test]
    fn test_navigate_scrolls_to_section() {
        let mut nav = navigator();
        assert_eq!(nav.navigate("#about"), Some(900.0));
        assert!(nav.is_scrolling());

        let halfway = nav.tick(Duration::from_millis(250));
        assert!((halfway - 450.0).abs() < 0.01);

        assert_eq!(nav.tick(Duration::from_millis(250)), 900.0);
        assert!(!nav.is_scrolling());
    }

    #[test]
    fn test_unknown_and_external_links_ignored() {
        let mut nav = navigator();
        assert_eq!(nav.navigate("#blog"), None);
        assert_eq!(nav.navigate("https://github.com"), None);
        assert_eq!(nav.navigate("#"), None);
        assert!(!nav.is_scrolling());
    }

    #[test]
    fn test_user_scroll_interrupts() {
        let mut nav = navigator();
        nav.navigate("#contact");
        nav.tick(Duration::from_millis(100));
        nav.set_page_offset(50.0);
        assert!(!nav.is_scrolling());
        assert_eq!(nav.tick(Duration::from_millis(100)), 50.0);
    }

    #[test]
    fn test_header_scrolled_threshold() {
        let mut header = HeaderState::default();
        assert!(!header.on_page_scroll(10.0));
        assert!(header.on_page_scroll(10.5));
        assert!(header.is_scrolled());
        assert!(!header.on_page_scroll(300.0));
        assert!(header.on_page_scroll(0.0));
    }

    #[test]
    fn test_menu_link_closes_menu() {
        let mut header = HeaderState::default();
        let mut nav = navigator();
        assert!(header.toggle_menu());
        assert_eq!(header.menu_icon(), "x");

        assert_eq!(header.select_link(&mut nav, "#contact"), Some(4000.0));
        assert!(!header.is_menu_open());
    }
}
