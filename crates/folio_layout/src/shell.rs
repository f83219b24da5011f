//! Page shell
//!
//! Owns the interactive state of one page view and routes events to it:
//! the carousels behind the skill panels, anchor navigation, the header,
//! the theme toggle and per-section visibility.

use crate::carousel::{CarouselConfig, CarouselController};
use crate::navigation::{HeaderState, Navigator};
use crate::surface::ScrollSurface;
use crate::visibility::InView;
use folio_core::events::{event_types, PAGE_TARGET};
use folio_core::{Event, EventData, Rect, Result};
use folio_theme::{ColorScheme, KeyValueStore, RootClassList, ThemeState};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Target key of the theme toggle button
pub const THEME_TOGGLE_TARGET: &str = "theme-toggle";
/// Target key of the mobile menu button
pub const MENU_TOGGLE_TARGET: &str = "menu-toggle";

/// Interactive state of a page view
pub struct PageShell<S: ScrollSurface, K: KeyValueStore> {
    theme: ThemeState,
    store: K,
    root: RootClassList,
    carousel: CarouselController<S>,
    navigator: Navigator,
    header: HeaderState,
    sections: FxHashMap<String, InView>,
}

impl<S: ScrollSurface, K: KeyValueStore> PageShell<S, K> {
    /// Load the theme from `store` and apply it to the document root
    pub fn new(config: CarouselConfig, store: K, prefers_dark: bool) -> Self {
        let theme = ThemeState::load(&store, prefers_dark);
        let mut root = RootClassList::default();
        theme.apply(&mut root);

        Self {
            theme,
            store,
            root,
            carousel: CarouselController::new(config),
            navigator: Navigator::new(),
            header: HeaderState::default(),
            sections: FxHashMap::default(),
        }
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn root(&self) -> &RootClassList {
        &self.root
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn carousel(&self) -> &CarouselController<S> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController<S> {
        &mut self.carousel
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Start a skill panel's carousel
    pub fn mount_panel(&mut self, key: impl Into<String>, surface: S) -> Option<S> {
        self.carousel.attach(key, surface)
    }

    pub fn unmount_panel(&mut self, key: &str) -> Option<S> {
        self.carousel.detach(key)
    }

    /// Flip the theme, apply it to the root and persist it
    pub fn toggle_theme(&mut self) -> Result<ColorScheme> {
        self.theme.toggle(&mut self.store, &mut self.root)
    }

    /// Record a section's top for anchor navigation
    pub fn register_section(&mut self, id: impl Into<String>, top: f32) {
        let id = id.into();
        self.navigator.set_anchor(id.clone(), top);
        self.sections.entry(id).or_default();
    }

    /// Feed section geometry; returns whether its entrance should play
    pub fn observe_section(&mut self, id: &str, element: Rect, viewport: Rect) -> bool {
        self.sections
            .entry(id.to_string())
            .or_default()
            .update(element, viewport)
    }

    pub fn is_section_revealed(&self, id: &str) -> bool {
        self.sections.get(id).is_some_and(InView::is_in_view)
    }

    /// Route an event. Returns true and stops propagation if it was consumed.
    pub fn dispatch(&mut self, event: &mut Event) -> Result<bool> {
        if event.propagation_stopped {
            return Ok(false);
        }

        let handled = match (event.event_type, event.target.as_str()) {
            (event_types::CLICK, THEME_TOGGLE_TARGET) => {
                self.toggle_theme()?;
                true
            }
            (event_types::CLICK, MENU_TOGGLE_TARGET) => {
                self.header.toggle_menu();
                true
            }
            (event_types::CLICK, _) => match &event.data {
                EventData::Click { href } => {
                    let href = href.clone();
                    if self.header.is_menu_open() {
                        self.header.select_link(&mut self.navigator, &href).is_some()
                    } else {
                        self.navigator.navigate(&href).is_some()
                    }
                }
                _ => false,
            },
            (_, PAGE_TARGET) if event.is_user_scroll() => {
                let delta = event.scroll_delta_y().unwrap_or(0.0);
                let offset = self.navigator.page_offset() + delta;
                self.navigator.set_page_offset(offset);
                self.header.on_page_scroll(self.navigator.page_offset());
                true
            }
            _ => self.carousel.handle_event(event),
        };

        if handled {
            event.stop_propagation();
        }
        Ok(handled)
    }

    /// Advance carousels and any smooth page scroll by `dt`
    pub fn tick(&mut self, dt: Duration) {
        self.carousel.tick(dt);
        let offset = self.navigator.tick(dt);
        self.header.on_page_scroll(offset);
    }
}
