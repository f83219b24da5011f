//! Auto-scrolling carousel controller
//!
//! Scrolls each attached panel continuously in one direction, yields to the
//! user while they scroll or drag it, and takes over again once the panel has
//! been left alone for a quiet period.
//!
//! # State machine (per panel)
//!
//! ```text
//!            user scroll / touch-move
//!   Auto ───────────────────────────────▶ UserOverride ──┐
//!    ▲                                        │   ▲      │ signal: reset
//!    └──────── quiet period elapsed ──────────┘   └──────┘ quiet deadline
//! ```
//!
//! Each panel's content is rendered twice in sequence; one copy spans the
//! panel's *extent*. In `Auto`, every frame advances the offset and wraps it
//! back into `[0, extent)`, which is visually seamless.
//!
//! Panels are independent records in a slot map. The frame loop and the
//! quiet-period debounce are registrations on the controller's
//! [`FrameScheduler`]; detaching a panel cancels both.
//!
//! # Example
//!
//! ```rust
//! use folio_layout::carousel::{CarouselConfig, CarouselController, CarouselMode};
//! use folio_layout::surface::VirtualPanel;
//! use std::time::Duration;
//!
//! let mut carousel = CarouselController::new(CarouselConfig::default());
//! carousel.attach("languages", VirtualPanel::new(800.0, 200.0));
//!
//! carousel.tick(Duration::from_millis(16));
//! assert!(carousel.offset("languages").unwrap() > 0.0);
//!
//! carousel.notify_user_scroll("languages");
//! assert_eq!(carousel.mode("languages"), Some(CarouselMode::UserOverride));
//! ```

use crate::surface::ScrollSurface;
use folio_animation::{FrameScheduler, FrameTaskId, FrameTick, TimerId};
use folio_core::events::event_types;
use folio_core::Event;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    /// Identity of an attached panel
    pub struct PanelId;
}

// ============================================================================
// Configuration
// ============================================================================

/// What happens when the offset passes the end of the first copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapPolicy {
    /// Subtract one extent, keeping the sub-pixel remainder
    #[default]
    Subtract,
    /// Jump back to the top
    Reset,
}

/// How far a frame advances the offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTiming {
    /// `step_px` per frame regardless of frame duration
    FixedStep,
    /// `step_px` per reference frame, scaled by the real frame duration
    #[default]
    Elapsed,
}

/// Carousel tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Pixels advanced per reference frame
    pub step_px: f32,
    /// Frame rate `step_px` is expressed against (Elapsed timing)
    pub reference_fps: f32,
    /// Idle time after the last user signal before auto scrolling resumes
    pub quiet_period_ms: u64,
    pub wrap: WrapPolicy,
    pub timing: FrameTiming,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_px: 0.5,
            reference_fps: 60.0,
            quiet_period_ms: 1200,
            wrap: WrapPolicy::Subtract,
            timing: FrameTiming::Elapsed,
        }
    }
}

impl CarouselConfig {
    /// One step per frame, the simplest deterministic model
    pub fn fixed_step(step_px: f32) -> Self {
        Self {
            step_px,
            timing: FrameTiming::FixedStep,
            ..Default::default()
        }
    }

    pub fn with_wrap(mut self, wrap: WrapPolicy) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_quiet_period(mut self, quiet: Duration) -> Self {
        self.quiet_period_ms = quiet.as_millis() as u64;
        self
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    /// Distance covered by a frame lasting `dt`
    pub fn advance_for(&self, dt: Duration) -> f32 {
        let distance = match self.timing {
            FrameTiming::FixedStep => self.step_px,
            FrameTiming::Elapsed => self.step_px * self.reference_fps * dt.as_secs_f32(),
        };
        if distance.is_finite() {
            distance.max(0.0)
        } else {
            0.0
        }
    }
}

/// Wrap `offset` into `[0, extent)`.
///
/// A non-positive extent means nothing to scroll; the result is 0.
pub fn wrap_offset(offset: f32, extent: f32, policy: WrapPolicy) -> f32 {
    if !(extent > 0.0) || !offset.is_finite() || offset <= 0.0 {
        return 0.0;
    }
    if offset < extent {
        return offset;
    }

    let wrapped = match policy {
        WrapPolicy::Reset => 0.0,
        WrapPolicy::Subtract => {
            let once = offset - extent;
            if once < extent {
                once
            } else {
                offset.rem_euclid(extent)
            }
        }
    };

    // rem_euclid can round up to exactly `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

// ============================================================================
// Per-panel state
// ============================================================================

/// Who is driving a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselMode {
    /// Controller advances the offset every frame
    #[default]
    Auto,
    /// User is scrolling; automatic advance suspended
    UserOverride,
}

/// Kind of user-originated input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSignal {
    Scroll,
    TouchMove,
}

struct Panel<S> {
    key: String,
    surface: S,
    mode: CarouselMode,
    offset: f32,
    extent: f32,
    frame_task: FrameTaskId,
    quiet_timer: Option<TimerId>,
    /// Scheduler time at which the pending override ends
    resume_at: Option<Duration>,
}

impl<S: ScrollSurface> Panel<S> {
    /// Re-read the surface: extent from its content, offset from its position
    fn resync(&mut self, policy: WrapPolicy) {
        self.extent = measure_extent(&self.surface);
        self.offset = wrap_offset(self.surface.scroll_top(), self.extent, policy);
    }
}

/// Whether the surface can scroll all the way to the seam at `extent`.
///
/// Surfaces that don't report a viewport are assumed to.
pub fn seam_reachable<S: ScrollSurface>(surface: &S, extent: f32) -> bool {
    match surface.viewport_height() {
        Some(viewport) => surface.content_height() - viewport >= extent,
        None => true,
    }
}

fn measure_extent<S: ScrollSurface>(surface: &S) -> f32 {
    let half = surface.content_height() / 2.0;
    if half.is_finite() && half > 0.0 {
        half
    } else {
        0.0
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Drives every attached auto-scrolling panel
pub struct CarouselController<S: ScrollSurface> {
    config: CarouselConfig,
    scheduler: FrameScheduler<PanelId>,
    panels: SlotMap<PanelId, Panel<S>>,
    keys: FxHashMap<String, PanelId>,
}

impl<S: ScrollSurface> CarouselController<S> {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            scheduler: FrameScheduler::new(),
            panels: SlotMap::with_key(),
            keys: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Scheduler time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Start auto scrolling `surface` under `key`.
    ///
    /// Attaching is idempotent per key: if `key` is already attached nothing
    /// changes and `surface` is handed back as `Some`. A surface with no
    /// measurable content is accepted; it starts moving on the first frame
    /// where its content has height.
    pub fn attach(&mut self, key: impl Into<String>, surface: S) -> Option<S> {
        let key = key.into();
        if self.keys.contains_key(&key) {
            tracing::trace!("CarouselController::attach - {:?} already attached", key);
            return Some(surface);
        }

        let mut panel = Panel {
            key: key.clone(),
            surface,
            mode: CarouselMode::Auto,
            offset: 0.0,
            extent: 0.0,
            frame_task: FrameTaskId::default(),
            quiet_timer: None,
            resume_at: None,
        };
        panel.resync(self.config.wrap);

        if panel.extent > 0.0 && !seam_reachable(&panel.surface, panel.extent) {
            tracing::debug!(
                "CarouselController::attach - {:?} viewport taller than its headroom, writes past {} will clamp",
                key,
                panel.surface.content_height() - panel.surface.viewport_height().unwrap_or(0.0)
            );
        }

        tracing::debug!(
            "CarouselController::attach - {:?} extent={} offset={}",
            key,
            panel.extent,
            panel.offset
        );

        let id = self.panels.insert(panel);
        let frame_task = self.scheduler.request_frames(id);
        if let Some(panel) = self.panels.get_mut(id) {
            panel.frame_task = frame_task;
        }
        self.keys.insert(key, id);
        None
    }

    /// Stop auto scrolling and hand the surface back.
    ///
    /// Cancels the panel's frame task and any pending quiet timer. Unknown
    /// keys are ignored.
    pub fn detach(&mut self, key: &str) -> Option<S> {
        let id = self.keys.remove(key)?;
        let panel = self.panels.remove(id)?;

        self.scheduler.cancel_frames(panel.frame_task);
        if let Some(timer) = panel.quiet_timer {
            self.scheduler.clear_timeout(timer);
        }

        tracing::debug!(
            "CarouselController::detach - {:?} at offset={}",
            panel.key,
            panel.offset
        );
        Some(panel.surface)
    }

    /// Detach every panel
    pub fn detach_all(&mut self) -> Vec<(String, S)> {
        let keys: Vec<String> = self.keys.keys().cloned().collect();
        keys.into_iter()
            .filter_map(|key| self.detach(&key).map(|surface| (key, surface)))
            .collect()
    }

    /// The user scrolled the panel (wheel, trackpad, scrollbar)
    pub fn notify_user_scroll(&mut self, key: &str) {
        self.user_signal(key, UserSignal::Scroll);
    }

    /// The user dragged the panel on a touch screen
    pub fn notify_touch_move(&mut self, key: &str) {
        self.user_signal(key, UserSignal::TouchMove);
    }

    /// Scroll the panel on the user's behalf and register the interaction
    pub fn scroll_by(&mut self, key: &str, delta: f32) {
        let Some(&id) = self.keys.get(key) else {
            return;
        };
        if let Some(panel) = self.panels.get_mut(id) {
            let target = panel.surface.scroll_top() + delta;
            panel.surface.set_scroll_top(target);
        }
        self.user_signal(key, UserSignal::Scroll);
    }

    /// Record user input on a panel.
    ///
    /// Switches the panel to `UserOverride` and restarts the quiet-period
    /// countdown from now.
    pub fn user_signal(&mut self, key: &str, signal: UserSignal) {
        let Some(&id) = self.keys.get(key) else {
            return;
        };
        let quiet = self.config.quiet_period();
        let wrap = self.config.wrap;
        let now = self.scheduler.now();
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };

        if let Some(timer) = panel.quiet_timer.take() {
            self.scheduler.clear_timeout(timer);
        }
        panel.quiet_timer = Some(self.scheduler.set_timeout(quiet, id));
        panel.resume_at = Some(now + quiet);

        if panel.mode != CarouselMode::UserOverride {
            tracing::debug!(
                "CarouselController - {:?} Auto -> UserOverride ({:?})",
                panel.key,
                signal
            );
            panel.mode = CarouselMode::UserOverride;
        }
        panel.resync(wrap);
    }

    /// Route a page event to the panel it targets.
    ///
    /// Scroll, wheel and touch-move events count as user input (scroll
    /// events carrying a delta also move the surface); unmount detaches.
    /// Returns true if the event addressed an attached panel.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if !self.keys.contains_key(&event.target) {
            return false;
        }

        match event.event_type {
            event_types::UNMOUNT => {
                self.detach(&event.target);
            }
            event_types::TOUCH_MOVE => self.notify_touch_move(&event.target),
            _ if event.is_user_scroll() => match event.scroll_delta_y() {
                Some(delta) if delta != 0.0 => self.scroll_by(&event.target, delta),
                _ => self.notify_user_scroll(&event.target),
            },
            _ => return false,
        }
        true
    }

    /// Advance by `dt`: fire due quiet timers, then run one frame per panel
    pub fn tick(&mut self, dt: Duration) {
        let tick = self.scheduler.advance(dt);
        self.dispatch(tick);
    }

    /// Advance by the wall-clock time since the previous frame
    pub fn tick_now(&mut self) {
        let tick = self.scheduler.tick();
        self.dispatch(tick);
    }

    fn dispatch(&mut self, tick: FrameTick<PanelId>) {
        for id in tick.timers {
            self.on_quiet_elapsed(id);
        }
        for id in tick.frames {
            self.on_frame(id, tick.now, tick.dt);
        }
    }

    fn on_quiet_elapsed(&mut self, id: PanelId) {
        let wrap = self.config.wrap;
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        panel.quiet_timer = None;
        if panel.mode == CarouselMode::UserOverride {
            tracing::debug!("CarouselController - {:?} UserOverride -> Auto", panel.key);
            panel.mode = CarouselMode::Auto;
            panel.resync(wrap);
        }
    }

    fn on_frame(&mut self, id: PanelId, now: Duration, dt: Duration) {
        let wrap = self.config.wrap;
        let Some(panel) = self.panels.get_mut(id) else {
            return;
        };
        if panel.mode != CarouselMode::Auto {
            return;
        }

        // The frame that ends an override only covers time since resumption
        let dt = match panel.resume_at.take() {
            Some(at) => dt.min(now.saturating_sub(at)),
            None => dt,
        };
        let advance = self.config.advance_for(dt);

        panel.extent = measure_extent(&panel.surface);
        if panel.extent == 0.0 {
            panel.offset = 0.0;
            return;
        }

        panel.offset = wrap_offset(panel.offset + advance, panel.extent, wrap);
        panel.surface.set_scroll_top(panel.offset);

        tracing::trace!(
            "CarouselController::frame - {:?} offset={:.2}/{:.2}",
            panel.key,
            panel.offset,
            panel.extent
        );
    }

    // ========== Observers ==========

    pub fn is_attached(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Attached panel keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    fn panel(&self, key: &str) -> Option<&Panel<S>> {
        self.keys.get(key).and_then(|id| self.panels.get(*id))
    }

    /// Current offset, always within `[0, extent)` once extent is positive
    pub fn offset(&self, key: &str) -> Option<f32> {
        self.panel(key).map(|p| p.offset)
    }

    /// Height of one content copy as last measured
    pub fn extent(&self, key: &str) -> Option<f32> {
        self.panel(key).map(|p| p.extent)
    }

    pub fn mode(&self, key: &str) -> Option<CarouselMode> {
        self.panel(key).map(|p| p.mode)
    }

    /// When the pending quiet timer will hand control back, if any
    pub fn quiet_deadline(&self, key: &str) -> Option<Duration> {
        self.panel(key)
            .and_then(|p| p.quiet_timer)
            .and_then(|timer| self.scheduler.timer_deadline(timer))
    }

    pub fn surface(&self, key: &str) -> Option<&S> {
        self.panel(key).map(|p| &p.surface)
    }

    /// Mutable access for layout changes; does not count as user input
    pub fn surface_mut(&mut self, key: &str) -> Option<&mut S> {
        let id = *self.keys.get(key)?;
        self.panels.get_mut(id).map(|p| &mut p.surface)
    }

    /// Registered frame tasks (one per attached panel)
    pub fn frame_task_count(&self) -> usize {
        self.scheduler.frame_task_count()
    }

    /// Pending quiet timers
    pub fn timer_count(&self) -> usize {
        self.scheduler.timer_count()
    }

    /// Frame tasks and timers still registered
    pub fn pending_tasks(&self) -> usize {
        self.frame_task_count() + self.timer_count()
    }
}

impl<S: ScrollSurface> Default for CarouselController<S> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::VirtualPanel;

    const FRAME: Duration = Duration::from_millis(16);

    fn fixed() -> CarouselController<VirtualPanel> {
        CarouselController::new(CarouselConfig::fixed_step(0.5))
    }

    #[test]
    fn test_wrap_offset_policies() {
        assert_eq!(wrap_offset(410.5, 400.0, WrapPolicy::Subtract), 10.5);
        assert_eq!(wrap_offset(410.5, 400.0, WrapPolicy::Reset), 0.0);
        assert_eq!(wrap_offset(1250.0, 400.0, WrapPolicy::Subtract), 50.0);
        assert_eq!(wrap_offset(399.0, 400.0, WrapPolicy::Reset), 399.0);
        assert_eq!(wrap_offset(400.0, 400.0, WrapPolicy::Subtract), 0.0);
    }

    #[test]
    fn test_wrap_offset_degenerate_extent() {
        assert_eq!(wrap_offset(10.0, 0.0, WrapPolicy::Subtract), 0.0);
        assert_eq!(wrap_offset(10.0, -5.0, WrapPolicy::Subtract), 0.0);
        assert_eq!(wrap_offset(10.0, f32::NAN, WrapPolicy::Subtract), 0.0);
        assert_eq!(wrap_offset(-3.0, 100.0, WrapPolicy::Subtract), 0.0);
    }

    #[test]
    fn test_advance_models() {
        let fixed = CarouselConfig::fixed_step(0.5);
        assert_eq!(fixed.advance_for(Duration::from_millis(100)), 0.5);

        let elapsed = CarouselConfig::default();
        let one_frame = elapsed.advance_for(Duration::from_secs_f64(1.0 / 60.0));
        assert!((one_frame - 0.5).abs() < 1e-4);
        let slow_frame = elapsed.advance_for(Duration::from_secs_f64(2.0 / 60.0));
        assert!((slow_frame - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_seam_reachable_needs_headroom() {
        assert!(seam_reachable(&VirtualPanel::new(800.0, 200.0), 400.0));
        assert!(seam_reachable(&VirtualPanel::new(800.0, 400.0), 400.0));
        assert!(!seam_reachable(&VirtualPanel::new(800.0, 500.0), 400.0));

        // The surface clamps, so the controller runs ahead of it
        let mut carousel = CarouselController::new(CarouselConfig::fixed_step(50.0));
        carousel.attach("a", VirtualPanel::new(800.0, 500.0));
        for _ in 0..7 {
            carousel.tick(FRAME);
        }
        assert_eq!(carousel.offset("a"), Some(350.0));
        assert_eq!(carousel.surface("a").unwrap().scroll_top(), 300.0);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut carousel = fixed();
        assert!(carousel.attach("a", VirtualPanel::new(800.0, 200.0)).is_none());
        let rejected = carousel.attach("a", VirtualPanel::new(100.0, 50.0));
        assert_eq!(rejected.map(|s| s.content_height()), Some(100.0));
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.frame_task_count(), 1);
        assert_eq!(carousel.extent("a"), Some(400.0));
    }

    #[test]
    fn test_attach_picks_up_existing_position() {
        let mut panel = VirtualPanel::new(800.0, 200.0);
        panel.set_scroll_top(450.0);
        let mut carousel = fixed();
        carousel.attach("a", panel);
        assert_eq!(carousel.offset("a"), Some(50.0));
    }

    #[test]
    fn test_frames_advance_and_write_surface() {
        let mut carousel = fixed();
        carousel.attach("a", VirtualPanel::new(800.0, 200.0));
        for _ in 0..10 {
            carousel.tick(FRAME);
        }
        assert_eq!(carousel.offset("a"), Some(5.0));
        let surface = carousel.surface("a").unwrap();
        assert_eq!(surface.scroll_top(), 5.0);
        assert_eq!(surface.writes(), 10);
    }

    #[test]
    fn test_user_signal_suspends_until_quiet() {
        let mut carousel = fixed();
        carousel.attach("a", VirtualPanel::new(800.0, 200.0));
        carousel.tick(FRAME);
        carousel.notify_user_scroll("a");
        assert_eq!(carousel.mode("a"), Some(CarouselMode::UserOverride));

        let frozen = carousel.offset("a");
        carousel.tick(Duration::from_millis(1199));
        assert_eq!(carousel.offset("a"), frozen);
        assert_eq!(carousel.mode("a"), Some(CarouselMode::UserOverride));

        carousel.tick(Duration::from_millis(1));
        assert_eq!(carousel.mode("a"), Some(CarouselMode::Auto));
        assert_eq!(carousel.timer_count(), 0);
    }

    #[test]
    fn test_resume_frame_excludes_paused_time() {
        let mut carousel = CarouselController::new(CarouselConfig::default());
        carousel.attach("a", VirtualPanel::new(800.0, 200.0));
        carousel.notify_user_scroll("a");

        // One long frame spanning the whole quiet period
        carousel.tick(Duration::from_millis(1200));
        assert_eq!(carousel.mode("a"), Some(CarouselMode::Auto));
        assert_eq!(carousel.offset("a"), Some(0.0));

        // A long gap past the deadline only counts the part after it
        carousel.notify_user_scroll("a");
        carousel.tick(Duration::from_millis(1400));
        let offset = carousel.offset("a").unwrap();
        assert!((offset - 6.0).abs() < 1e-3, "offset {}", offset);

        // Later frames advance normally
        carousel.tick(Duration::from_millis(100));
        let offset = carousel.offset("a").unwrap();
        assert!((offset - 9.0).abs() < 1e-3, "offset {}", offset);
    }

    #[test]
    fn test_scroll_by_moves_surface_and_resyncs() {
        let mut carousel = fixed();
        carousel.attach("a", VirtualPanel::new(800.0, 200.0));
        carousel.scroll_by("a", 120.0);
        assert_eq!(carousel.offset("a"), Some(120.0));
        assert_eq!(carousel.mode("a"), Some(CarouselMode::UserOverride));

        // Scrolling into the second copy maps back into the first
        carousel.scroll_by("a", 300.0);
        assert_eq!(carousel.offset("a"), Some(20.0));
    }

    #[test]
    fn test_unmeasured_panel_waits_for_layout() {
        let mut carousel = fixed();
        carousel.attach("a", VirtualPanel::unmeasured(200.0));
        for _ in 0..5 {
            carousel.tick(FRAME);
        }
        assert_eq!(carousel.offset("a"), Some(0.0));
        assert_eq!(carousel.extent("a"), Some(0.0));
        assert_eq!(carousel.surface("a").unwrap().writes(), 0);

        carousel.surface_mut("a").unwrap().set_content_height(600.0);
        carousel.tick(FRAME);
        assert_eq!(carousel.extent("a"), Some(300.0));
        assert_eq!(carousel.offset("a"), Some(0.5));
    }

    #[test]
    fn test_handle_event_routing() {
        let mut carousel = fixed();
        carousel.attach("a", VirtualPanel::new(800.0, 200.0));

        assert!(!carousel.handle_event(&Event::scroll("missing", 10.0)));
        assert!(!carousel.handle_event(&Event::click("a", "#about")));

        assert!(carousel.handle_event(&Event::touch_move("a", 0.0, 0.0)));
        assert_eq!(carousel.mode("a"), Some(CarouselMode::UserOverride));

        assert!(carousel.handle_event(&Event::scroll("a", 30.0)));
        assert_eq!(carousel.offset("a"), Some(30.0));

        assert!(carousel.handle_event(&Event::unmount("a")));
        assert!(!carousel.is_attached("a"));
        assert_eq!(carousel.pending_tasks(), 0);
    }

    #[test]
    fn test_detach_unknown_is_noop() {
        let mut carousel = fixed();
        assert!(carousel.detach("nothing").is_none());
        carousel.notify_user_scroll("nothing");
        carousel.scroll_by("nothing", 5.0);
        assert_eq!(carousel.timer_count(), 0);
    }

    #[test]
    fn test_detach_all_clears_scheduler() {
        let mut carousel = fixed();
        carousel.attach("a", VirtualPanel::new(800.0, 200.0));
        carousel.attach("b", VirtualPanel::new(600.0, 200.0));
        carousel.notify_user_scroll("b");

        let mut detached: Vec<String> = carousel
            .detach_all()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        detached.sort();
        assert_eq!(detached, vec!["a", "b"]);
        assert!(carousel.is_empty());
        assert_eq!(carousel.frame_task_count(), 0);
        assert_eq!(carousel.timer_count(), 0);
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: CarouselConfig = toml::from_str(
            r#"
            step_px = 1.0
            wrap = "reset"
            timing = "fixed_step"
            "#,
        )
        .unwrap();
        assert_eq!(config.step_px, 1.0);
        assert_eq!(config.wrap, WrapPolicy::Reset);
        assert_eq!(config.timing, FrameTiming::FixedStep);
        assert_eq!(config.quiet_period(), Duration::from_millis(1200));
    }
}
