//! Carousel behavior over simulated time

use folio_layout::carousel::{
    CarouselConfig, CarouselController, CarouselMode, FrameTiming, WrapPolicy,
};
use folio_layout::surface::{ScrollSurface, VirtualPanel};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(10);

/// Surface the test keeps a handle to after the controller lets go
#[derive(Clone)]
struct SharedPanel(Rc<RefCell<VirtualPanel>>);

impl SharedPanel {
    fn new(content_height: f32, viewport_height: f32) -> Self {
        Self(Rc::new(RefCell::new(VirtualPanel::new(
            content_height,
            viewport_height,
        ))))
    }

    fn writes(&self) -> u64 {
        self.0.borrow().writes()
    }
}

impl ScrollSurface for SharedPanel {
    fn content_height(&self) -> f32 {
        self.0.borrow().content_height()
    }

    fn scroll_top(&self) -> f32 {
        self.0.borrow().scroll_top()
    }

    fn set_scroll_top(&mut self, offset: f32) {
        self.0.borrow_mut().set_scroll_top(offset);
    }
}

fn run<S: ScrollSurface>(carousel: &mut CarouselController<S>, frames: usize) {
    for _ in 0..frames {
        carousel.tick(FRAME);
    }
}

#[test]
fn thousand_ticks_subtract_wrap() {
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));
    assert_eq!(carousel.extent("panel"), Some(400.0));

    run(&mut carousel, 1000);
    assert_eq!(carousel.offset("panel"), Some(100.0));
}

#[test]
fn thousand_ticks_reset_wrap() {
    let config = CarouselConfig::fixed_step(0.5).with_wrap(WrapPolicy::Reset);
    let mut carousel = CarouselController::new(config);
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));

    // 800 ticks reach the seam and jump back to 0; 200 more cover 100px
    run(&mut carousel, 800);
    assert_eq!(carousel.offset("panel"), Some(0.0));
    run(&mut carousel, 200);
    assert_eq!(carousel.offset("panel"), Some(100.0));
}

#[test]
fn advance_from_initial_offset() {
    let mut surface = VirtualPanel::new(800.0, 200.0);
    surface.set_scroll_top(150.0);

    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", surface);
    run(&mut carousel, 700);

    // (150 + 700 * 0.5) mod 400
    assert_eq!(carousel.offset("panel"), Some(100.0));
    assert_eq!(carousel.surface("panel").map(|s| s.scroll_top()), Some(100.0));
}

#[test]
fn elapsed_timing_tracks_real_time() {
    let mut carousel = CarouselController::new(CarouselConfig::default());
    assert_eq!(carousel.config().timing, FrameTiming::Elapsed);
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));

    // 120 frames at 60fps: 2 seconds, 60px at 0.5px per reference frame
    let frame = Duration::from_secs_f64(1.0 / 60.0);
    for _ in 0..120 {
        carousel.tick(frame);
    }
    let offset = carousel.offset("panel").unwrap();
    assert!((offset - 60.0).abs() < 0.01, "offset {}", offset);

    // Same wall time in half as many frames covers the same distance
    let mut coarse = CarouselController::new(CarouselConfig::default());
    coarse.attach("panel", VirtualPanel::new(800.0, 200.0));
    for _ in 0..60 {
        coarse.tick(frame * 2);
    }
    let coarse_offset = coarse.offset("panel").unwrap();
    assert!((coarse_offset - offset).abs() < 0.01);
}

#[test]
fn offset_stays_in_bounds() {
    let config = CarouselConfig {
        step_px: 7.3,
        ..CarouselConfig::default()
    };
    let mut carousel = CarouselController::new(config);
    carousel.attach("panel", VirtualPanel::new(333.0, 100.0));
    let extent = carousel.extent("panel").unwrap();

    // Deterministic jitter in frame length and occasional user drags
    let mut seed: u32 = 12345;
    for i in 0..5000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        let dt = Duration::from_micros(1000 + (seed >> 16) as u64 % 60_000);
        if i % 997 == 0 {
            carousel.scroll_by("panel", ((seed >> 8) % 500) as f32);
        }
        carousel.tick(dt);

        let offset = carousel.offset("panel").unwrap();
        assert!(offset >= 0.0 && offset < extent, "offset {} at {}", offset, i);
    }
}

#[test]
fn user_scroll_overrides_immediately() {
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));
    run(&mut carousel, 20);
    assert_eq!(carousel.offset("panel"), Some(10.0));

    carousel.notify_user_scroll("panel");
    assert_eq!(carousel.mode("panel"), Some(CarouselMode::UserOverride));

    let writes = carousel.surface("panel").unwrap().writes();
    run(&mut carousel, 100);
    assert_eq!(carousel.offset("panel"), Some(10.0));
    assert_eq!(carousel.surface("panel").unwrap().writes(), writes);
}

#[test]
fn debounce_counts_from_last_signal() {
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));
    run(&mut carousel, 10);

    // First signal at 100ms, second 500ms later
    carousel.notify_user_scroll("panel");
    run(&mut carousel, 50);
    carousel.notify_touch_move("panel");
    assert_eq!(carousel.now(), Duration::from_millis(600));
    assert_eq!(
        carousel.quiet_deadline("panel"),
        Some(Duration::from_millis(1800))
    );
    assert_eq!(carousel.timer_count(), 1);

    let paused_at = carousel.offset("panel");

    // 1.2s after the first signal: still paused
    run(&mut carousel, 70);
    assert_eq!(carousel.now(), Duration::from_millis(1300));
    assert_eq!(carousel.mode("panel"), Some(CarouselMode::UserOverride));

    // Just short of 1.2s after the second
    run(&mut carousel, 49);
    assert_eq!(carousel.mode("panel"), Some(CarouselMode::UserOverride));
    assert_eq!(carousel.offset("panel"), paused_at);

    run(&mut carousel, 1);
    assert_eq!(carousel.now(), Duration::from_millis(1800));
    assert_eq!(carousel.mode("panel"), Some(CarouselMode::Auto));
    assert_eq!(carousel.offset("panel"), paused_at.map(|o| o + 0.5));
}

#[test]
fn resume_continues_from_user_position() {
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));
    carousel.scroll_by("panel", 250.0);

    run(&mut carousel, 120);
    assert_eq!(carousel.mode("panel"), Some(CarouselMode::Auto));
    assert_eq!(carousel.offset("panel"), Some(250.5));
}

#[test]
fn detach_stops_all_mutation() {
    let shared = SharedPanel::new(800.0, 200.0);
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", shared.clone());
    run(&mut carousel, 10);
    carousel.notify_user_scroll("panel");
    assert_eq!(carousel.pending_tasks(), 2);

    let detached = carousel.detach("panel");
    assert!(detached.is_some());
    drop(detached);
    assert_eq!(carousel.pending_tasks(), 0);

    let writes = shared.writes();
    let top = shared.scroll_top();
    for _ in 0..10_000 {
        carousel.tick(Duration::from_millis(50));
    }
    assert_eq!(shared.writes(), writes);
    assert_eq!(shared.scroll_top(), top);
    assert_eq!(carousel.offset("panel"), None);
}

#[test]
fn reattach_after_detach_starts_fresh() {
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("panel", VirtualPanel::new(800.0, 200.0));
    carousel.notify_user_scroll("panel");
    let surface = carousel.detach("panel").unwrap();

    assert!(carousel.attach("panel", surface).is_none());
    assert_eq!(carousel.mode("panel"), Some(CarouselMode::Auto));
    assert_eq!(carousel.timer_count(), 0);
    run(&mut carousel, 2);
    assert_eq!(carousel.offset("panel"), Some(1.0));
}

#[test]
fn panels_are_independent() {
    let mut carousel = CarouselController::new(CarouselConfig::fixed_step(0.5));
    carousel.attach("languages", VirtualPanel::new(800.0, 200.0));
    carousel.attach("tools", VirtualPanel::new(500.0, 200.0));

    let mut solo = CarouselController::new(CarouselConfig::fixed_step(0.5));
    solo.attach("languages", VirtualPanel::new(800.0, 200.0));

    for frame in 0..600 {
        if frame % 40 == 0 && frame < 400 {
            carousel.scroll_by("tools", 30.0);
        }
        carousel.tick(FRAME);
        solo.tick(FRAME);
        assert_eq!(carousel.offset("languages"), solo.offset("languages"));
        assert_eq!(carousel.mode("languages"), Some(CarouselMode::Auto));
    }

    assert_eq!(carousel.extent("tools"), Some(250.0));
    carousel.detach("tools");
    carousel.tick(FRAME);
    solo.tick(FRAME);
    assert_eq!(carousel.offset("languages"), solo.offset("languages"));
}

#[test]
fn empty_panel_never_divides_by_zero() {
    let mut carousel = CarouselController::new(CarouselConfig::default());
    carousel.attach("empty", VirtualPanel::new(0.0, 200.0));
    carousel.attach("nan", VirtualPanel::new(f32::NAN, 200.0));
    run(&mut carousel, 100);
    carousel.scroll_by("empty", 40.0);
    run(&mut carousel, 200);

    for key in ["empty", "nan"] {
        assert_eq!(carousel.offset(key), Some(0.0));
        assert_eq!(carousel.extent(key), Some(0.0));
    }
}
