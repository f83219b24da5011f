//! Frame scheduler
//!
//! Owns the two primitives a page's event loop offers widgets: repeating
//! per-frame tasks (the display refresh callback) and one-shot timers.
//! Both are registrations carrying a caller-chosen payload, cancelled by id.
//!
//! The scheduler does not run closures. Each [`FrameScheduler::advance`]
//! reports which timers came due and which frame tasks are live, and the
//! owner dispatches them against its own state. This keeps the scheduler free
//! of borrows into widget state and makes a cancelled registration impossible
//! to observe: once removed, an id is never reported again.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a repeating per-frame task
    pub struct FrameTaskId;
    /// Handle to a pending one-shot timer
    pub struct TimerId;
}

struct Timer<T> {
    deadline: Duration,
    payload: T,
}

/// What came due during one scheduler advance
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTick<T> {
    /// Scheduler time after the advance
    pub now: Duration,
    /// Time covered by this advance
    pub dt: Duration,
    /// Payloads of timers whose deadline passed, earliest deadline first
    pub timers: SmallVec<[T; 4]>,
    /// Payloads of every live frame task
    pub frames: SmallVec<[T; 8]>,
}

impl<T> FrameTick<T> {
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.frames.is_empty()
    }
}

/// Single-threaded scheduler for frame tasks and timers
pub struct FrameScheduler<T: Copy> {
    frames: SlotMap<FrameTaskId, T>,
    timers: SlotMap<TimerId, Timer<T>>,
    now: Duration,
    last_frame: Instant,
    frame_count: u64,
}

impl<T: Copy> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            frames: SlotMap::with_key(),
            timers: SlotMap::with_key(),
            now: Duration::ZERO,
            last_frame: Instant::now(),
            frame_count: 0,
        }
    }

    /// Current scheduler time (sum of all advances)
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of advances performed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Register a task reported on every frame until cancelled
    pub fn request_frames(&mut self, payload: T) -> FrameTaskId {
        self.frames.insert(payload)
    }

    /// Cancel a frame task. Returns false if it was already gone.
    pub fn cancel_frames(&mut self, id: FrameTaskId) -> bool {
        self.frames.remove(id).is_some()
    }

    pub fn is_frame_task_live(&self, id: FrameTaskId) -> bool {
        self.frames.contains_key(id)
    }

    /// Register a timer that comes due `delay` after the current time
    pub fn set_timeout(&mut self, delay: Duration, payload: T) -> TimerId {
        self.timers.insert(Timer {
            deadline: self.now + delay,
            payload,
        })
    }

    /// Cancel a pending timer. Returns false if it already fired or was cleared.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Absolute deadline of a pending timer
    pub fn timer_deadline(&self, id: TimerId) -> Option<Duration> {
        self.timers.get(id).map(|t| t.deadline)
    }

    /// Advance the clock by `dt` and collect what came due.
    ///
    /// Timers whose deadline is at or before the new time are removed and
    /// reported in deadline order. Frame tasks stay registered.
    pub fn advance(&mut self, dt: Duration) -> FrameTick<T> {
        self.now += dt;
        self.frame_count += 1;

        let now = self.now;
        let mut due: SmallVec<[(Duration, TimerId); 4]> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (timer.deadline, id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        let timers = due
            .into_iter()
            .filter_map(|(_, id)| self.timers.remove(id))
            .map(|timer| timer.payload)
            .collect();

        let frames = self.frames.values().copied().collect();

        tracing::trace!(
            "FrameScheduler::advance - now={:?} frames={} timers_pending={}",
            now,
            self.frames.len(),
            self.timers.len()
        );

        FrameTick {
            now,
            dt,
            timers,
            frames,
        }
    }

    /// Advance by the wall-clock time since the previous call
    pub fn tick(&mut self) -> FrameTick<T> {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.advance(dt)
    }

    pub fn frame_task_count(&self) -> usize {
        self.frames.len()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// True while any frame task or timer is registered
    pub fn has_pending(&self) -> bool {
        !self.frames.is_empty() || !self.timers.is_empty()
    }
}

impl<T: Copy> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_frame_tasks_repeat_until_cancelled() {
        let mut scheduler = FrameScheduler::new();
        let a = scheduler.request_frames(1u32);
        let _b = scheduler.request_frames(2u32);

        for _ in 0..3 {
            let tick = scheduler.advance(ms(16));
            let mut frames = tick.frames.to_vec();
            frames.sort();
            assert_eq!(frames, vec![1, 2]);
        }

        assert!(scheduler.cancel_frames(a));
        assert!(!scheduler.cancel_frames(a));
        let tick = scheduler.advance(ms(16));
        assert_eq!(tick.frames.as_slice(), &[2]);
        assert_eq!(scheduler.frame_count(), 4);
    }

    #[test]
    fn test_timer_fires_once_at_deadline() {
        let mut scheduler = FrameScheduler::new();
        let id = scheduler.set_timeout(ms(100), 7u32);
        assert_eq!(scheduler.timer_deadline(id), Some(ms(100)));

        assert!(scheduler.advance(ms(99)).timers.is_empty());
        assert_eq!(scheduler.advance(ms(1)).timers.as_slice(), &[7]);
        assert!(scheduler.advance(ms(500)).timers.is_empty());
        assert_eq!(scheduler.timer_count(), 0);
        assert!(!scheduler.clear_timeout(id));
    }

    #[test]
    fn test_timers_report_in_deadline_order() {
        let mut scheduler = FrameScheduler::new();
        scheduler.set_timeout(ms(30), 3u32);
        scheduler.set_timeout(ms(10), 1u32);
        scheduler.set_timeout(ms(20), 2u32);

        let tick = scheduler.advance(ms(50));
        assert_eq!(tick.timers.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_cleared_timer_never_fires() {
        let mut scheduler = FrameScheduler::new();
        let id = scheduler.set_timeout(ms(10), 1u32);
        assert!(scheduler.clear_timeout(id));
        assert!(scheduler.advance(ms(20)).is_idle());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_timeout_is_relative_to_current_time() {
        let mut scheduler = FrameScheduler::new();
        scheduler.advance(ms(1000));
        let id = scheduler.set_timeout(ms(200), 0u8);
        assert_eq!(scheduler.timer_deadline(id), Some(ms(1200)));
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn test_wall_clock_tick_advances() {
        let mut scheduler: FrameScheduler<u8> = FrameScheduler::new();
        let before = scheduler.now();
        let tick = scheduler.tick();
        assert!(tick.now >= before);
        assert_eq!(scheduler.frame_count(), 1);
    }
}
