//! Folio Animation System
//!
//! Frame scheduling, keyframe interpolation, and entrance-animation presets.
//!
//! # Features
//!
//! - **Frame scheduler**: repeating per-frame tasks and one-shot timers on a
//!   single monotonic clock, each cancellable through its id
//! - **Keyframe animations**: two-state entrance motions with delay and easing
//! - **Presets**: the fade/slide/scale entrances used by page sections

pub mod easing;
pub mod keyframe;
pub mod presets;
pub mod scheduler;

pub use easing::Easing;
pub use keyframe::{EntranceAnimation, KeyframeProperties};
pub use presets::{reveal, AnimationPreset};
pub use scheduler::{FrameScheduler, FrameTaskId, FrameTick, TimerId};
