//! Entrance animation presets
//!
//! The reveal animations page sections play when they scroll into view.
//! Durations and delays are in milliseconds; every preset eases out.

use crate::keyframe::{EntranceAnimation, KeyframeProperties};

/// Pre-built entrance animations
pub struct AnimationPreset;

impl AnimationPreset {
    /// Fade in while rising 20px
    pub fn fade_in_up() -> EntranceAnimation {
        rise(20.0, 600)
    }

    /// Fade in while rising 32px, slower
    pub fn fade_in_up_deep() -> EntranceAnimation {
        rise(32.0, 900)
    }

    /// Fade in sliding from the left
    pub fn fade_in_left() -> EntranceAnimation {
        slide(-60.0, 900).with_delay(180)
    }

    /// Fade in sliding from the right
    pub fn fade_in_right() -> EntranceAnimation {
        slide(60.0, 900).with_delay(320)
    }

    /// Fade in without movement
    pub fn fade_in() -> EntranceAnimation {
        EntranceAnimation::new(
            KeyframeProperties::opacity(0.0),
            KeyframeProperties::default(),
            1200,
        )
    }

    /// Grow slightly while fading in
    pub fn scale_in() -> EntranceAnimation {
        EntranceAnimation::new(
            KeyframeProperties::opacity(0.0)
                .with_scale(0.97)
                .with_translate(0.0, 10.0),
            KeyframeProperties::default(),
            900,
        )
        .with_delay(80)
    }

    /// List item sliding in from the right, staggered by position
    pub fn stagger_item(index: usize, base_delay_ms: u32) -> EntranceAnimation {
        slide(50.0, 1000).with_delay(base_delay_ms + index as u32 * 230)
    }

    /// Timeline entry sliding in from its side of the spine
    pub fn timeline_item(index: usize, from_left: bool) -> EntranceAnimation {
        let distance = if from_left { -50.0 } else { 50.0 };
        slide(distance, 500).with_delay(index as u32 * 100)
    }
}

fn rise(distance: f32, duration_ms: u32) -> EntranceAnimation {
    EntranceAnimation::new(
        KeyframeProperties::opacity(0.0).with_translate(0.0, distance),
        KeyframeProperties::default(),
        duration_ms,
    )
}

fn slide(distance: f32, duration_ms: u32) -> EntranceAnimation {
    EntranceAnimation::new(
        KeyframeProperties::opacity(0.0).with_translate(distance, 0.0),
        KeyframeProperties::default(),
        duration_ms,
    )
}

/// Target properties for a section gated on visibility: the resting state
/// once in view, the initial state before.
pub fn reveal(in_view: bool, preset: &EntranceAnimation) -> KeyframeProperties {
    if in_view {
        preset.animate
    } else {
        preset.initial
    }
}
