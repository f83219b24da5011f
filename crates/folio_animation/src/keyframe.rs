//! Keyframe animations
//!
//! Entrance animations interpolate a small set of visual properties from an
//! initial state to a resting state after an optional delay.

use crate::easing::Easing;

/// Properties that can be animated on a section or card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeProperties {
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Translation X in pixels
    pub translate_x: f32,
    /// Translation Y in pixels
    pub translate_y: f32,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for KeyframeProperties {
    /// Fully visible, untransformed
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

impl KeyframeProperties {
    /// Create properties with only opacity changed from rest
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: value,
            ..Default::default()
        }
    }

    /// Builder: set opacity
    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = value;
        self
    }

    /// Builder: set translation
    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = value;
        self
    }

    /// Linear interpolation toward `to` by `t`
    pub fn lerp(&self, to: &KeyframeProperties, t: f32) -> KeyframeProperties {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        KeyframeProperties {
            opacity: mix(self.opacity, to.opacity),
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// CSS declaration for the current properties
    pub fn to_css(&self) -> String {
        format!(
            "opacity:{};transform:translate({}px,{}px) scale({})",
            self.opacity, self.translate_x, self.translate_y, self.scale
        )
    }
}

/// A two-keyframe entrance animation
#[derive(Clone, Debug, PartialEq)]
pub struct EntranceAnimation {
    pub initial: KeyframeProperties,
    pub animate: KeyframeProperties,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    current_time: f32,
    playing: bool,
}

impl EntranceAnimation {
    pub fn new(initial: KeyframeProperties, animate: KeyframeProperties, duration_ms: u32) -> Self {
        Self {
            initial,
            animate,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the animation has reached its resting state
    pub fn is_finished(&self) -> bool {
        !self.playing && self.current_time > 0.0
    }

    /// Progress through the animated portion (delay excluded), 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        let local = self.current_time - self.delay_ms as f32;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        (local / self.duration_ms as f32).min(1.0)
    }

    /// Current interpolated properties
    pub fn value(&self) -> KeyframeProperties {
        let eased = self.easing.apply(self.progress());
        self.initial.lerp(&self.animate, eased)
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        let total = (self.delay_ms + self.duration_ms) as f32;
        if self.current_time >= total {
            self.current_time = total.max(f32::MIN_POSITIVE);
            self.playing = false;
        }
    }
}
