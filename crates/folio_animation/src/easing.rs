//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => solve_cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Evaluate a unit cubic bezier timing curve at horizontal position `x`.
///
/// Bisection on the x polynomial; the curve is monotonic in x for
/// control points inside [0, 1].
fn solve_cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let sample = |p: f64, c1: f64, c2: f64| {
        let inv = 1.0 - p;
        3.0 * inv * inv * p * c1 + 3.0 * inv * p * p * c2 + p * p * p
    };

    let target = x as f64;
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut p = target;
    for _ in 0..32 {
        let value = sample(p, x1 as f64, x2 as f64);
        if (value - target).abs() < 1e-7 {
            break;
        }
        if value < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1 as f64, y2 as f64) as f32
}
