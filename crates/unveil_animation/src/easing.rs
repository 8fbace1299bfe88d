//! Easing functions
//!
//! Maps normalized animation progress (0.0 to 1.0) onto an eased curve.
//! `EaseOut` is the default for entrance reveals: fast start, gentle
//! settle.

/// An easing curve applied to normalized progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing, constant velocity
    Linear,
    /// Quadratic ease-in (slow start)
    EaseIn,
    /// Quadratic ease-out (slow end)
    EaseOut,
    /// Quadratic ease-in-out (slow start and end)
    EaseInOut,
    /// Cubic bezier with control points (x1, y1, x2, y2), CSS-style
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the curve to progress t in [0.0, 1.0]
    ///
    /// Input is clamped; output of the named curves stays in [0.0, 1.0]
    /// (bezier curves may overshoot if their control points do).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

/// Evaluate a CSS cubic-bezier timing function at progress t
///
/// The curve runs from (0,0) to (1,1); t is an x coordinate, and the
/// result is the y at that x. x(u) is inverted with Newton's method,
/// falling back to bisection when the derivative degenerates.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let sample = |c1: f32, c2: f32, u: f32| {
        // Cubic bezier with P0=0, P3=1
        let one = 1.0 - u;
        3.0 * one * one * u * c1 + 3.0 * one * u * u * c2 + u * u * u
    };
    let sample_derivative = |c1: f32, c2: f32, u: f32| {
        let one = 1.0 - u;
        3.0 * one * one * c1 + 6.0 * one * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
    };

    // Newton's method to find u such that x(u) = t
    let mut u = t;
    for _ in 0..8 {
        let x = sample(x1, x2, u) - t;
        if x.abs() < 1e-5 {
            return sample(y1, y2, u);
        }
        let dx = sample_derivative(x1, x2, u);
        if dx.abs() < 1e-6 {
            break;
        }
        u -= x / dx;
    }

    // Bisection fallback
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    u = t;
    while hi - lo > 1e-5 {
        if sample(x1, x2, u) < t {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) * 0.5;
    }
    sample(y1, y2, u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ];
        for curve in curves {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-4, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_ease_out_front_loaded() {
        // Ease-out covers more than half the distance in the first half
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let curve = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = curve.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-4);
            prev = v;
        }
    }
}
