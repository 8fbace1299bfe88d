//! Animatable value interpolation
//!
//! Everything an animation drives implements `Interpolate`: linear blending
//! between two states plus an approximate-equality check used for settle
//! detection.

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_lerp() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((20.0_f32.lerp(&0.0, 0.25) - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(3.0_f32.lerp(&7.0, 0.0), 3.0);
        assert_eq!(3.0_f32.lerp(&7.0, 1.0), 7.0);
    }

    #[test]
    fn test_approx_eq() {
        assert!(1.0_f32.approx_eq(&1.0005, 0.001));
        assert!(!1.0_f32.approx_eq(&1.1, 0.001));
    }
}
