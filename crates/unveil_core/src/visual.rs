//! Visual state of a revealed element
//!
//! A reveal animation interpolates between two `VisualState`s: the hidden
//! state a section renders in before triggering, and the visible state it
//! settles into. The attribute set matches what entrance effects actually
//! drive: opacity, vertical offset, scale, and rotation.

use crate::interpolate::Interpolate;

/// The renderable attributes a reveal animation drives
///
/// States interpolate component-wise. The identity state (fully opaque,
/// no offset, unit scale, no rotation) is what a section renders as once
/// its reveal completes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Opacity, 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
    /// Vertical offset in px (positive = below resting position)
    pub y: f32,
    /// Uniform scale factor, 1.0 = natural size
    pub scale: f32,
    /// Rotation in degrees
    pub rotation: f32,
}

impl VisualState {
    /// The resting state of a fully revealed element
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    pub const fn new(opacity: f32, y: f32, scale: f32, rotation: f32) -> Self {
        Self {
            opacity,
            y,
            scale,
            rotation,
        }
    }

    /// Fully transparent, offset down by `y` px (fade-in-up hidden state)
    pub const fn hidden_offset(y: f32) -> Self {
        Self {
            opacity: 0.0,
            y,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Fully transparent at `scale` (pop-in hidden state)
    pub const fn hidden_scaled(scale: f32) -> Self {
        Self {
            opacity: 0.0,
            y: 0.0,
            scale,
            rotation: 0.0,
        }
    }

    /// Fully transparent with no transform (stagger-container hidden state)
    pub const fn transparent() -> Self {
        Self {
            opacity: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Check that every attribute is a finite number
    pub fn is_finite(&self) -> bool {
        self.opacity.is_finite()
            && self.y.is_finite()
            && self.scale.is_finite()
            && self.rotation.is_finite()
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for VisualState {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: self.opacity.lerp(&other.opacity, t),
            y: self.y.lerp(&other.y, t),
            scale: self.scale.lerp(&other.scale, t),
            rotation: self.rotation.lerp(&other.rotation, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.opacity.approx_eq(&other.opacity, epsilon)
            && self.y.approx_eq(&other.y, epsilon)
            && self.scale.approx_eq(&other.scale, epsilon)
            && self.rotation.approx_eq(&other.rotation, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_componentwise() {
        let hidden = VisualState::hidden_offset(20.0);
        let mid = hidden.lerp(&VisualState::IDENTITY, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.y - 10.0).abs() < 1e-6);
        assert!((mid.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_reaches_identity() {
        let hidden = VisualState::hidden_scaled(0.8);
        assert_eq!(hidden.lerp(&VisualState::IDENTITY, 1.0), VisualState::IDENTITY);
    }

    #[test]
    fn test_is_finite() {
        assert!(VisualState::IDENTITY.is_finite());
        let bad = VisualState::new(f32::NAN, 0.0, 1.0, 0.0);
        assert!(!bad.is_finite());
    }
}
