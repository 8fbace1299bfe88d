//! Reveal presets
//!
//! An `AnimationPreset` is the declarative unit a section is bound with:
//! a hidden state, a visible state, and a transition between them. The
//! named constructors are the entrance effects the portfolio page ships
//! with; `custom` covers everything else.
//!
//! Sampling is pure: `(elapsed, preset) -> VisualState`, no clocks and no
//! per-preset mutable state. The binding layer owns elapsed time.

use crate::easing::Easing;
use crate::sequence::KeyframeSequence;
use crate::spring::SpringConfig;
use crate::transition::Transition;
use unveil_core::{Interpolate, PresetError, VisualState};

/// A named pair of visual states and the transition between them
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationPreset {
    /// State rendered before the reveal triggers
    pub hidden: VisualState,
    /// State settled into once the reveal completes
    pub visible: VisualState,
    /// Timing between the two states
    pub transition: Transition,
    /// Optional decorative rotation loop layered over the visible state
    pub rotation_loop: Option<KeyframeSequence>,
}

impl AnimationPreset {
    /// Build a preset from explicit states and transition
    pub fn custom(hidden: VisualState, visible: VisualState, transition: Transition) -> Self {
        Self {
            hidden,
            visible,
            transition,
            rotation_loop: None,
        }
    }

    /// Fade in while sliding up 20px over 0.6s (section entrances)
    pub fn fade_in_up() -> Self {
        Self::custom(
            VisualState::hidden_offset(20.0),
            VisualState::IDENTITY,
            Transition::tween(0.6),
        )
    }

    /// Fade in with children cascading at `interval` seconds apart
    /// (skill grids and project card grids use 0.1)
    pub fn stagger_container(interval: f32) -> Self {
        Self::custom(
            VisualState::transparent(),
            VisualState::IDENTITY,
            Transition::tween(0.3).with_stagger(interval),
        )
    }

    /// Pop in from 80% scale on a stiffness-100 spring (grid items)
    pub fn pop_in() -> Self {
        Self::custom(
            VisualState::hidden_scaled(0.8),
            VisualState::IDENTITY,
            Transition::spring(SpringConfig::with_stiffness(100.0)),
        )
    }

    /// Endless [0, 5, 0, -5, 0] degree rotation wobble over 5s
    /// (the hero badge)
    pub fn wobble() -> Self {
        Self {
            hidden: VisualState::IDENTITY,
            visible: VisualState::IDENTITY,
            transition: Transition::tween(0.0),
            rotation_loop: Some(
                KeyframeSequence::new(5.0)
                    .evenly(&[0.0, 5.0, 0.0, -5.0, 0.0], Easing::EaseInOut)
                    .looping(true),
            ),
        }
    }

    /// Attach a rotation loop to any preset
    pub fn with_rotation_loop(mut self, sequence: KeyframeSequence) -> Self {
        self.rotation_loop = Some(sequence);
        self
    }

    /// Sample the visual state at `elapsed` seconds after trigger
    ///
    /// Before the trigger (and through any delay) this is `hidden`; after
    /// completion it is `visible`. Spring transitions may overshoot the
    /// visible state on the way. A rotation loop keeps mutating rotation
    /// after the base transition settles.
    pub fn sample(&self, elapsed: f32) -> VisualState {
        let progress = self.transition.progress(elapsed);
        let mut state = self.hidden.lerp(&self.visible, progress);
        if let Some(ref sequence) = self.rotation_loop {
            if let Some(rotation) = sequence.sample(elapsed) {
                state.rotation = rotation;
            }
        }
        state
    }

    /// Check if the reveal has finished at `elapsed` seconds
    ///
    /// A preset with a looping sequence never finishes.
    pub fn is_complete(&self, elapsed: f32) -> bool {
        if let Some(ref sequence) = self.rotation_loop {
            if !sequence.is_complete(elapsed) {
                return false;
            }
        }
        self.transition.is_complete(elapsed)
    }

    /// Delay of the k-th staggered child relative to the trigger time
    pub fn child_delay(&self, index: usize) -> f32 {
        self.transition.child_delay(index)
    }

    /// Reject presets that cannot be animated
    pub fn validate(&self) -> Result<(), PresetError> {
        if !self.hidden.is_finite() || !self.visible.is_finite() {
            return Err(PresetError::NonFiniteState);
        }
        self.transition.validate()
    }
}

impl Default for AnimationPreset {
    fn default() -> Self {
        Self::fade_in_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_up_endpoints() {
        let preset = AnimationPreset::fade_in_up();
        let start = preset.sample(0.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.y, 20.0);

        let done = preset.sample(0.6);
        assert_eq!(done, VisualState::IDENTITY);
        assert!(preset.is_complete(0.6));
        assert!(!preset.is_complete(0.3));
    }

    #[test]
    fn test_sample_moves_toward_visible() {
        let preset = AnimationPreset::fade_in_up();
        let early = preset.sample(0.1);
        let late = preset.sample(0.5);
        assert!(late.opacity > early.opacity);
        assert!(late.y < early.y);
    }

    #[test]
    fn test_pop_in_overshoots_scale() {
        let preset = AnimationPreset::pop_in();
        // Underdamped spring: scale passes 1.0 on the way in
        let mut max_scale = 0.0_f32;
        for i in 0..200 {
            max_scale = max_scale.max(preset.sample(i as f32 * 0.01).scale);
        }
        assert!(max_scale > 1.0);
        assert!(preset.is_complete(5.0));
        assert_eq!(preset.sample(5.0), VisualState::IDENTITY);
    }

    #[test]
    fn test_stagger_container_child_schedule() {
        let preset = AnimationPreset::stagger_container(0.1);
        for k in 0..3 {
            assert!((preset.child_delay(k) - 0.1 * k as f32).abs() < 1e-6);
        }
    }

    #[test]
    fn test_wobble_never_completes() {
        let preset = AnimationPreset::wobble();
        assert!(!preset.is_complete(1000.0));
        // Quarter way through the 5s loop the badge is at +5 degrees
        assert!((preset.sample(1.25).rotation - 5.0).abs() < 1e-4);
        // Opacity untouched by the loop
        assert_eq!(preset.sample(1.25).opacity, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_presets() {
        assert!(AnimationPreset::fade_in_up().validate().is_ok());

        let bad_state = AnimationPreset::custom(
            VisualState::new(f32::INFINITY, 0.0, 1.0, 0.0),
            VisualState::IDENTITY,
            Transition::tween(0.5),
        );
        assert_eq!(bad_state.validate(), Err(PresetError::NonFiniteState));

        let bad_transition = AnimationPreset::custom(
            VisualState::transparent(),
            VisualState::IDENTITY,
            Transition::tween(-0.5),
        );
        assert!(bad_transition.validate().is_err());
    }

    #[test]
    fn test_sample_is_pure() {
        let preset = AnimationPreset::pop_in();
        assert_eq!(preset.sample(0.2), preset.sample(0.2));
    }
}
