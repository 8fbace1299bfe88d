//! Unveil Animation
//!
//! The declarative animation layer behind section reveals.
//!
//! # Features
//!
//! - **Easing Functions**: linear, quadratic eases, and cubic bezier curves
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Transitions**: tween or spring timing plus delay and child stagger
//! - **Presets**: named hidden/visible state pairs (`fade_in_up`, `pop_in`,
//!   `stagger_container`, `wobble`)
//! - **Pure Sampling**: `preset.sample(elapsed)` maps elapsed time to a
//!   `VisualState` with no framework coupling and no hidden state
//! - **Keyframe Sequences**: looping single-attribute sequences for
//!   decorative motion
//!
//! # Example
//!
//! ```rust
//! use unveil_animation::AnimationPreset;
//!
//! let preset = AnimationPreset::fade_in_up();
//! let start = preset.sample(0.0);
//! assert_eq!(start.opacity, 0.0);
//!
//! let done = preset.sample(0.6);
//! assert_eq!(done.opacity, 1.0);
//! assert!(preset.is_complete(0.6));
//! ```

pub mod easing;
pub mod preset;
pub mod sequence;
pub mod spring;
pub mod transition;

pub use easing::Easing;
pub use preset::AnimationPreset;
pub use sequence::{KeyframeSequence, SequenceKeyframe};
pub use spring::{Spring, SpringConfig};
pub use transition::{Timing, Transition};
