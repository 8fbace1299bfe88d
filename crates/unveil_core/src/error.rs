//! Error types
//!
//! The only rejectable condition in the library is a malformed preset or
//! binding configuration. Everything else is policy rather than failure:
//! a section without measurable geometry defers its binding, and handles
//! to a dropped animator no-op.

use thiserror::Error;

/// A preset whose states or transition cannot be animated
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PresetError {
    #[error("visual state contains a non-finite attribute")]
    NonFiniteState,

    #[error("transition duration must be non-negative, got {0}")]
    NegativeDuration(f32),

    #[error("transition delay must be non-negative, got {0}")]
    NegativeDelay(f32),

    #[error("stagger interval must be non-negative, got {0}")]
    NegativeStagger(f32),

    #[error("spring {param} must be positive, got {value}")]
    NonPositiveSpring { param: &'static str, value: f32 },
}

/// A binding request that cannot be registered
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BindError {
    #[error("invalid preset: {0}")]
    Preset(#[from] PresetError),

    #[error("animator has been dropped")]
    AnimatorDropped,
}
