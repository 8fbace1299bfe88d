//! Unveil Core
//!
//! Foundational types for the Unveil reveal-animation library:
//!
//! - **Geometry**: points, sizes, and rectangles with the intersection
//!   tests viewport triggering is built on
//! - **Interpolation**: the `Interpolate` trait for animatable values
//! - **Visual State**: the attribute set (opacity, offset, scale,
//!   rotation) a reveal animation drives
//! - **Errors**: typed rejection of malformed presets and bindings
//!
//! # Example
//!
//! ```rust
//! use unveil_core::{Rect, VisualState, Interpolate};
//!
//! // A viewport shrunk by a 100px margin triggers reveals early
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0).expand(-100.0);
//! let section = Rect::new(0.0, 850.0, 1280.0, 400.0);
//! assert!(!viewport.intersects(&section));
//!
//! // Visual states interpolate component-wise
//! let hidden = VisualState::hidden_offset(20.0);
//! let mid = hidden.lerp(&VisualState::IDENTITY, 0.5);
//! assert!((mid.opacity - 0.5).abs() < 1e-6);
//! ```

pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod visual;

pub use error::{BindError, PresetError};
pub use geometry::{Point, Rect, Size};
pub use interpolate::Interpolate;
pub use visual::VisualState;
