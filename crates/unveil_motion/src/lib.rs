//! Unveil Motion
//!
//! The reveal animator: binds page sections to declarative animation
//! presets and drives them from hidden to visible when they first enter
//! the viewport.
//!
//! # Features
//!
//! - **Section Bindings**: a preset plus a trigger mode per section
//! - **Trigger Modes**: immediate on mount, or viewport-triggered with a
//!   signed intersection margin and a fire-once latch
//! - **State Machine**: `Hidden -> Animating -> Visible` per binding,
//!   terminal at `Visible` when fire-once is set
//! - **Stagger Cascades**: children of a group start `k * interval`
//!   seconds after their parent triggers
//! - **Deferred Binding**: sections without measurable geometry arm on
//!   their first layout pass instead of erroring
//! - **RAII Teardown**: dropping a subscription unbinds and releases the
//!   observer entry
//!
//! # Example
//!
//! ```rust
//! use unveil_animation::AnimationPreset;
//! use unveil_core::Rect;
//! use unveil_motion::{RevealAnimator, SectionBinding, TriggerMode};
//!
//! let animator = RevealAnimator::new();
//! let _sub = animator
//!     .bind(SectionBinding::new("about", AnimationPreset::fade_in_up())
//!         .trigger(TriggerMode::viewport_margin(-100.0)))
//!     .unwrap();
//!
//! animator.set_layout("about", Rect::new(0.0, 900.0, 1280.0, 400.0));
//! animator.set_viewport(Rect::new(0.0, 0.0, 1280.0, 800.0));
//! assert!(animator.state_of("about").unwrap().is_hidden());
//!
//! // Scroll the section well into view: the reveal begins
//! animator.set_viewport(Rect::new(0.0, 400.0, 1280.0, 800.0));
//! assert!(animator.state_of("about").unwrap().is_animating());
//! ```

pub mod animator;
pub mod binding;

pub use animator::{AnimatorHandle, BindingId, RevealAnimator, RevealSubscription};
pub use binding::{RevealState, SectionBinding, TriggerMode};
