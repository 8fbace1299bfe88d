//! Section bindings and the per-binding reveal state machine
//!
//! A `SectionBinding` is the declarative association between a page
//! section, an animation preset, and a trigger mode. The animator turns
//! each accepted binding into a `RevealState` machine:
//!
//! `Hidden -> Animating -> Visible`
//!
//! `Hidden -> Animating` fires on intersection (or immediately for
//! on-mount bindings), `Animating -> Visible` on transition completion.
//! With the fire-once latch set, `Visible` is terminal; without it an
//! exit-intersection returns the binding to `Hidden` so it can fire again.

use unveil_animation::AnimationPreset;
use unveil_core::{BindError, VisualState};

/// When a binding transitions out of `Hidden`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Trigger as soon as the section is mounted and measurable
    OnMount,
    /// Trigger the first time the section intersects the margin-adjusted
    /// viewport
    OnFirstIntersect {
        /// Signed px adjustment of the effective viewport. Negative
        /// shrinks it, so the section must be that far inside the true
        /// viewport before the reveal fires.
        margin: f32,
        /// When set (the default), the binding never returns to `Hidden`
        /// once revealed, even if scrolled back out of view.
        fire_once: bool,
    },
}

impl TriggerMode {
    /// Viewport-triggered with no margin, fire-once
    pub fn viewport() -> Self {
        Self::viewport_margin(0.0)
    }

    /// Viewport-triggered with a signed margin, fire-once
    pub fn viewport_margin(margin: f32) -> Self {
        TriggerMode::OnFirstIntersect {
            margin,
            fire_once: true,
        }
    }

    /// Viewport-triggered, re-firing on every exit/re-entry
    pub fn retriggerable(margin: f32) -> Self {
        TriggerMode::OnFirstIntersect {
            margin,
            fire_once: false,
        }
    }

    pub fn is_on_mount(&self) -> bool {
        matches!(self, TriggerMode::OnMount)
    }

    /// The intersection margin (0.0 for on-mount bindings)
    pub fn margin(&self) -> f32 {
        match *self {
            TriggerMode::OnMount => 0.0,
            TriggerMode::OnFirstIntersect { margin, .. } => margin,
        }
    }

    /// Whether the binding latches at `Visible` after its first reveal
    pub fn fire_once(&self) -> bool {
        match *self {
            TriggerMode::OnMount => true,
            TriggerMode::OnFirstIntersect { fire_once, .. } => fire_once,
        }
    }
}

impl Default for TriggerMode {
    fn default() -> Self {
        Self::viewport()
    }
}

/// The lifecycle state of one bound section
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealState {
    /// Not yet triggered; the section renders in the preset's hidden state
    Hidden,
    /// Interpolating hidden -> visible
    Animating {
        /// Seconds since the trigger
        elapsed: f32,
    },
    /// Transition complete; terminal when fire-once is set
    Visible,
}

impl RevealState {
    pub fn is_hidden(&self) -> bool {
        matches!(self, RevealState::Hidden)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, RevealState::Animating { .. })
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }

    /// Seconds since trigger (0.0 when hidden)
    pub fn elapsed(&self) -> f32 {
        match *self {
            RevealState::Animating { elapsed } => elapsed,
            _ => 0.0,
        }
    }
}

/// A request to bind a section to a reveal
///
/// Built with the builder pattern and handed to
/// [`RevealAnimator::bind`](crate::RevealAnimator::bind). The key
/// identifies the section across layout passes; binding an already-bound
/// key replaces the previous binding.
#[derive(Clone, Debug)]
pub struct SectionBinding {
    pub(crate) key: String,
    pub(crate) preset: AnimationPreset,
    pub(crate) trigger: TriggerMode,
    pub(crate) child_preset: Option<AnimationPreset>,
    pub(crate) child_count: usize,
}

impl SectionBinding {
    /// Bind `key` to `preset`, viewport-triggered with no margin
    pub fn new(key: impl Into<String>, preset: AnimationPreset) -> Self {
        Self {
            key: key.into(),
            preset,
            trigger: TriggerMode::default(),
            child_preset: None,
            child_count: 0,
        }
    }

    /// Set the trigger mode
    pub fn trigger(mut self, mode: TriggerMode) -> Self {
        self.trigger = mode;
        self
    }

    /// Trigger immediately on mount instead of on intersection
    pub fn on_mount(mut self) -> Self {
        self.trigger = TriggerMode::OnMount;
        self
    }

    /// Register `count` staggered children animating with `preset`
    ///
    /// Child k begins `k * stagger_children` seconds after the parent
    /// triggers (the parent preset's stagger interval; without one, all
    /// children start with the parent).
    pub fn children(mut self, preset: AnimationPreset, count: usize) -> Self {
        self.child_preset = Some(preset);
        self.child_count = count;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reject malformed presets before the binding is registered
    pub fn validate(&self) -> Result<(), BindError> {
        self.preset.validate()?;
        if let Some(ref child) = self.child_preset {
            child.validate()?;
        }
        Ok(())
    }

    /// Visual state of the parent section for a given machine state
    pub(crate) fn visual_state(&self, state: RevealState) -> VisualState {
        match state {
            RevealState::Hidden => self.preset.hidden,
            RevealState::Animating { elapsed } => self.preset.sample(elapsed),
            RevealState::Visible => self.preset.visible,
        }
    }

    /// Derived machine state of child `index` for a parent state
    ///
    /// Children have no independent triggering: their clocks are the
    /// parent's elapsed time minus their stagger delay.
    pub(crate) fn child_state(&self, parent: RevealState, index: usize) -> RevealState {
        let preset = self.child_preset.as_ref().unwrap_or(&self.preset);
        match parent {
            RevealState::Hidden => RevealState::Hidden,
            RevealState::Visible => RevealState::Visible,
            RevealState::Animating { elapsed } => {
                let local = elapsed - self.preset.child_delay(index);
                if local < 0.0 {
                    RevealState::Hidden
                } else if preset.is_complete(local) {
                    RevealState::Visible
                } else {
                    RevealState::Animating { elapsed: local }
                }
            }
        }
    }

    /// Visual state of child `index` for a parent state
    pub(crate) fn child_visual_state(&self, parent: RevealState, index: usize) -> VisualState {
        let preset = self.child_preset.as_ref().unwrap_or(&self.preset);
        match self.child_state(parent, index) {
            RevealState::Hidden => preset.hidden,
            RevealState::Animating { elapsed } => preset.sample(elapsed),
            RevealState::Visible => preset.visible,
        }
    }

    /// Whether the whole binding (parent and every child) has finished
    /// at the parent's elapsed time
    pub(crate) fn is_complete(&self, elapsed: f32) -> bool {
        if !self.preset.is_complete(elapsed) {
            return false;
        }
        if self.child_count == 0 {
            return true;
        }
        let preset = self.child_preset.as_ref().unwrap_or(&self.preset);
        let last_delay = self.preset.child_delay(self.child_count - 1);
        elapsed >= last_delay && preset.is_complete(elapsed - last_delay)
    }
}
