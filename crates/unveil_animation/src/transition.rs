//! Transition timing
//!
//! A `Transition` describes how a reveal moves between its hidden and
//! visible states: either a timed tween with an easing curve, or a spring
//! whose duration is emergent. Delay and per-child stagger are layered on
//! top of either timing.
//!
//! Progress is a pure function of elapsed time. Spring progress is
//! re-simulated from zero at a fixed internal step, so two samples at the
//! same elapsed time always agree regardless of frame cadence.

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use unveil_core::PresetError;

/// Fixed integration step for deterministic spring sampling
const SPRING_SAMPLE_DT: f32 = 1.0 / 240.0;

/// How a transition progresses from 0.0 to 1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timing {
    /// A timed tween: `duration` seconds through `easing`
    Tween { duration: f32, easing: Easing },
    /// A physics spring; completes when the simulation settles
    Spring(SpringConfig),
}

/// Declarative timing for a reveal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub timing: Timing,
    /// Delay in seconds before the transition starts
    pub delay: f32,
    /// Incremental delay applied per child, in sibling order
    pub stagger_children: Option<f32>,
}

impl Transition {
    /// A tween over `duration` seconds with the default ease-out curve
    pub fn tween(duration: f32) -> Self {
        Self {
            timing: Timing::Tween {
                duration,
                easing: Easing::EaseOut,
            },
            delay: 0.0,
            stagger_children: None,
        }
    }

    /// A spring transition
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            timing: Timing::Spring(config),
            delay: 0.0,
            stagger_children: None,
        }
    }

    /// Set the easing curve (tween timing only; no effect on springs)
    pub fn with_easing(mut self, easing: Easing) -> Self {
        if let Timing::Tween { duration, .. } = self.timing {
            self.timing = Timing::Tween { duration, easing };
        }
        self
    }

    /// Set the start delay in seconds
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Stagger children by `interval` seconds each
    pub fn with_stagger(mut self, interval: f32) -> Self {
        self.stagger_children = Some(interval);
        self
    }

    /// Delay of the k-th child relative to the parent's trigger time
    ///
    /// With stagger interval s this is `delay + k * s`; without stagger all
    /// children share the parent's delay.
    pub fn child_delay(&self, index: usize) -> f32 {
        self.delay + self.stagger_children.unwrap_or(0.0) * index as f32
    }

    /// Eased progress (0.0 to 1.0) at `elapsed` seconds after trigger
    ///
    /// Delay is consumed first: progress is 0.0 until `elapsed > delay`.
    /// Spring progress may overshoot 1.0 before settling.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let active = elapsed - self.delay;
        if active <= 0.0 {
            return 0.0;
        }
        match self.timing {
            Timing::Tween { duration, easing } => {
                if duration <= 0.0 {
                    return 1.0;
                }
                easing.apply(active / duration)
            }
            Timing::Spring(config) => {
                let mut spring = Spring::new(config, 0.0);
                spring.set_target(1.0);
                let steps = (active / SPRING_SAMPLE_DT) as u32;
                for _ in 0..steps {
                    spring.step(SPRING_SAMPLE_DT);
                    if spring.is_settled() {
                        return 1.0;
                    }
                }
                spring.value()
            }
        }
    }

    /// Check if the transition has finished at `elapsed` seconds
    pub fn is_complete(&self, elapsed: f32) -> bool {
        let active = elapsed - self.delay;
        if active < 0.0 {
            return false;
        }
        match self.timing {
            Timing::Tween { duration, .. } => active >= duration,
            Timing::Spring(config) => {
                let mut spring = Spring::new(config, 0.0);
                spring.set_target(1.0);
                let steps = (active / SPRING_SAMPLE_DT) as u32;
                for _ in 0..steps {
                    spring.step(SPRING_SAMPLE_DT);
                    if spring.is_settled() {
                        return true;
                    }
                }
                spring.is_settled()
            }
        }
    }

    /// Reject negative durations, delays, or stagger intervals
    pub fn validate(&self) -> Result<(), PresetError> {
        if let Timing::Tween { duration, .. } = self.timing {
            if !duration.is_finite() || duration < 0.0 {
                return Err(PresetError::NegativeDuration(duration));
            }
        }
        if let Timing::Spring(config) = self.timing {
            config.validate()?;
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(PresetError::NegativeDelay(self.delay));
        }
        if let Some(stagger) = self.stagger_children {
            if !stagger.is_finite() || stagger < 0.0 {
                return Err(PresetError::NegativeStagger(stagger));
            }
        }
        Ok(())
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::tween(0.3)
    }
}
