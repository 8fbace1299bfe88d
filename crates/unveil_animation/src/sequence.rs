//! Keyframe sequences
//!
//! A `KeyframeSequence` drives one attribute through a series of timed
//! values, optionally looping forever. Reveals use it for decorative
//! motion layered over a preset (the hero badge's endless rotation
//! wobble); it is sampled purely by elapsed time, never ticked.

use crate::easing::Easing;
use unveil_core::Interpolate;

/// A keyframe at a normalized time position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceKeyframe {
    /// Time position within the sequence, 0.0 to 1.0
    pub time: f32,
    /// Attribute value at this keyframe
    pub value: f32,
    /// Easing applied when transitioning TO this keyframe
    pub easing: Easing,
}

impl SequenceKeyframe {
    pub fn new(time: f32, value: f32, easing: Easing) -> Self {
        Self {
            time,
            value,
            easing,
        }
    }
}

/// A timed sequence of keyframes over one attribute
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeSequence {
    /// Duration of one pass in seconds
    duration: f32,
    /// Keyframes sorted by time
    keyframes: Vec<SequenceKeyframe>,
    /// Whether the sequence repeats indefinitely
    looping: bool,
}

impl KeyframeSequence {
    /// Create an empty sequence with the given duration in seconds
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            keyframes: Vec::new(),
            looping: false,
        }
    }

    /// Add a keyframe (builder pattern); keyframes stay sorted by time
    pub fn keyframe(mut self, time: f32, value: f32, easing: Easing) -> Self {
        self.keyframes.push(SequenceKeyframe::new(time, value, easing));
        self.keyframes.sort_by(|a, b| {
            a.time
                .partial_cmp(&b.time)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self
    }

    /// Spread `values` evenly from time 0.0 to 1.0 with one easing
    ///
    /// `evenly([0.0, 5.0, 0.0, -5.0, 0.0], ..)` is the wobble shape.
    pub fn evenly(mut self, values: &[f32], easing: Easing) -> Self {
        let last = values.len().saturating_sub(1).max(1) as f32;
        for (i, &value) in values.iter().enumerate() {
            self.keyframes
                .push(SequenceKeyframe::new(i as f32 / last, value, easing));
        }
        self
    }

    /// Enable infinite looping
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Check if the sequence has finished at `elapsed` seconds
    ///
    /// A looping sequence never finishes.
    pub fn is_complete(&self, elapsed: f32) -> bool {
        !self.looping && elapsed >= self.duration
    }

    /// Sample the attribute at `elapsed` seconds
    ///
    /// Looping sequences wrap; non-looping sequences hold their final
    /// value. Returns None for an empty sequence.
    pub fn sample(&self, elapsed: f32) -> Option<f32> {
        if self.keyframes.is_empty() || self.duration <= 0.0 {
            return self.keyframes.last().map(|k| k.value);
        }

        let progress = if self.looping {
            (elapsed / self.duration).rem_euclid(1.0)
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.sample_at(progress)
    }

    /// Sample at a normalized progress (0.0 to 1.0)
    pub fn sample_at(&self, progress: f32) -> Option<f32> {
        if self.keyframes.is_empty() {
            return None;
        }

        let progress = progress.clamp(0.0, 1.0);

        // Find surrounding keyframes
        let mut prev = &self.keyframes[0];
        let mut next = &self.keyframes[0];
        for kf in &self.keyframes {
            if kf.time <= progress {
                prev = kf;
            }
            if kf.time >= progress {
                next = kf;
                break;
            }
        }

        if (prev.time - next.time).abs() < f32::EPSILON {
            return Some(prev.value);
        }

        let local = (progress - prev.time) / (next.time - prev.time);
        let eased = next.easing.apply(local);
        Some(prev.value.lerp(&next.value, eased))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wobble() -> KeyframeSequence {
        KeyframeSequence::new(5.0)
            .evenly(&[0.0, 5.0, 0.0, -5.0, 0.0], Easing::EaseInOut)
            .looping(true)
    }

    #[test]
    fn test_evenly_spreads_keyframes() {
        let seq = wobble();
        assert!((seq.sample_at(0.0).unwrap() - 0.0).abs() < 1e-6);
        assert!((seq.sample_at(0.25).unwrap() - 5.0).abs() < 1e-6);
        assert!((seq.sample_at(0.5).unwrap() - 0.0).abs() < 1e-6);
        assert!((seq.sample_at(0.75).unwrap() - (-5.0)).abs() < 1e-6);
        assert!((seq.sample_at(1.0).unwrap() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_loop_wraps() {
        let seq = wobble();
        // 6.25s into a 5s loop = 1.25s in = quarter way = peak
        assert!((seq.sample(6.25).unwrap() - 5.0).abs() < 1e-4);
        assert!(!seq.is_complete(100.0));
    }

    #[test]
    fn test_non_looping_holds_final_value() {
        let seq = KeyframeSequence::new(1.0)
            .keyframe(0.0, 0.0, Easing::Linear)
            .keyframe(1.0, 10.0, Easing::Linear);
        assert!((seq.sample(2.5).unwrap() - 10.0).abs() < 1e-6);
        assert!(seq.is_complete(1.0));
        assert!(!seq.is_complete(0.5));
    }

    #[test]
    fn test_segment_interpolation() {
        let seq = KeyframeSequence::new(1.0)
            .keyframe(0.0, 0.0, Easing::Linear)
            .keyframe(0.5, 10.0, Easing::Linear)
            .keyframe(1.0, 0.0, Easing::Linear);
        assert!((seq.sample_at(0.25).unwrap() - 5.0).abs() < 1e-6);
        assert!((seq.sample_at(0.75).unwrap() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_sequence() {
        let seq = KeyframeSequence::new(1.0);
        assert!(seq.sample(0.5).is_none());
    }
}
