//! The reveal animator
//!
//! Owns every section binding, observes the viewport, and drives each
//! binding's state machine. Bindings register through [`RevealAnimator::bind`]
//! and are removed when their [`RevealSubscription`] drops, so observers can
//! never dangle past their section.
//!
//! Evaluation is level-triggered: every viewport or layout update is checked
//! against the current geometry, and `tick(dt)` advances whatever is
//! animating. Nothing here blocks and nothing polls.

use crate::binding::{RevealState, SectionBinding, TriggerMode};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, Weak};
use unveil_core::{BindError, Rect, VisualState};

new_key_type! {
    /// Handle to a registered section binding
    pub struct BindingId;
}

/// One bound section and its machine state
struct BindingEntry {
    config: SectionBinding,
    /// Section geometry; `Rect::ZERO` until the first layout pass
    rect: Rect,
    state: RevealState,
    /// Fire-once latch: set on the first trigger, never cleared
    fired: bool,
    /// Position in the global first-reveal order
    fire_order: Option<u64>,
}

impl BindingEntry {
    /// A binding without measurable geometry stays dormant until layout
    fn is_deferred(&self) -> bool {
        self.rect.is_empty()
    }
}

struct AnimatorInner {
    bindings: SlotMap<BindingId, BindingEntry>,
    by_key: FxHashMap<String, BindingId>,
    viewport: Rect,
    fire_seq: u64,
}

impl AnimatorInner {
    /// Check one binding against the current viewport and fire or revert
    /// its machine as the trigger mode dictates
    fn evaluate(&mut self, id: BindingId) {
        let viewport = self.viewport;
        let Some(entry) = self.bindings.get_mut(id) else {
            return;
        };
        if entry.is_deferred() {
            return;
        }

        match entry.config.trigger {
            TriggerMode::OnMount => {
                if entry.state.is_hidden() && !entry.fired {
                    Self::fire(entry, &mut self.fire_seq);
                }
            }
            TriggerMode::OnFirstIntersect { margin, fire_once } => {
                let entered = viewport.expand(margin).intersects(&entry.rect);
                match entry.state {
                    RevealState::Hidden => {
                        // A fired fire-once binding ignores re-entry
                        if entered && !(fire_once && entry.fired) {
                            Self::fire(entry, &mut self.fire_seq);
                        }
                    }
                    RevealState::Visible => {
                        if !entered && !fire_once {
                            tracing::debug!(
                                "reveal '{}' left viewport, re-arming",
                                entry.config.key
                            );
                            entry.state = RevealState::Hidden;
                        }
                    }
                    // An in-flight reveal is not cancelled by exit
                    RevealState::Animating { .. } => {}
                }
            }
        }
    }

    fn fire(entry: &mut BindingEntry, fire_seq: &mut u64) {
        entry.state = RevealState::Animating { elapsed: 0.0 };
        entry.fired = true;
        if entry.fire_order.is_none() {
            entry.fire_order = Some(*fire_seq);
            *fire_seq += 1;
        }
        tracing::debug!("reveal '{}' triggered", entry.config.key);
    }
}

/// The reveal animator
///
/// Shared by cloning; all clones see the same bindings. Subscriptions hold
/// a weak [`AnimatorHandle`], so a dropped animator tears everything down
/// and late unbinds no-op.
#[derive(Clone)]
pub struct RevealAnimator {
    inner: Arc<Mutex<AnimatorInner>>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(AnimatorInner {
                bindings: SlotMap::with_key(),
                by_key: FxHashMap::default(),
                viewport: Rect::ZERO,
                fire_seq: 0,
            })),
        }
    }

    /// Get a weak handle for passing to subscriptions
    pub fn handle(&self) -> AnimatorHandle {
        AnimatorHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a section binding
    ///
    /// The binding starts `Hidden` and deferred: it arms on the first
    /// [`set_layout`](Self::set_layout) pass that gives the section a
    /// measurable box. Binding a key that is already bound replaces the
    /// previous binding, restarting it from `Hidden` - re-binding with the
    /// same preset therefore converges on the same visible state rather
    /// than stacking offsets.
    pub fn bind(&self, binding: SectionBinding) -> Result<RevealSubscription, BindError> {
        binding.validate()?;

        let mut inner = self.inner.lock().unwrap();
        let key = binding.key.clone();
        let id = inner.bindings.insert(BindingEntry {
            config: binding,
            rect: Rect::ZERO,
            state: RevealState::Hidden,
            fired: false,
            fire_order: None,
        });
        if let Some(old) = inner.by_key.insert(key.clone(), id) {
            inner.bindings.remove(old);
            tracing::debug!("rebinding '{}', previous binding replaced", key);
        } else {
            tracing::debug!("bound '{}' (deferred until layout)", key);
        }

        Ok(RevealSubscription {
            handle: self.handle(),
            id,
            key,
        })
    }

    /// Report a section's geometry from a layout pass
    ///
    /// Arms deferred bindings and re-evaluates the section against the
    /// current viewport (layout can move a section into or out of it).
    pub fn set_layout(&self, key: &str, rect: Rect) {
        let mut inner = self.inner.lock().unwrap();
        let Some(&id) = inner.by_key.get(key) else {
            return;
        };
        if let Some(entry) = inner.bindings.get_mut(id) {
            let was_deferred = entry.is_deferred();
            entry.rect = rect;
            if was_deferred && !entry.is_deferred() {
                tracing::debug!("section '{}' measured, binding armed", key);
            }
        }
        inner.evaluate(id);
    }

    /// Report the current viewport from a scroll or resize
    ///
    /// Re-evaluates every binding. Bindings fire in the order their
    /// sections first intersect.
    pub fn set_viewport(&self, viewport: Rect) {
        let mut inner = self.inner.lock().unwrap();
        inner.viewport = viewport;
        let ids: SmallVec<[BindingId; 16]> = inner.bindings.keys().collect();
        for id in ids {
            inner.evaluate(id);
        }
    }

    /// Advance all animating bindings by `dt` seconds
    ///
    /// Returns true while any binding is still animating (needs another
    /// frame).
    pub fn tick(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let mut completed: SmallVec<[BindingId; 8]> = SmallVec::new();
        let mut any_animating = false;

        for (id, entry) in inner.bindings.iter_mut() {
            if let RevealState::Animating { elapsed } = entry.state {
                let elapsed = elapsed + dt;
                if entry.config.is_complete(elapsed) {
                    entry.state = RevealState::Visible;
                    completed.push(id);
                } else {
                    entry.state = RevealState::Animating { elapsed };
                    any_animating = true;
                }
            }
        }

        for id in completed {
            if let Some(entry) = inner.bindings.get(id) {
                tracing::debug!("reveal '{}' complete", entry.config.key);
            }
        }
        any_animating
    }

    /// Current machine state of a bound section
    pub fn state_of(&self, key: &str) -> Option<RevealState> {
        let inner = self.inner.lock().unwrap();
        let id = *inner.by_key.get(key)?;
        inner.bindings.get(id).map(|e| e.state)
    }

    /// Current visual state of a bound section
    pub fn visual_state(&self, key: &str) -> Option<VisualState> {
        let inner = self.inner.lock().unwrap();
        let id = *inner.by_key.get(key)?;
        inner.bindings.get(id).map(|e| e.config.visual_state(e.state))
    }

    /// Machine state of child `index` of a staggered group
    pub fn child_state_of(&self, key: &str, index: usize) -> Option<RevealState> {
        let inner = self.inner.lock().unwrap();
        let id = *inner.by_key.get(key)?;
        inner
            .bindings
            .get(id)
            .map(|e| e.config.child_state(e.state, index))
    }

    /// Visual state of child `index` of a staggered group
    pub fn child_visual_state(&self, key: &str, index: usize) -> Option<VisualState> {
        let inner = self.inner.lock().unwrap();
        let id = *inner.by_key.get(key)?;
        inner
            .bindings
            .get(id)
            .map(|e| e.config.child_visual_state(e.state, index))
    }

    /// Position of a section in the global first-reveal order
    /// (None if it has never fired)
    pub fn reveal_order(&self, key: &str) -> Option<u64> {
        let inner = self.inner.lock().unwrap();
        let id = *inner.by_key.get(key)?;
        inner.bindings.get(id).and_then(|e| e.fire_order)
    }

    /// Check if a key is currently bound
    pub fn is_bound(&self, key: &str) -> bool {
        self.inner.lock().unwrap().by_key.contains_key(key)
    }

    /// Number of live bindings
    pub fn binding_count(&self) -> usize {
        self.inner.lock().unwrap().bindings.len()
    }

    /// Check if any binding is mid-animation
    pub fn has_active_reveals(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .bindings
            .iter()
            .any(|(_, e)| e.state.is_animating())
    }
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animator
///
/// Held by subscriptions so teardown can outlive the animator safely:
/// every operation upgrades or no-ops.
#[derive(Clone)]
pub struct AnimatorHandle {
    inner: Weak<Mutex<AnimatorInner>>,
}

impl AnimatorHandle {
    /// Remove a binding (subscription teardown)
    fn unbind(&self, id: BindingId, key: &str) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap();
            if inner.bindings.remove(id).is_some() {
                tracing::debug!("unbound '{}'", key);
            }
            // Only clear the key index if it still points at this binding;
            // a rebind may have replaced it already.
            if inner.by_key.get(key) == Some(&id) {
                inner.by_key.remove(key);
            }
        }
    }

    /// Check if the animator is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// RAII guard for one section binding
///
/// Dropping the subscription unbinds the section: an in-flight transition
/// is cancelled without completing, and its observer entry is released.
/// Re-binding afterwards restarts from `Hidden`.
pub struct RevealSubscription {
    handle: AnimatorHandle,
    id: BindingId,
    key: String,
}

impl RevealSubscription {
    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.handle.unbind(self.id, &self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_animation::AnimationPreset;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    fn bound_section(animator: &RevealAnimator, key: &str, y: f32) -> RevealSubscription {
        let sub = animator
            .bind(SectionBinding::new(key, AnimationPreset::fade_in_up()))
            .unwrap();
        animator.set_layout(key, Rect::new(0.0, y, 1280.0, 400.0));
        sub
    }

    #[test]
    fn test_bind_defers_until_layout() {
        let animator = RevealAnimator::new();
        let _sub = animator
            .bind(SectionBinding::new("about", AnimationPreset::fade_in_up()))
            .unwrap();
        animator.set_viewport(VIEWPORT);

        // No layout yet: still hidden even though the viewport is live
        assert!(animator.state_of("about").unwrap().is_hidden());

        // Layout inside the viewport arms and fires
        animator.set_layout("about", Rect::new(0.0, 100.0, 1280.0, 400.0));
        assert!(animator.state_of("about").unwrap().is_animating());
    }

    #[test]
    fn test_on_mount_fires_at_layout() {
        let animator = RevealAnimator::new();
        let _sub = animator
            .bind(SectionBinding::new("hero", AnimationPreset::fade_in_up()).on_mount())
            .unwrap();
        assert!(animator.state_of("hero").unwrap().is_hidden());

        // On-mount bindings need no viewport, only geometry
        animator.set_layout("hero", Rect::new(0.0, 0.0, 1280.0, 600.0));
        assert!(animator.state_of("hero").unwrap().is_animating());
    }

    #[test]
    fn test_out_of_view_stays_hidden() {
        let animator = RevealAnimator::new();
        let _sub = bound_section(&animator, "contact", 5000.0);
        animator.set_viewport(VIEWPORT);

        for _ in 0..100 {
            animator.tick(1.0 / 60.0);
        }
        assert!(animator.state_of("contact").unwrap().is_hidden());
        assert_eq!(
            animator.visual_state("contact").unwrap().opacity,
            0.0
        );
    }

    #[test]
    fn test_animates_to_visible() {
        let animator = RevealAnimator::new();
        let _sub = bound_section(&animator, "about", 100.0);
        animator.set_viewport(VIEWPORT);
        assert!(animator.state_of("about").unwrap().is_animating());

        // 0.6s tween at 60fps
        for _ in 0..37 {
            animator.tick(1.0 / 60.0);
        }
        assert!(animator.state_of("about").unwrap().is_visible());
        assert_eq!(
            animator.visual_state("about").unwrap(),
            unveil_core::VisualState::IDENTITY
        );
    }

    #[test]
    fn test_tick_reports_active_work() {
        let animator = RevealAnimator::new();
        let _sub = bound_section(&animator, "about", 100.0);
        animator.set_viewport(VIEWPORT);

        assert!(animator.has_active_reveals());
        assert!(animator.tick(0.1));
        assert!(!animator.tick(1.0));
        assert!(!animator.has_active_reveals());
    }

    #[test]
    fn test_subscription_drop_unbinds() {
        let animator = RevealAnimator::new();
        let sub = bound_section(&animator, "about", 100.0);
        animator.set_viewport(VIEWPORT);
        animator.tick(0.1);
        assert!(animator.is_bound("about"));

        drop(sub);
        assert!(!animator.is_bound("about"));
        assert_eq!(animator.binding_count(), 0);
        assert!(animator.state_of("about").is_none());
    }

    #[test]
    fn test_rebind_replaces_without_stacking() {
        let animator = RevealAnimator::new();
        let first = bound_section(&animator, "about", 100.0);
        let second = animator
            .bind(SectionBinding::new("about", AnimationPreset::fade_in_up()))
            .unwrap();
        animator.set_layout("about", Rect::new(0.0, 100.0, 1280.0, 400.0));
        animator.set_viewport(VIEWPORT);
        assert_eq!(animator.binding_count(), 1);

        // Dropping the stale subscription must not tear down the live one
        drop(first);
        assert!(animator.is_bound("about"));

        animator.tick(1.0);
        assert_eq!(
            animator.visual_state("about").unwrap(),
            unveil_core::VisualState::IDENTITY
        );
        drop(second);
        assert!(!animator.is_bound("about"));
    }

    #[test]
    fn test_reveal_order_follows_first_intersection() {
        let animator = RevealAnimator::new();
        let _a = bound_section(&animator, "about", 1000.0);
        let _b = bound_section(&animator, "skills", 2000.0);

        // Scroll past "about" first, then "skills"
        animator.set_viewport(Rect::new(0.0, 800.0, 1280.0, 800.0));
        animator.set_viewport(Rect::new(0.0, 1800.0, 1280.0, 800.0));

        assert!(animator.reveal_order("about").unwrap() < animator.reveal_order("skills").unwrap());
    }

    #[test]
    fn test_handle_outlives_animator() {
        let handle = {
            let animator = RevealAnimator::new();
            animator.handle()
        };
        assert!(!handle.is_alive());
        // Teardown through a dead handle must no-op, not panic
        handle.unbind(BindingId::default(), "gone");
    }
}
