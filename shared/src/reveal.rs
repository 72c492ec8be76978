//! # Reveal-on-Scroll Controller
//!
//! A one-shot latch per animated block: the first intersection with the
//! viewport reveals the block, and from then on nothing can hide it again.
//! The browser pushes intersection samples in; the controller answers with a
//! [`RevealOutcome`] telling the caller whether to detach its observer.
//!
//! ```rust
//! use shared::reveal::{RevealOutcome, ViewportRevealController};
//!
//! let mut block = ViewportRevealController::new();
//! block.mount();
//!
//! assert_eq!(block.on_intersection(0.0), RevealOutcome::StillHidden);
//! assert!(block.on_intersection(0.25).should_detach());
//! assert_eq!(block.on_intersection(0.0), RevealOutcome::Ignored);
//! assert!(block.current_state().is_visible);
//! ```

use crate::subscribers::Subscribers;

/// Intersection thresholds the browser observer reports at.
///
/// A target whose edge exactly touches the viewport reports ratio `0` and does
/// not reveal. The positive threshold guarantees another sample once any part
/// of it scrolls in; with `[0]` alone the browser stays silent until the target
/// leaves the viewport again.
pub const REVEAL_THRESHOLDS: [f64; 2] = [0.0, 0.01];

/// Fraction of the target's bounding box inside the viewport, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct IntersectionRatio(f64);

impl IntersectionRatio {
    /// Non-finite readings count as zero; anything above one is clamped.
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() {
            Self(raw.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_intersecting(self) -> bool {
        self.0 > 0.0
    }
}

impl From<f64> for IntersectionRatio {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub has_entered_viewport: bool,
    pub is_visible: bool,
}

impl RevealState {
    pub const HIDDEN: Self = Self {
        has_entered_viewport: false,
        is_visible: false,
    };

    pub const REVEALED: Self = Self {
        has_entered_viewport: true,
        is_visible: true,
    };
}

/// Where the controller is in its observation lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Target not mounted yet.
    Pending,
    Observing,
    /// Triggered once; observer released.
    Detached,
    Unmounted,
}

/// Result of delivering one intersection sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The controller is not observing; the sample had no effect.
    Ignored,
    /// Observing, but the target is still outside the viewport.
    StillHidden,
    /// The latch fired. The caller must detach its observer.
    Triggered(RevealState),
}

impl RevealOutcome {
    pub fn should_detach(self) -> bool {
        matches!(self, RevealOutcome::Triggered(_))
    }

    /// Detach decision for a sample delivered to a controller that may have
    /// been disposed already (`None`). A disposed controller always detaches.
    ///
    /// ```rust
    /// use shared::reveal::{RevealOutcome, RevealState};
    ///
    /// assert!(RevealOutcome::detaches(None));
    /// assert!(!RevealOutcome::detaches(Some(RevealOutcome::StillHidden)));
    /// assert!(RevealOutcome::detaches(Some(RevealOutcome::Triggered(RevealState::REVEALED))));
    /// ```
    pub fn detaches(outcome: Option<Self>) -> bool {
        outcome.map_or(true, Self::should_detach)
    }
}

/// Reveal trigger for one content block.
#[derive(Debug)]
pub struct ViewportRevealController {
    state: RevealState,
    observation: Observation,
    subscribers: Subscribers<RevealState>,
}

impl Default for ViewportRevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportRevealController {
    pub fn new() -> Self {
        Self {
            state: RevealState::HIDDEN,
            observation: Observation::Pending,
            subscribers: Subscribers::default(),
        }
    }

    pub fn observation(&self) -> Observation {
        self.observation
    }

    pub fn is_observing(&self) -> bool {
        self.observation == Observation::Observing
    }

    /// Begin observing the target. Returns whether observation is active.
    pub fn mount(&mut self) -> bool {
        match self.observation {
            Observation::Pending => {
                self.observation = Observation::Observing;
                true
            }
            Observation::Observing => true,
            Observation::Detached => false,
            Observation::Unmounted => {
                log::warn!("ignoring mount of an unmounted reveal controller");
                false
            }
        }
    }

    pub fn on_intersection(&mut self, ratio: impl Into<IntersectionRatio>) -> RevealOutcome {
        if !self.is_observing() {
            return RevealOutcome::Ignored;
        }
        let ratio = ratio.into();
        if !ratio.is_intersecting() {
            return RevealOutcome::StillHidden;
        }

        log::trace!("block entered viewport (ratio {:.3})", ratio.value());
        self.state = RevealState::REVEALED;
        self.observation = Observation::Detached;
        self.subscribers.publish(&self.state);
        // Nothing can be published after the latch.
        self.subscribers.clear();
        RevealOutcome::Triggered(self.state)
    }

    pub fn current_state(&self) -> RevealState {
        self.state
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&RevealState) + 'static) {
        self.subscribers.subscribe(callback);
    }

    /// Stop observing. Immediate and unconditional; the latched state is kept.
    pub fn unmount(&mut self) {
        self.observation = Observation::Unmounted;
        self.subscribers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn observing() -> ViewportRevealController {
        let mut controller = ViewportRevealController::new();
        assert!(controller.mount());
        controller
    }

    #[test]
    fn test_never_intersecting_block_stays_hidden() {
        let mut controller = observing();
        for _ in 0..10 {
            assert_eq!(controller.on_intersection(0.0), RevealOutcome::StillHidden);
        }
        controller.unmount();
        assert!(!controller.current_state().has_entered_viewport);
    }

    #[test]
    fn test_unmounted_target_stays_hidden() {
        let mut controller = ViewportRevealController::new();
        assert_eq!(controller.on_intersection(1.0), RevealOutcome::Ignored);
        assert_eq!(controller.current_state(), RevealState::HIDDEN);
        assert_eq!(controller.observation(), Observation::Pending);
    }

    #[test]
    fn test_latch_survives_scrolling_out() {
        let mut controller = observing();
        assert_eq!(
            controller.on_intersection(0.4),
            RevealOutcome::Triggered(RevealState::REVEALED)
        );
        assert_eq!(controller.on_intersection(0.0), RevealOutcome::Ignored);
        assert_eq!(controller.current_state(), RevealState::REVEALED);
    }

    #[test]
    fn test_monotone_over_arbitrary_samples() {
        let mut controller = observing();
        let samples = [0.0, 0.0, 0.01, 0.0, 1.0, 0.0, 0.5, 0.0];
        let mut seen_visible = false;
        for ratio in samples {
            controller.on_intersection(ratio);
            let visible = controller.current_state().has_entered_viewport;
            assert!(!(seen_visible && !visible));
            seen_visible |= visible;
        }
        assert!(seen_visible);
    }

    #[test]
    fn test_triggers_only_once() {
        let published = Rc::new(RefCell::new(0));
        let mut controller = observing();
        let counter = Rc::clone(&published);
        controller.subscribe(move |state| {
            assert!(state.is_visible);
            *counter.borrow_mut() += 1;
        });

        assert!(controller.on_intersection(0.2).should_detach());
        assert!(!controller.on_intersection(0.9).should_detach());
        assert_eq!(*published.borrow(), 1);
        assert_eq!(controller.observation(), Observation::Detached);
        assert!(!controller.mount());
    }

    #[test]
    fn test_unmount_before_trigger() {
        let published = Rc::new(RefCell::new(0));
        let mut controller = observing();
        let counter = Rc::clone(&published);
        controller.subscribe(move |_| *counter.borrow_mut() += 1);

        controller.unmount();
        assert_eq!(controller.on_intersection(1.0), RevealOutcome::Ignored);
        assert_eq!(*published.borrow(), 0);
        assert_eq!(controller.current_state(), RevealState::HIDDEN);
    }

    #[test]
    fn test_edge_contact_then_scroll_in() {
        let mut controller = observing();
        // Initial layout: edge touching the viewport.
        assert_eq!(controller.on_intersection(0.0), RevealOutcome::StillHidden);
        // Next browser sample, at the first positive threshold.
        let ratio = REVEAL_THRESHOLDS[1];
        assert!(IntersectionRatio::new(ratio).is_intersecting());
        assert!(controller.on_intersection(ratio).should_detach());
        assert!(controller.current_state().is_visible);
    }

    #[test]
    fn test_thresholds_include_a_positive_value() {
        assert!(REVEAL_THRESHOLDS.iter().any(|&t| t > 0.0 && t < 1.0));
        assert!(REVEAL_THRESHOLDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_disposed_controller_detaches_observer() {
        assert!(RevealOutcome::detaches(None));

        let mut controller = observing();
        assert!(!RevealOutcome::detaches(Some(controller.on_intersection(0.0))));
        assert!(RevealOutcome::detaches(Some(controller.on_intersection(0.3))));
        // Latched: the observer was released on the trigger, later samples are ignored.
        assert!(!RevealOutcome::detaches(Some(controller.on_intersection(0.3))));
    }

    #[test]
    fn test_ratio_normalization() {
        assert!(!IntersectionRatio::new(f64::NAN).is_intersecting());
        assert!(!IntersectionRatio::new(-0.3).is_intersecting());
        assert_eq!(IntersectionRatio::new(1.7).value(), 1.0);
        assert!(IntersectionRatio::new(f64::MIN_POSITIVE).is_intersecting());
    }
}
