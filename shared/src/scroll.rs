//! # Sticky Navigation Controller
//!
//! Tracks the viewport's vertical scroll offset and derives whether the page
//! header should be pinned. Stickiness is level-sensitive: it is recomputed from
//! the latest offset on every notification and flips back as soon as the user
//! scrolls above the threshold again.
//!
//! ## Usage
//!
//! ```rust
//! use shared::scroll::ScrollStickyController;
//!
//! let mut controller = ScrollStickyController::new(100);
//! controller.mount();
//!
//! let states: Vec<bool> = [0, 50, 100, 101, 50]
//!     .into_iter()
//!     .filter_map(|offset| controller.on_scroll(offset))
//!     .map(|state| state.is_sticky)
//!     .collect();
//! assert_eq!(states, vec![false, false, false, true, false]);
//! ```

use crate::config::{MotionConfig, DEFAULT_STICKY_THRESHOLD};
use crate::subscribers::Subscribers;

/// Whether a header at `offset` should be sticky. No hysteresis.
pub fn is_sticky(offset: u32, threshold: u32) -> bool {
    offset > threshold
}

/// Convert a raw `scrollY` reading into a non-negative whole offset.
///
/// Overscroll bounce reports negative values and some engines report
/// fractional ones; both collapse to the truncated non-negative integer.
///
/// ```rust
/// use shared::scroll::normalize_offset;
///
/// assert_eq!(normalize_offset(101.7), 101);
/// assert_eq!(normalize_offset(-12.0), 0);
/// assert_eq!(normalize_offset(f64::NAN), 0);
/// ```
pub fn normalize_offset(pixels: f64) -> u32 {
    if pixels.is_nan() || pixels <= 0.0 {
        0
    } else if pixels >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        pixels.trunc() as u32
    }
}

/// Latest computed scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u32,
    pub is_sticky: bool,
}

impl ScrollState {
    pub fn at(offset: u32, threshold: u32) -> Self {
        Self {
            offset,
            is_sticky: is_sticky(offset, threshold),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Pending,
    Mounted,
    Unmounted,
}

/// Page-scoped observer of the viewport scroll offset.
///
/// One instance is owned by the page container; there is no global.
#[derive(Debug)]
pub struct ScrollStickyController {
    threshold: u32,
    state: ScrollState,
    lifecycle: Lifecycle,
    subscribers: Subscribers<ScrollState>,
}

impl Default for ScrollStickyController {
    fn default() -> Self {
        Self::new(DEFAULT_STICKY_THRESHOLD)
    }
}

impl ScrollStickyController {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            state: ScrollState::default(),
            lifecycle: Lifecycle::Pending,
            subscribers: Subscribers::default(),
        }
    }

    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.sticky_threshold)
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Start accepting scroll notifications.
    ///
    /// Returns `false` if the controller was already unmounted; an unmounted
    /// controller stays dead.
    pub fn mount(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Pending => {
                log::debug!("sticky controller mounted (threshold {})", self.threshold);
                self.lifecycle = Lifecycle::Mounted;
                true
            }
            Lifecycle::Mounted => true,
            Lifecycle::Unmounted => {
                log::warn!("ignoring mount of an unmounted sticky controller");
                false
            }
        }
    }

    /// Mount and seed the state from the offset sampled at mount time.
    ///
    /// A page restored mid-scroll starts sticky. Returns `None` if the
    /// controller was already unmounted.
    pub fn mount_at(&mut self, offset: u32) -> Option<ScrollState> {
        if self.mount() {
            self.on_scroll(offset)
        } else {
            None
        }
    }

    /// Recompute the state for a new offset.
    ///
    /// Returns the current state while mounted, `None` otherwise. Subscribers
    /// are only notified when the state actually changed.
    pub fn on_scroll(&mut self, offset: u32) -> Option<ScrollState> {
        if !self.is_mounted() {
            log::trace!("scroll offset {} dropped: controller not mounted", offset);
            return None;
        }

        let next = ScrollState::at(offset, self.threshold);
        if next != self.state {
            if next.is_sticky != self.state.is_sticky {
                log::debug!("header sticky = {} at offset {}", next.is_sticky, offset);
            }
            self.state = next;
            self.subscribers.publish(&next);
        }
        Some(self.state)
    }

    pub fn current_state(&self) -> ScrollState {
        self.state
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ScrollState) + 'static) {
        self.subscribers.subscribe(callback);
    }

    /// Stop observing. Immediate and unconditional.
    pub fn unmount(&mut self) {
        if self.lifecycle != Lifecycle::Unmounted {
            log::debug!("sticky controller unmounted");
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.subscribers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mounted() -> ScrollStickyController {
        let mut controller = ScrollStickyController::default();
        assert!(controller.mount());
        controller
    }

    #[test]
    fn test_is_sticky_boundary() {
        for offset in [0, 1, 99, 100, 101, 102, 5_000, u32::MAX] {
            assert_eq!(is_sticky(offset, 100), offset > 100, "offset {offset}");
        }
    }

    #[test]
    fn test_offset_sequence() {
        let mut controller = mounted();
        let sticky: Vec<bool> = [0, 50, 100, 101, 50]
            .into_iter()
            .map(|offset| controller.on_scroll(offset).unwrap().is_sticky)
            .collect();
        assert_eq!(sticky, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_same_offset_is_idempotent() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let mut controller = mounted();
        let sink = Rc::clone(&published);
        controller.subscribe(move |state| sink.borrow_mut().push(*state));

        let first = controller.on_scroll(240);
        let second = controller.on_scroll(240);
        assert_eq!(first, second);
        assert_eq!(first, Some(ScrollState { offset: 240, is_sticky: true }));
        assert_eq!(published.borrow().len(), 1);
    }

    #[test]
    fn test_initial_state_without_viewport() {
        let controller = ScrollStickyController::default();
        assert_eq!(
            controller.current_state(),
            ScrollState { offset: 0, is_sticky: false }
        );
    }

    #[test]
    fn test_events_before_mount_are_dropped() {
        let mut controller = ScrollStickyController::default();
        assert_eq!(controller.on_scroll(500), None);
        assert!(!controller.current_state().is_sticky);
    }

    #[test]
    fn test_unmount_stops_recomputation() {
        let calls = Rc::new(RefCell::new(0));
        let mut controller = mounted();
        let counter = Rc::clone(&calls);
        controller.subscribe(move |_| *counter.borrow_mut() += 1);

        controller.on_scroll(150);
        controller.unmount();
        assert_eq!(controller.on_scroll(10), None);
        assert_eq!(controller.on_scroll(300), None);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(controller.current_state().offset, 150);
        assert!(!controller.is_mounted());
    }

    #[test]
    fn test_remount_after_unmount_is_refused() {
        let mut controller = mounted();
        controller.unmount();
        assert!(!controller.mount());
        assert_eq!(controller.on_scroll(200), None);
    }

    #[test]
    fn test_mount_at_restored_offset() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let mut controller = ScrollStickyController::default();
        let sink = Rc::clone(&published);
        controller.subscribe(move |state| sink.borrow_mut().push(state.is_sticky));

        assert_eq!(
            controller.mount_at(420),
            Some(ScrollState { offset: 420, is_sticky: true })
        );
        assert!(controller.is_mounted());
        assert_eq!(*published.borrow(), vec![true]);
    }

    #[test]
    fn test_mount_at_top_publishes_nothing() {
        let published = Rc::new(RefCell::new(0));
        let mut controller = ScrollStickyController::default();
        let counter = Rc::clone(&published);
        controller.subscribe(move |_| *counter.borrow_mut() += 1);

        assert_eq!(controller.mount_at(0), Some(ScrollState::default()));
        assert_eq!(*published.borrow(), 0);
    }

    #[test]
    fn test_mount_at_after_unmount() {
        let mut controller = ScrollStickyController::default();
        controller.unmount();
        assert_eq!(controller.mount_at(420), None);
        assert_eq!(controller.current_state(), ScrollState::default());
    }

    #[test]
    fn test_custom_threshold_from_config() {
        let config = MotionConfig {
            sticky_threshold: 40,
            ..MotionConfig::default()
        };
        let mut controller = ScrollStickyController::from_config(&config);
        controller.mount();
        assert!(controller.on_scroll(41).unwrap().is_sticky);
        assert!(!controller.on_scroll(40).unwrap().is_sticky);
    }

    #[test]
    fn test_normalize_offset() {
        assert_eq!(normalize_offset(0.0), 0);
        assert_eq!(normalize_offset(-0.5), 0);
        assert_eq!(normalize_offset(f64::NEG_INFINITY), 0);
        assert_eq!(normalize_offset(100.99), 100);
        assert_eq!(normalize_offset(f64::INFINITY), u32::MAX);
    }
}
