//! # Motion Model
//!
//! Poses, easing curves and transitions for the page's entrance animations,
//! rendered to inline CSS so the browser does the interpolation.
//!
//! ## Functions
//!
//! - [`stagger_delay`] - Per-child delay within a revealed group
//! - [`animated_style`] - Inline style for a pose plus its transition
//!
//! ```rust
//! use std::time::Duration;
//! use shared::motion::{stagger_delay, RevealVariant, Transition};
//!
//! let transition = Transition::ease_out(Duration::from_millis(500))
//!     .with_delay(stagger_delay(2, Duration::from_millis(300)));
//! assert_eq!(transition.delay, Duration::from_millis(600));
//!
//! let hidden = RevealVariant::FadeUp.hidden(50.0);
//! assert_eq!(hidden.opacity, 0.0);
//! assert_eq!(hidden.y, 50.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay of the `index`-th child of a staggered group.
pub fn stagger_delay(index: usize, increment: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    increment.saturating_mul(index)
}

/// Visual properties an animated element rests in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal offset in CSS pixels.
    pub x: f64,
    /// Vertical offset in CSS pixels.
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Interpolate between two poses; `t` is clamped to `[0, 1]`.
    pub fn lerp(from: Pose, to: Pose, t: f64) -> Pose {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            scale: mix(from.scale, to.scale),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::VISIBLE
    }
}

/// Hidden pose family used by a revealed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealVariant {
    /// Rises into place from below.
    FadeUp,
    /// Grows from 80% scale.
    ScaleIn,
    /// Slides in from the left.
    SlideIn,
    Fade,
}

impl RevealVariant {
    pub fn hidden(self, distance: f64) -> Pose {
        let base = Pose {
            opacity: 0.0,
            ..Pose::VISIBLE
        };
        match self {
            RevealVariant::FadeUp => Pose { y: distance, ..base },
            RevealVariant::ScaleIn => Pose { scale: 0.8, ..base },
            RevealVariant::SlideIn => Pose { x: -distance, ..base },
            RevealVariant::Fade => base,
        }
    }

    pub fn visible(self) -> Pose {
        Pose::VISIBLE
    }

    pub fn pose(self, visible: bool, distance: f64) -> Pose {
        if visible {
            self.visible()
        } else {
            self.hidden(distance)
        }
    }
}

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    EaseOut,
    Linear,
    /// Overshooting curve standing in for a physical spring.
    Spring,
}

impl Easing {
    fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::Linear => None,
            Easing::Spring => Some((0.34, 1.56, 0.64, 1.0)),
        }
    }

    pub fn css(self) -> String {
        match self.control_points() {
            Some((x1, y1, x2, y2)) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
            None => "linear".to_string(),
        }
    }

    /// Eased progress for linear progress `t`.
    pub fn sample(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self.control_points() {
            Some((x1, y1, x2, y2)) => cubic_bezier(x1, y1, x2, y2, t),
            None => t,
        }
    }
}

/// Evaluate a CSS cubic-bezier timing function at `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let coord = |p1: f64, p2: f64, u: f64| {
        let v = 1.0 - u;
        3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
    };

    // x(u) is monotone for x1, x2 in [0, 1], so bisection always converges.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut u = x;
    for _ in 0..64 {
        let current = coord(x1, x2, u);
        if (current - x).abs() < 1e-7 {
            break;
        }
        if current < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    coord(y1, y2, u)
}

/// How an element moves between poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn ease_out(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    pub fn spring(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::Spring,
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    pub fn to_css(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis()
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

/// Inline style placing an element at `pose`, animating there with `transition`.
pub fn animated_style(pose: Pose, transition: &Transition) -> String {
    format!("{} {}", pose.to_css(), transition.to_css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_linear() {
        let increment = Duration::from_millis(300);
        for index in 0..8 {
            assert_eq!(
                stagger_delay(index, increment),
                Duration::from_millis(300 * index as u64)
            );
        }
        assert_eq!(stagger_delay(5, Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_hidden_poses() {
        assert_eq!(RevealVariant::ScaleIn.hidden(50.0).scale, 0.8);
        assert_eq!(RevealVariant::SlideIn.hidden(50.0).x, -50.0);
        assert_eq!(RevealVariant::Fade.hidden(50.0).y, 0.0);
        for variant in [
            RevealVariant::FadeUp,
            RevealVariant::ScaleIn,
            RevealVariant::SlideIn,
            RevealVariant::Fade,
        ] {
            assert_eq!(variant.hidden(50.0).opacity, 0.0);
            assert_eq!(variant.pose(true, 50.0), Pose::VISIBLE);
        }
    }

    #[test]
    fn test_pose_css() {
        assert_eq!(
            Pose::VISIBLE.to_css(),
            "opacity: 1; transform: translate3d(0px, 0px, 0) scale(1);"
        );
        assert_eq!(
            RevealVariant::SlideIn.hidden(50.0).to_css(),
            "opacity: 0; transform: translate3d(-50px, 0px, 0) scale(1);"
        );
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let hidden = RevealVariant::FadeUp.hidden(50.0);
        assert_eq!(Pose::lerp(hidden, Pose::VISIBLE, 0.0), hidden);
        assert_eq!(Pose::lerp(hidden, Pose::VISIBLE, 1.0), Pose::VISIBLE);
        assert_eq!(Pose::lerp(hidden, Pose::VISIBLE, 2.0), Pose::VISIBLE);
        let mid = Pose::lerp(hidden, Pose::VISIBLE, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 25.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::EaseOut, Easing::Linear, Easing::Spring] {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_is_monotone_and_front_loaded() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let t = step as f64 / 100.0;
            let value = Easing::EaseOut.sample(t);
            assert!(value + 1e-9 >= previous, "not monotone at {t}");
            previous = value;
        }
        assert!(Easing::EaseOut.sample(0.5) > 0.5);
    }

    #[test]
    fn test_spring_overshoots() {
        let peak = (1..100)
            .map(|step| Easing::Spring.sample(step as f64 / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_transition_css() {
        let transition =
            Transition::ease_out(Duration::from_millis(500)).with_delay(Duration::from_millis(200));
        assert_eq!(
            transition.to_css(),
            "transition: opacity 500ms cubic-bezier(0, 0, 0.58, 1) 200ms, \
             transform 500ms cubic-bezier(0, 0, 0.58, 1) 200ms;"
        );
    }
}
