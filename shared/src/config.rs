//! # Motion Configuration
//!
//! Timing and distance parameters for the page's animations. The defaults are
//! the values the page was designed with; the content blob may override any of
//! them through its optional `motion` object.
//!
//! ```rust
//! use shared::config::MotionConfig;
//!
//! let config: MotionConfig = serde_json::from_str(r#"{ "sticky_threshold": 80 }"#).unwrap();
//! assert_eq!(config.sticky_threshold, 80);
//! assert_eq!(config.reveal_duration_ms, 500);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::motion::Transition;

/// Scroll offset past which the header becomes sticky.
pub const DEFAULT_STICKY_THRESHOLD: u32 = 100;

/// Duration of a reveal transition.
pub const DEFAULT_REVEAL_DURATION_MS: u32 = 500;

/// Vertical (or horizontal, for slide-ins) travel of a hidden pose.
pub const DEFAULT_REVEAL_DISTANCE: f64 = 50.0;

/// Animation parameters for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Offsets strictly greater than this make the header sticky.
    pub sticky_threshold: u32,
    /// Reveal transition duration in milliseconds.
    pub reveal_duration_ms: u32,
    /// Travel distance of hidden poses, in CSS pixels.
    pub reveal_distance: f64,
    /// Distance the header slides in from on mount.
    pub header_entrance_offset: f64,
    /// Per-section stagger increments.
    pub stagger: StaggerConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            sticky_threshold: DEFAULT_STICKY_THRESHOLD,
            reveal_duration_ms: DEFAULT_REVEAL_DURATION_MS,
            reveal_distance: DEFAULT_REVEAL_DISTANCE,
            header_entrance_offset: 100.0,
            stagger: StaggerConfig::default(),
        }
    }
}

impl MotionConfig {
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.reveal_duration_ms))
    }

    /// Ease-out transition used by every reveal on the page.
    pub fn reveal_transition(&self) -> Transition {
        Transition::ease_out(self.reveal_duration())
    }
}

/// Stagger increments, in milliseconds, for each sectioned list on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerConfig {
    pub pain_points_ms: u32,
    pub features_ms: u32,
    pub mission_ms: u32,
    pub steps_ms: u32,
    pub pricing_ms: u32,
    pub integrations_ms: u32,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            pain_points_ms: 300,
            features_ms: 200,
            mission_ms: 300,
            steps_ms: 300,
            pricing_ms: 300,
            integrations_ms: 100,
        }
    }
}

impl StaggerConfig {
    pub fn increment(ms: u32) -> Duration {
        Duration::from_millis(u64::from(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MotionConfig::default();
        assert_eq!(config.sticky_threshold, 100);
        assert_eq!(config.reveal_duration(), Duration::from_millis(500));
        assert_eq!(config.stagger.features_ms, 200);
        assert_eq!(config.stagger.integrations_ms, 100);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: MotionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_partial_stagger_override() {
        let config: MotionConfig =
            serde_json::from_str(r#"{ "stagger": { "steps_ms": 150 } }"#).unwrap();
        assert_eq!(config.stagger.steps_ms, 150);
        assert_eq!(config.stagger.pricing_ms, 300);
    }
}
