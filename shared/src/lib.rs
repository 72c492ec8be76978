//! # Recognify Landing Page Core
//!
//! Target-independent state and content for the landing page. Nothing in this
//! crate touches the DOM; the browser crate feeds events in and renders what
//! comes out.
//!
//! ## Structure
//!
//! - **[`scroll`]**: Sticky header controller (level-sensitive)
//! - **[`reveal`]**: Reveal-on-scroll controller (one-shot latch)
//! - **[`panel`]**: Open/closed state for the mobile menu and chat widget
//! - **[`motion`]**: Poses, easing, transitions and stagger delays
//! - **[`content`]**: Page copy, parsed from the embedded JSON blob
//! - **[`config`]**: Animation timings
//! - **[`error`]**: Error type for content parsing and browser bindings
//!
//! ## Event Flow
//!
//! ```text
//! window scroll ──> ScrollStickyController ──> header class
//! intersection  ──> ViewportRevealController ──> section pose (then detach)
//! click         ──> PanelState ──> menu / chat panel
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod panel;
pub mod reveal;
pub mod scroll;
pub mod subscribers;

pub use config::MotionConfig;
pub use content::LandingContent;
pub use error::{Error, Result};
pub use panel::PanelState;
pub use reveal::{RevealOutcome, RevealState, ViewportRevealController};
pub use scroll::{ScrollState, ScrollStickyController};
