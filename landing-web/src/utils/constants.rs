//! Application constants

pub const LOG_LEVEL: log::Level = log::Level::Info;

pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

// Delay before entrance transitions start, so the hidden pose paints first
pub const ENTRANCE_FRAME_DELAY_MS: u32 = 16;

// Header slide-in on first paint
pub const HEADER_ENTRANCE_MS: u64 = 800;

// Hero entrance timings
pub const HERO_ENTRANCE_MS: u64 = 800;
pub const HERO_ACCENT_MS: u64 = 500;
pub const HERO_HEADLINE_DELAY_MS: u64 = 200;
pub const HERO_SUBHEADING_DELAY_MS: u64 = 500;
pub const HERO_ACTIONS_DELAY_MS: u64 = 800;
pub const HERO_PREVIEW_DELAY_MS: u64 = 1000;

// Follow-up buttons inside revealed sections
pub const INTEGRATIONS_CTA_DELAY_MS: u64 = 500;
pub const CTA_STEP_DELAY_MS: u64 = 200;
