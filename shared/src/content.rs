//! # Page Content
//!
//! Copy text for every section of the landing page. The content is an injected,
//! read-only JSON blob: `serde` requires every field to be present and no other
//! validation is applied.
//!
//! ## Structure
//!
//! Most sections are a title plus a sequence of `{title, description, ...}`
//! records ([`Section`] of [`Card`]). Pricing plans, integrations and the footer
//! have their own record shapes.
//!
//! The optional `motion` object overrides animation timings, see
//! [`MotionConfig`].

use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;
use crate::error::Result;

const EMBEDDED: &str = include_str!("../content/landing.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingContent {
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub nav_cta: String,
    pub hero: Hero,
    pub pain_points: Section<Card>,
    pub features: Section<Card>,
    pub mission: Mission,
    pub steps: Section<Card>,
    pub pricing: Section<Plan>,
    pub integrations: Integrations,
    pub call_to_action: CallToAction,
    pub footer: Footer,
    pub chat: Chat,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl LandingContent {
    pub fn from_json(json: &str) -> Result<Self> {
        let content = serde_json::from_str(json)?;
        Ok(content)
    }

    /// The content shipped with the page.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline_lead: String,
    pub headline_accent: String,
    pub headline_tail: String,
    pub subheading: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub preview: Image,
}

/// A titled list of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section<T> {
    pub title: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Icon name understood by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub statement: String,
    pub pillars: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    /// Monthly price in whole US dollars.
    pub price: u32,
    pub features: Vec<String>,
}

impl Plan {
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn choose_label(&self) -> String {
        format!("Choose {}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integrations {
    pub title: String,
    pub statement: String,
    pub items: Vec<Integration>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub columns: Vec<FooterColumn>,
    pub rights: String,
}

impl Footer {
    /// "© 2026 Recognify. All rights reserved."
    pub fn copyright(&self, year: u32, brand: &str) -> String {
        format!("\u{a9} {year} {brand}. {}", self.rights)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub launcher_label: String,
    pub title: String,
    pub greeting: String,
    pub placeholder: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_embedded_content_parses() {
        let content = LandingContent::embedded().unwrap();
        assert_eq!(content.brand.name, "Recognify");
        assert_eq!(content.pain_points.items.len(), 3);
        assert_eq!(content.features.items.len(), 6);
        assert_eq!(content.mission.pillars.len(), 3);
        assert_eq!(content.steps.items.len(), 4);
        assert_eq!(content.pricing.items.len(), 2);
        assert_eq!(content.integrations.items.len(), 8);
        assert_eq!(content.footer.columns.len(), 3);
    }

    #[test]
    fn test_embedded_motion_defaults() {
        let content = LandingContent::embedded().unwrap();
        assert_eq!(content.motion, MotionConfig::default());
    }

    #[test]
    fn test_missing_field_is_content_error() {
        let err = LandingContent::from_json(r#"{ "brand": { "name": "Recognify" } }"#).unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_malformed_json_is_content_error() {
        assert!(matches!(
            LandingContent::from_json("not json"),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn test_plan_labels() {
        let plan = Plan {
            name: "Team".to_string(),
            price: 99,
            features: vec![],
        };
        assert_eq!(plan.price_label(), "$99");
        assert_eq!(plan.choose_label(), "Choose Team");
    }

    #[test]
    fn test_copyright_line() {
        let footer = Footer {
            columns: vec![],
            rights: "All rights reserved.".to_string(),
        };
        assert_eq!(
            footer.copyright(2026, "Recognify"),
            "\u{a9} 2026 Recognify. All rights reserved."
        );
    }
}
