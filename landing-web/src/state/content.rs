//! Page content context

use leptos::prelude::*;
use shared::{LandingContent, MotionConfig};

/// Read-only content injected at the app root.
#[derive(Clone, Copy)]
pub struct ContentContext {
    content: StoredValue<LandingContent>,
}

impl ContentContext {
    pub fn new(content: LandingContent) -> Self {
        Self {
            content: StoredValue::new(content),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&LandingContent) -> R) -> R {
        self.content.with_value(f)
    }

    pub fn motion(&self) -> MotionConfig {
        self.with(|content| content.motion.clone())
    }
}

pub fn provide_content_context(content: LandingContent) -> ContentContext {
    let context = ContentContext::new(content);
    provide_context(context);
    context
}

pub fn use_content_context() -> ContentContext {
    expect_context::<ContentContext>()
}
