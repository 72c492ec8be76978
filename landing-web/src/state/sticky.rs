//! Sticky header state
//!
//! The page container owns one `ScrollStickyController` and exposes its latest
//! state through context. The window listener and the controller are released
//! when the page unmounts.

use leptos::prelude::*;
use shared::{MotionConfig, ScrollState, ScrollStickyController};

use crate::services::scroll::{current_offset, on_window_scroll};

#[derive(Clone, Copy)]
pub struct StickyContext {
    pub state: ReadSignal<ScrollState>,
}

impl StickyContext {
    pub fn is_sticky(&self) -> bool {
        self.state.with(|state| state.is_sticky)
    }
}

pub fn provide_sticky_context(config: &MotionConfig) -> StickyContext {
    let (state, set_state) = signal(ScrollState::default());
    let controller = StoredValue::new_local(ScrollStickyController::from_config(config));

    controller.update_value(|controller| {
        controller.subscribe(move |next| set_state.set(*next));
        controller.mount_at(current_offset());
    });

    let listener = on_window_scroll(move |offset| {
        controller.try_update_value(|controller| {
            controller.on_scroll(offset);
        });
    });

    on_cleanup(move || {
        listener.remove();
        controller.try_update_value(|controller| controller.unmount());
    });

    let context = StickyContext { state };
    provide_context(context);
    context
}

pub fn use_sticky_context() -> StickyContext {
    expect_context::<StickyContext>()
}
