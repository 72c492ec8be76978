//! Window scroll listener

use leptos::ev;
use leptos::prelude::*;
use shared::scroll::normalize_offset;

/// Current vertical scroll offset; 0 when there is no scrollable viewport.
pub fn current_offset() -> u32 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .map(normalize_offset)
        .unwrap_or(0)
}

/// Call `handler` with the normalized offset on every window scroll event.
///
/// The listener stays registered until the returned handle is removed.
pub fn on_window_scroll(
    handler: impl Fn(u32) + Send + Sync + 'static,
) -> WindowListenerHandle {
    window_event_listener(ev::scroll, move |_| handler(current_offset()))
}
