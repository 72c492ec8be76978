//! Entrance-on-mount hook

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::ENTRANCE_FRAME_DELAY_MS;

/// Flips to `true` one frame after mount so CSS transitions run from the
/// initial pose.
pub fn use_entered() -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(ENTRANCE_FRAME_DELAY_MS).await;
        set_entered.try_set(true);
    });
    entered
}
