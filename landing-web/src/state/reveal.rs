//! Reveal-on-scroll hook

use leptos::html;
use leptos::prelude::*;
use shared::motion::Transition;
use shared::reveal::{Observation, RevealOutcome};
use shared::ViewportRevealController;

use crate::services::viewport::RevealObserver;

/// Visibility of the enclosing animated section, shared with its children.
#[derive(Clone, Copy)]
pub struct RevealScope {
    pub visible: ReadSignal<bool>,
    pub transition: Transition,
    pub distance: f64,
}

pub fn use_reveal_scope() -> Option<RevealScope> {
    use_context::<RevealScope>()
}

/// Latch `true` the first time `target` intersects the viewport.
///
/// If the observer cannot be created the block is revealed immediately rather
/// than left hidden.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let controller = StoredValue::new_local(ViewportRevealController::new());
    let observer = StoredValue::new_local(None::<RevealObserver>);

    controller.update_value(|controller| {
        controller.subscribe(move |state| set_visible.set(state.is_visible));
    });

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        let started = controller
            .try_update_value(|controller| {
                controller.observation() == Observation::Pending && controller.mount()
            })
            .unwrap_or(false);
        if !started {
            return;
        }

        let handle = RevealObserver::observe(&element, move |ratio| {
            RevealOutcome::detaches(
                controller.try_update_value(|controller| controller.on_intersection(ratio)),
            )
        });
        match handle {
            Ok(handle) => observer.set_value(Some(handle)),
            Err(e) => {
                log::error!("Reveal disabled for section: {}", e);
                controller.try_update_value(|controller| controller.unmount());
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        controller.try_update_value(|controller| controller.unmount());
        observer.try_update_value(|slot| slot.take());
    });

    visible
}
