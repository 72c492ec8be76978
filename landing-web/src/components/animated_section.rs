//! Reveal-on-scroll wrappers
//!
//! `AnimatedSection` owns one reveal controller; every `RevealItem` inside it
//! follows the section's visibility with its own staggered delay.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use shared::motion::{animated_style, stagger_delay, RevealVariant};

use crate::state::content::use_content_context;
use crate::state::reveal::{use_reveal, use_reveal_scope, RevealScope};

#[component]
pub fn AnimatedSection(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let motion = use_content_context().motion();
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target);

    let scope = RevealScope {
        visible,
        transition: motion.reveal_transition(),
        distance: motion.reveal_distance,
    };
    provide_context(scope);

    let style = move || {
        let pose = RevealVariant::FadeUp.pose(visible.get(), scope.distance);
        animated_style(pose, &scope.transition)
    };

    view! {
        <div node_ref=target class="animated-section" style=style>
            <section id=id class=format!("section {class}")>
                {children()}
            </section>
        </div>
    }
}

/// Child of an `AnimatedSection`, revealed `delay + index × increment` after it.
///
/// Items follow the section's latch rather than starting on mount, so a group
/// further down the page still staggers in when the user scrolls to it.
#[component]
pub fn RevealItem(
    variant: RevealVariant,
    #[prop(optional)] index: usize,
    #[prop(optional, into)] increment: Duration,
    #[prop(optional, into)] delay: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let Some(scope) = use_reveal_scope() else {
        log::warn!("RevealItem rendered outside an AnimatedSection");
        return view! { <div class=class>{children()}</div> }.into_any();
    };

    let transition = scope
        .transition
        .with_delay(delay + stagger_delay(index, increment));
    let style = move || {
        let pose = variant.pose(scope.visible.get(), scope.distance);
        animated_style(pose, &transition)
    };

    view! {
        <div class=format!("reveal-item {class}") style=style>
            {children()}
        </div>
    }
    .into_any()
}
