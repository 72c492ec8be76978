//! Entrance-on-mount animation, independent of scroll position

use std::time::Duration;

use leptos::prelude::*;
use shared::motion::{animated_style, RevealVariant, Transition};

use crate::state::entrance::use_entered;

#[component]
pub fn Entrance(
    variant: RevealVariant,
    #[prop(into)] duration: Duration,
    #[prop(optional, into)] delay: Duration,
    #[prop(default = 20.0)] distance: f64,
    #[prop(optional, into)] class: String,
    /// Render as a `span` so it can sit inside headings.
    #[prop(optional)]
    inline: bool,
    children: Children,
) -> impl IntoView {
    let entered = use_entered();
    let transition = Transition::ease_out(duration).with_delay(delay);
    let style = move || animated_style(variant.pose(entered.get(), distance), &transition);

    if inline {
        view! { <span class=class style=style>{children()}</span> }.into_any()
    } else {
        view! { <div class=class style=style>{children()}</div> }.into_any()
    }
}
