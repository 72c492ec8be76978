//! Site header: brand, section links, mobile menu
//!
//! Slides in from above on first paint and pins itself once the page scrolls
//! past the sticky threshold.

use std::time::Duration;

use leptos::prelude::*;
use shared::content::Link;
use shared::motion::{animated_style, Pose, Transition};
use shared::PanelState;

use crate::components::Icon;
use crate::state::content::use_content_context;
use crate::state::entrance::use_entered;
use crate::state::sticky::use_sticky_context;
use crate::utils::constants::HEADER_ENTRANCE_MS;

/// Class list for the header in the given sticky state.
pub fn header_class(is_sticky: bool) -> &'static str {
    if is_sticky {
        "site-header sticky"
    } else {
        "site-header"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let content = use_content_context();
    let sticky = use_sticky_context();
    let entered = use_entered();
    let menu = RwSignal::new(PanelState::closed());

    let (brand, links, cta, entrance_offset) = content.with(|c| {
        (
            c.brand.name.clone(),
            c.nav.clone(),
            c.nav_cta.clone(),
            c.motion.header_entrance_offset,
        )
    });

    let transition = Transition::spring(Duration::from_millis(HEADER_ENTRANCE_MS));
    let style = move || {
        let pose = if entered.get() {
            Pose::VISIBLE
        } else {
            Pose {
                y: -entrance_offset,
                ..Pose::VISIBLE
            }
        };
        animated_style(pose, &transition)
    };

    let close_menu = move |_| menu.update(|m| m.close());

    view! {
        <header class=move || header_class(sticky.is_sticky()) style=style>
            <nav class="container nav-bar">
                <a href="#top" class="brand hover-pop">{brand}</a>

                <div class="nav-links">
                    <NavLinks links=links.clone()/>
                    <a href="#pricing" class="btn btn-primary btn-sm hover-pop">{cta.clone()}</a>
                </div>

                <button
                    class="btn btn-ghost nav-toggle"
                    on:click=move |_| menu.update(|m| {
                        m.toggle();
                    })
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                >
                    {move || {
                        if menu.get().is_open() {
                            view! { <Icon name="x"/> }.into_any()
                        } else {
                            view! { <Icon name="menu"/> }.into_any()
                        }
                    }}
                </button>
            </nav>

            <div class="mobile-menu" class:open=move || menu.get().is_open() on:click=close_menu>
                <div class="container mobile-menu-links">
                    <NavLinks links=links/>
                    <a href="#pricing" class="btn btn-primary btn-sm">{cta}</a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLinks(links: Vec<Link>) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href class="btn btn-ghost btn-sm">{link.label}</a>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(header_class(true), "site-header sticky");
    }
}
