//! Stroke icons (24×24 grid)

use leptos::prelude::*;

/// Path data for a named icon. Unknown names render an empty icon.
pub fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "arrow-right" => &["M5 12h14", "M12 5l7 7-7 7"],
        "check" => &["M20 6 9 17l-5-5"],
        "check-circle" => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
        "coffee" => &[
            "M17 8h1a4 4 0 1 1 0 8h-1",
            "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z",
            "M6 2v2",
            "M10 2v2",
            "M14 2v2",
        ],
        "globe" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
        ],
        "heart" => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        "menu" => &["M4 6h16", "M4 12h16", "M4 18h16"],
        "message-circle" => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
        "message-square" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "send" => &["M22 2 15 22 11 13 2 9Z", "M22 2 11 13"],
        "shield" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        "star" => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        "trending-up" => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
        "users" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "zap" => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        _ => &[],
    }
}

#[component]
pub fn Icon(#[prop(into)] name: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let paths = icon_paths(&name);
    if paths.is_empty() {
        log::debug!("Unknown icon '{}'", name);
    }

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon {class}")
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
