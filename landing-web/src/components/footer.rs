//! Site footer

use leptos::prelude::*;

use crate::state::content::use_content_context;

#[component]
pub fn Footer() -> impl IntoView {
    let content = use_content_context();
    let (brand, footer) = content.with(|c| (c.brand.clone(), c.footer.clone()));

    let year = js_sys::Date::new_0().get_full_year();
    let copyright = footer.copyright(year, &brand.name);

    view! {
        <footer class="site-footer" id="contact">
            <div class="container footer-grid">
                <div>
                    <h3>{brand.name}</h3>
                    <p class="muted">{brand.blurb}</p>
                </div>
                {footer
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div>
                                <h3>{column.title}</h3>
                                <ul class="footer-links">
                                    {column
                                        .links
                                        .into_iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="container footer-bottom muted">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}
