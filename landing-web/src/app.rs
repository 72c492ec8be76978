//! Recognify Landing Page - Leptos App

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use shared::LandingContent;

use crate::pages::{LandingPage, NotFound};
use crate::state::content::provide_content_context;

#[component]
pub fn App() -> impl IntoView {
    let content = match LandingContent::embedded() {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to load page content: {}", e);
            return view! { <ContentError message=e.user_message()/> }.into_any();
        }
    };
    provide_content_context(content);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
    .into_any()
}

#[component]
fn ContentError(message: &'static str) -> impl IntoView {
    view! {
        <div class="page-error">
            <div class="card">
                <h1>"Something went wrong"</h1>
                <p>{message}</p>
                <a href="/" class="btn btn-primary">"Reload"</a>
            </div>
        </div>
    }
}
