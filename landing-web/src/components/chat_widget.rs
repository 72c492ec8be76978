//! Floating chat widget
//!
//! A launcher button in the corner toggles a small panel. Messages stay in the
//! page; nothing is sent anywhere.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::PanelState;

use crate::components::Icon;
use crate::state::content::use_content_context;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = use_content_context().with(|c| c.chat.clone());
    let panel = RwSignal::new(PanelState::closed());
    let (draft, set_draft) = signal(String::new());
    let (messages, set_messages) = signal(Vec::<String>::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_messages.update(|list| list.push(text));
        set_draft.set(String::new());
    };

    view! {
        <div class="chat-widget">
            <div class="chat-panel card" class:open=move || panel.get().is_open()>
                <div class="chat-header">
                    <h3>{chat.title}</h3>
                    <button
                        class="btn btn-ghost"
                        aria-label="Close chat"
                        on:click=move |_| panel.update(|p| p.close())
                    >
                        <Icon name="x"/>
                    </button>
                </div>
                <div class="chat-messages">
                    <p class="chat-bubble">{chat.greeting}</p>
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|text| view! { <p class="chat-bubble mine">{text}</p> })
                            .collect_view()
                    }}
                </div>
                <form class="chat-input" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder=chat.placeholder
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" aria-label="Send">
                        <Icon name="send"/>
                    </button>
                </form>
            </div>

            <button
                class="btn btn-primary chat-launcher hover-pop"
                aria-label=chat.launcher_label
                aria-expanded=move || panel.get().is_open().to_string()
                on:click=move |_| panel.update(|p| {
                    p.toggle();
                })
            >
                {move || {
                    if panel.get().is_open() {
                        view! { <Icon name="x"/> }.into_any()
                    } else {
                        view! { <Icon name="message-circle"/> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}
