//! FAQ Chat Widget
//!
//! Floating assistant panel. The session lives as long as the widget is
//! mounted; hiding the panel keeps the conversation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use softsell_core::{ChatConfig, ChatSession, SoftSellError};

use crate::components::{MessageBubble, TypingIndicator};

#[component]
pub fn ChatWidget(config: ChatConfig) -> impl IntoView {
    let delay_ms = u32::try_from(config.reply_delay_ms).unwrap_or(u32::MAX);
    let title = config.title.clone();
    let placeholder = config.placeholder.clone();
    let hint = config.hint.clone();

    let session = RwSignal::new(ChatSession::with_config(config));
    let (open, set_open) = signal(false);
    let (input, set_input) = signal(String::new());

    // Dropping a gloo Timeout clears it, so the reply can never land on a
    // disposed session.
    let reply_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        reply_timer.try_update_value(Option::take);
        session.try_update(ChatSession::cancel_pending);
    });

    let awaiting = move || session.with(ChatSession::is_awaiting_reply);

    let send = move || {
        let text = input.get_untracked();
        let Some(submitted) = session.try_update(|s| s.submit(&text)) else {
            return;
        };

        match submitted {
            Ok(ticket) => {
                set_input.set(String::new());
                let timeout = Timeout::new(delay_ms, move || {
                    let delivered = session.try_update(|s| s.complete(ticket).map(|m| m.id));
                    if let Some(Err(err)) = delivered {
                        tracing::warn!(%err, "Reply dropped");
                    }
                });
                reply_timer.set_value(Some(timeout));
            }
            Err(SoftSellError::EmptyMessage) => {}
            Err(err) => tracing::debug!(%err, "Chat input ignored"),
        }
    };

    view! {
        <div class="chat-panel" class:hidden=move || !open.get()>
            <div class="chat-header">
                <span class="chat-title">{title}</span>
                <button
                    class="btn-ghost"
                    aria-label="Close chat"
                    on:click=move |_| set_open.set(false)
                >
                    "✕"
                </button>
            </div>

            <div class="messages">
                <For
                    each=move || session.with(|s| s.transcript().messages().to_vec())
                    key=|msg| msg.id
                    children=move |msg| view! { <MessageBubble message=msg /> }
                />
                <Show when=awaiting>
                    <TypingIndicator />
                </Show>
            </div>

            <div class="chat-input">
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }>
                    <input
                        type="text"
                        placeholder=placeholder
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        aria-label="Send"
                        disabled=move || input.with(|t| t.trim().is_empty()) || awaiting()
                    >
                        "➤"
                    </button>
                </form>
                <p class="chat-hint">{hint}</p>
            </div>
        </div>

        <button
            class="chat-toggle"
            aria-label="Chat with us"
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            "💬"
        </button>
    }
}
