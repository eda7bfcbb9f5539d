//! UI Components

use leptos::prelude::*;
use softsell_core::{Message, NoticeVariant};

use crate::notify::use_toaster;

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message message-{}", message.role);
    let sent_at = message.timestamp.format("%H:%M").to_string();

    view! {
        <div class=class data-id=message.id.to_string()>
            <p class="content" title=sent_at>{message.content}</p>
        </div>
    }
}

/// Three pulsing dots shown while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message-assistant typing" aria-label="Assistant is typing">
            <span class="dot"></span>
            <span class="dot"></span>
            <span class="dot"></span>
        </div>
    }
}

/// Light/dark switch, in memory only
#[component]
pub fn ThemeToggle(dark: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            aria-pressed=move || dark.get().to_string()
            on:click=move |_| dark.update(|d| *d = !*d)
        >
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}

/// Renders the toasts queued through [`crate::notify::Toaster`]
#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.notice.variant {
                        NoticeVariant::Default => "toast",
                        NoticeVariant::Destructive => "toast toast-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            <strong class="toast-title">{toast.notice.title}</strong>
                            <p class="toast-description">{toast.notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
