//! Toast Notifications

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use softsell_core::Notice;

/// How long a toast stays up unless dismissed
const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Shared handle to the toast stack, provided at the app root
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    /// Queue a notice; it dismisses itself after a few seconds
    pub fn show(self, notice: Notice) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };

        tracing::debug!(id, title = %notice.title, error = notice.is_error(), "Toast shown");
        self.toasts.try_update(|t| t.push(Toast { id, notice }));
        Timeout::new(TOAST_LIFETIME_MS, move || self.dismiss(id)).forget();
    }

    pub fn dismiss(self, id: u64) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn toasts(self) -> Vec<Toast> {
        self.toasts.get()
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}
