//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};
use softsell_core::SiteConfig;

use crate::components::{ThemeToggle, ToastStack};
use crate::notify::provide_toaster;
use crate::pages::LandingPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::default());
    provide_toaster();
    let dark = RwSignal::new(false);

    view! {
        <div class="app" class:dark=move || dark.get()>
            <ThemeToggle dark=dark />
            <Router>
                <main>
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LandingPage />
                    </Routes>
                </main>
            </Router>
            <ToastStack />
        </div>
    }
}
