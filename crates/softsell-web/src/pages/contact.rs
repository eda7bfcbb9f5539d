//! Contact Form Section

use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use softsell_core::{ContactConfig, ContactDesk, ContactForm, LicenseType};

use crate::notify::use_toaster;

#[component]
pub fn ContactSection(config: ContactConfig) -> impl IntoView {
    let delay_ms = u32::try_from(config.submit_delay_ms).unwrap_or(u32::MAX);
    let desk = RwSignal::new(ContactDesk::new(config));
    let form = RwSignal::new(ContactForm::default());
    let toaster = use_toaster();

    let submit_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        submit_timer.try_update_value(Option::take);
        desk.try_update(ContactDesk::cancel);
    });

    let submitting = move || desk.with(ContactDesk::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        let Some(started) = desk.try_update(|d| d.begin(&snapshot)) else {
            return;
        };

        match started {
            Ok(ticket) => {
                let timeout = Timeout::new(delay_ms, move || match desk.try_update(|d| d.finish(ticket)) {
                    Some(Ok(notice)) => {
                        form.try_update(ContactForm::reset);
                        toaster.show(notice);
                    }
                    Some(Err(err)) => tracing::warn!(%err, "Submission result dropped"),
                    None => {}
                });
                submit_timer.set_value(Some(timeout));
            }
            Err(err) => toaster.show(err.notice()),
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Get in Touch"</h2>

            <form on:submit=on_submit>
                <div class="row">
                    <div class="field">
                        <label for="name">"Name *"</label>
                        <input
                            id="name"
                            name="name"
                            placeholder="Your name"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="email">"Email *"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="your@email.com"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="row">
                    <div class="field">
                        <label for="company">"Company *"</label>
                        <input
                            id="company"
                            name="company"
                            placeholder="Your company"
                            required
                            prop:value=move || form.with(|f| f.company.clone())
                            on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="licenseType">"License Type"</label>
                        <select
                            id="licenseType"
                            name="licenseType"
                            prop:value=move || {
                                form.with(|f| f.license_type.map(|t| t.as_str()).unwrap_or_default())
                            }
                            on:change=move |ev| {
                                form.update(|f| f.license_type = event_target_value(&ev).parse().ok());
                            }
                        >
                            <option value="">"Select license type"</option>
                            {LicenseType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="field">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        placeholder="How can we help you?"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting() { "Processing..." } else { "Submit Request ✓" }}
                </button>
            </form>
        </section>
    }
}
