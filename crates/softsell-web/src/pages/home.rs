//! Landing Page

use chrono::Datelike;
use leptos::prelude::*;
use softsell_core::SiteConfig;

use crate::chat::ChatWidget;
use crate::pages::ContactSection;

struct Card {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    quote: &'static str,
}

const STEPS: &[Card] = &[
    Card {
        icon: "📋",
        title: "Upload License",
        description: "Submit your unused software licenses through our secure portal",
    },
    Card {
        icon: "💰",
        title: "Get Valuation",
        description: "Receive a competitive market valuation within 24 hours",
    },
    Card {
        icon: "💳",
        title: "Get Paid",
        description: "Accept our offer and receive payment within 3 business days",
    },
];

const FEATURES: &[Card] = &[
    Card {
        icon: "🏆",
        title: "Maximum Value",
        description: "Our marketplace ensures you get the best possible price for your unused licenses",
    },
    Card {
        icon: "⚖️",
        title: "Legal Compliance",
        description: "All transactions are fully compliant with software licensing regulations",
    },
    Card {
        icon: "🔒",
        title: "Secure Process",
        description: "Your data and transactions are protected with enterprise-grade security",
    },
    Card {
        icon: "⚡",
        title: "Fast Turnaround",
        description: "From submission to payment in as little as 72 hours",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "IT Director",
        company: "TechCorp Inc.",
        quote: "SoftSell helped us recover over $50,000 from unused enterprise licenses. The process was surprisingly simple and the team was professional throughout.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO",
        company: "Innovate Solutions",
        quote: "As we transitioned to cloud-based solutions, SoftSell provided an excellent way to offset costs by selling our legacy software licenses. Highly recommended.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let year = chrono::Utc::now().year();

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Transform Your Unused Software Into Cash"</h1>
                <p class="tagline">
                    "SoftSell helps businesses recover value from unused software licenses. Simple, secure, and profitable."
                </p>
                <div class="cta">
                    <a href="#contact" class="btn btn-primary">"Get a Quote"</a>
                    <a href="#contact" class="btn">"Sell My Licenses"</a>
                </div>
            </header>

            <section class="steps">
                <h2>"How It Works"</h2>
                <div class="grid">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="card step">
                                    <div class="icon">{step.icon}</div>
                                    <h3>{step.title}</h3>
                                    <span class="step-number">{index + 1}</span>
                                    <p>{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="features">
                <h2>"Why Choose Us"</h2>
                <div class="grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card feature">
                                    <div class="icon">{feature.icon}</div>
                                    <div>
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials">
                <h2>"What Our Customers Say"</h2>
                <div class="grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="card testimonial">
                                    <p class="quote">"\u{201c}"{t.quote}"\u{201d}"</p>
                                    <footer>
                                        <strong>{t.name}</strong>
                                        <span>{format!("{}, {}", t.role, t.company)}</span>
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ContactSection config=config.contact />

            <footer class="site-footer">
                <p>{format!("© {year} SoftSell. All rights reserved.")}</p>
                <nav>
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </nav>
            </footer>

            <ChatWidget config=config.chat />
        </div>
    }
}
