//! # softsell-core
//!
//! Front-end logic for the SoftSell landing page: a scripted FAQ chat
//! assistant and the contact form.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ChatSession                             │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │ Transcript  │  │ PendingReply│──│   Responder         │  │
//! │  │ (append)    │  │ (ticket)    │  │   (FaqMatcher)      │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ContactDesk: ContactForm ─▶ validate ─▶ ticket ─▶ Notice    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here touches the network. The host (the Leptos front end, or a
//! test) owns the timers: it schedules the ticket returned by
//! [`ChatSession::submit`] and hands it back to [`ChatSession::complete`]
//! once the simulated delay has elapsed.

pub mod config;
pub mod contact;
pub mod delay;
pub mod error;
pub mod faq;
pub mod message;
pub mod notice;
pub mod session;

pub use config::{ChatConfig, ContactConfig, SiteConfig};
pub use contact::{ContactDesk, ContactForm, FormField, LicenseType, SubmissionTicket};
pub use delay::{Delay, NoDelay, TokioDelay};
pub use error::{Result, SoftSellError};
pub use faq::{FaqEntry, FaqMatcher, FaqTable, MatchKind, Responder};
pub use message::{Message, MessageId, Role, Transcript};
pub use notice::{Notice, NoticeVariant};
pub use session::{ChatSession, ReplyTicket, SessionId, SessionState};
