//! Chat Session
//!
//! Holds the transcript for one mounted chat widget and tracks the single
//! reply that may be in flight.
//!
//! ```text
//!            submit(text)                    complete(ticket)
//!   Idle ───────────────────▶ AwaitingReply ───────────────────▶ Idle
//!    ▲                              │
//!    └──────── cancel_pending() ────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ChatConfig;
use crate::delay::Delay;
use crate::error::{Result, SoftSellError};
use crate::faq::{FaqMatcher, FaqTable, Responder};
use crate::message::{Message, Role, Transcript};

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a reply is in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Handle for one scheduled reply
///
/// Returned by [`ChatSession::submit`]; the host hands it back to
/// [`ChatSession::complete`] when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

impl ReplyTicket {
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct PendingReply {
    ticket: ReplyTicket,
    question: String,
}

/// A chat conversation with the scripted assistant
pub struct ChatSession {
    id: SessionId,
    transcript: Transcript,
    pending: Option<PendingReply>,
    responder: Arc<dyn Responder>,
    config: ChatConfig,
    next_ticket: u64,
}

impl ChatSession {
    /// Create a session seeded with the configured greeting
    pub fn new(responder: Arc<dyn Responder>, config: ChatConfig) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(Role::Assistant, config.greeting.clone());

        let session = Self {
            id: SessionId::new(),
            transcript,
            pending: None,
            responder,
            config,
            next_ticket: 1,
        };
        tracing::debug!(session_id = %session.id, responder = session.responder.name(), "Chat session created");
        session
    }

    /// Session answering from the stock FAQ corpus
    pub fn with_config(config: ChatConfig) -> Self {
        let matcher = FaqMatcher::new(FaqTable::default(), config.fallback.clone());
        Self::new(Arc::new(matcher), config)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub const fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    pub const fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the reply in flight, if any
    pub fn pending_ticket(&self) -> Option<ReplyTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Append a visitor question and schedule its reply
    ///
    /// Blank input and input arriving while a reply is pending are
    /// rejected without touching the transcript.
    pub fn submit(&mut self, text: &str) -> Result<ReplyTicket> {
        if text.trim().is_empty() {
            return Err(SoftSellError::EmptyMessage);
        }
        if let Some(pending) = &self.pending {
            tracing::debug!(session_id = %self.id, ticket = pending.ticket.0, "Submission rejected, reply pending");
            return Err(SoftSellError::ReplyPending(pending.ticket.0));
        }

        let message_id = self.transcript.append(Role::User, text).id;
        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(PendingReply {
            ticket,
            question: text.to_string(),
        });

        tracing::info!(session_id = %self.id, %message_id, ticket = ticket.0, "Question submitted");
        Ok(ticket)
    }

    /// Answer the pending question and return to idle
    pub fn complete(&mut self, ticket: ReplyTicket) -> Result<&Message> {
        let pending = match self.pending.take() {
            None => return Err(SoftSellError::NoPendingReply),
            Some(p) if p.ticket != ticket => {
                tracing::warn!(session_id = %self.id, got = ticket.0, pending = p.ticket.0, "Stale reply ignored");
                let err = SoftSellError::StaleReply {
                    got: ticket.0,
                    pending: p.ticket.0,
                };
                self.pending = Some(p);
                return Err(err);
            }
            Some(p) => p,
        };

        let answer = self.responder.respond(&pending.question);
        let message = self.transcript.append(Role::Assistant, answer);
        tracing::info!(session_id = %self.id, message_id = %message.id, ticket = ticket.0, "Reply delivered");
        Ok(message)
    }

    /// Drop the reply in flight without answering it
    ///
    /// Returns the cancelled ticket, if there was one.
    pub fn cancel_pending(&mut self) -> Option<ReplyTicket> {
        let cancelled = self.pending.take().map(|p| p.ticket);
        if let Some(ticket) = cancelled {
            tracing::debug!(session_id = %self.id, ticket = ticket.0, "Pending reply cancelled");
        }
        cancelled
    }

    /// Submit, wait out the configured delay, then complete
    ///
    /// Dropping the future during the wait cancels the pending reply, so
    /// the session is back to idle with only the question appended.
    pub async fn ask(&mut self, text: &str, delay: &dyn Delay) -> Result<&Message> {
        let ticket = self.submit(text)?;
        let pause = self.config.reply_delay();

        let mut guard = PendingGuard {
            session: &mut *self,
            armed: true,
        };
        delay.wait(pause).await;
        guard.armed = false;
        drop(guard);

        self.complete(ticket)
    }
}

/// Cancels the pending reply unless disarmed before drop
struct PendingGuard<'a> {
    session: &'a mut ChatSession,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.session.cancel_pending();
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::with_config(ChatConfig::default())
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("messages", &self.transcript.len())
            .field("state", &self.state())
            .field("responder", &self.responder.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::delay::{NoDelay, TokioDelay};
    use crate::faq::{DEFAULT_ENTRIES, DEFAULT_FALLBACK};

    struct Echo;

    impl Responder for Echo {
        fn respond(&self, question: &str) -> String {
            format!("echo: {question}")
        }
    }

    #[test]
    fn test_session_creation() {
        let session = ChatSession::default();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 1);

        let greeting = &session.transcript().messages()[0];
        assert_eq!(greeting.role, Role::Assistant);
        assert_eq!(greeting.id.to_string(), "1");
        assert_eq!(greeting.content, ChatConfig::default().greeting);
    }

    #[test]
    fn test_submit_then_complete() {
        let mut session = ChatSession::default();

        let ticket = session.submit("How do I sell my license?").unwrap();
        assert_eq!(session.state(), SessionState::AwaitingReply);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().last().unwrap().role, Role::User);
        assert_eq!(session.transcript().last().unwrap().content, "How do I sell my license?");

        let reply = session.complete(ticket).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.content.contains("Sell My Licenses"));

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_blank_submission_is_noop() {
        let mut session = ChatSession::default();
        for blank in ["", "   ", "\n\t "] {
            assert!(matches!(session.submit(blank), Err(SoftSellError::EmptyMessage)));
        }
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_blank_submission_while_pending_keeps_pending() {
        let mut session = ChatSession::default();
        let ticket = session.submit("is this legal").unwrap();

        assert!(matches!(session.submit(" "), Err(SoftSellError::EmptyMessage)));
        assert_eq!(session.pending_ticket(), Some(ticket));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_single_flight() {
        let mut session = ChatSession::default();
        let first = session.submit("is this legal").unwrap();

        let second = session.submit("how long does the process take");
        assert!(matches!(second, Err(SoftSellError::ReplyPending(t)) if t == first.value()));
        assert_eq!(session.transcript().len(), 2);

        session.complete(first).unwrap();
        assert!(session.submit("how long does the process take").is_ok());
    }

    #[test]
    fn test_stale_and_missing_tickets() {
        let mut session = ChatSession::default();
        let first = session.submit("hello").unwrap();
        session.complete(first).unwrap();

        assert!(matches!(session.complete(first), Err(SoftSellError::NoPendingReply)));

        let second = session.submit("hello again").unwrap();
        assert!(matches!(
            session.complete(first),
            Err(SoftSellError::StaleReply { got, pending }) if got == first.value() && pending == second.value()
        ));
        assert_eq!(session.state(), SessionState::AwaitingReply);
        assert_eq!(session.transcript().len(), 4);
    }

    #[test]
    fn test_cancel_pending() {
        let mut session = ChatSession::default();
        assert_eq!(session.cancel_pending(), None);

        let ticket = session.submit("is this legal").unwrap();
        assert_eq!(session.cancel_pending(), Some(ticket));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 2);

        assert!(matches!(session.complete(ticket), Err(SoftSellError::NoPendingReply)));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut session = ChatSession::default();
        for question in ["a", "b", "c"] {
            let ticket = session.submit(question).unwrap();
            session.complete(ticket).unwrap();
        }

        let ids: Vec<u64> = session.transcript().iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_raw_text_reaches_responder() {
        let mut session = ChatSession::new(Arc::new(Echo), ChatConfig::default());
        let ticket = session.submit("  Spaced Out  ").unwrap();

        assert_eq!(session.transcript().last().unwrap().content, "  Spaced Out  ");
        assert_eq!(session.complete(ticket).unwrap().content, "echo:   Spaced Out  ");
    }

    #[test]
    fn test_configured_fallback_and_greeting() {
        let config = ChatConfig {
            greeting: "Welcome".into(),
            fallback: "Try the form".into(),
            ..ChatConfig::default()
        };
        let mut session = ChatSession::with_config(config);
        assert_eq!(session.transcript().messages()[0].content, "Welcome");

        let ticket = session.submit("what's the weather").unwrap();
        assert_eq!(session.complete(ticket).unwrap().content, "Try the form");
    }

    #[tokio::test]
    async fn test_ask_without_delay() {
        let mut session = ChatSession::default();
        let reply = session.ask("IS THIS LEGAL", &NoDelay).await.unwrap();
        assert_eq!(reply.content, DEFAULT_ENTRIES[4].1);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_ask_rejects_blank() {
        let mut session = ChatSession::default();
        assert!(session.ask("  ", &NoDelay).await.is_err());
        assert_eq!(session.transcript().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_ask_returns_to_idle() {
        let mut session = ChatSession::default();

        let timed_out = tokio::time::timeout(
            Duration::from_millis(10),
            session.ask("is this legal", &TokioDelay),
        )
        .await;
        assert!(timed_out.is_err());

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().last().unwrap().role, Role::User);

        let ticket = session.submit("how long does the process take").unwrap();
        assert_eq!(session.complete(ticket).unwrap().content, DEFAULT_ENTRIES[2].1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ask_waits_configured_delay() {
        let mut session = ChatSession::default();
        let start = tokio::time::Instant::now();

        let reply = session.ask("what's the weather", &TokioDelay).await.unwrap();
        assert_eq!(reply.content, DEFAULT_FALLBACK);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
