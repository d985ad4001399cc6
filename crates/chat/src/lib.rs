//! `ledgerview-chat` — the "chat with data" responder.
//!
//! Two interchangeable implementations behind one trait, selected by the
//! deployment (never negotiated at runtime):
//!
//! - [`MockResponder`]: an ordered list of keyword predicates with canned
//!   rowsets. This is substring matching, **not** natural-language
//!   understanding; keep it that way.
//! - [`ProxyResponder`]: forwards the question verbatim to an external
//!   answering service and relays its response.
//!
//! Either way the answer carries an explicit [`AnswerKind`] tag so consumers
//! dispatch on the tag instead of probing row fields. Calls are independent;
//! no conversation state is kept.

pub mod answer;
pub mod error;
pub mod mock;
pub mod proxy;

pub use answer::{classify_rows, AnswerKind, ChatAnswer};
pub use error::ChatError;
pub use mock::MockResponder;
pub use proxy::{ProxyResponder, UnconfiguredResponder};

use async_trait::async_trait;

/// A stateless answerer for free-text questions about the invoice data.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn answer(&self, question: &str) -> Result<ChatAnswer, ChatError>;
}
