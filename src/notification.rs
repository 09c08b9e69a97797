//! Toast Messages
//!
//! One transient message at a time, shared by errors and successes. Each
//! message gets a fresh ticket; expiring with a stale ticket is a no-op, so a
//! timer started for an older message cannot clear a newer one.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// How long a message stays visible
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Identifies one shown message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageTicket(u64);

/// A message currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub ticket: MessageTicket,
    pub shown_at: DateTime<Utc>,
}

impl Message {
    /// Instant after which the message should be gone
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + chrono::Duration::milliseconds(MESSAGE_TTL.as_millis() as i64)
    }

    /// Time left before the message should be gone; zero once it is due
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at() - now).to_std().unwrap_or_default()
    }
}

/// Holder of the current message
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Message>,
    issued: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending message
    pub fn show(&mut self, text: impl Into<String>) -> MessageTicket {
        self.issued += 1;
        let ticket = MessageTicket(self.issued);
        self.current = Some(Message {
            text: text.into(),
            ticket,
            shown_at: Utc::now(),
        });
        ticket
    }

    /// Clear the message if `ticket` still names it. Returns whether it cleared.
    pub fn expire(&mut self, ticket: MessageTicket) -> bool {
        match &self.current {
            Some(message) if message.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }
}
