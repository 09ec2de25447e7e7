//! Chat message and conversation types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message author, serialized in lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// The conversation submitted to the provider.
///
/// Always exactly two entries: the system prompt first, then the caller's
/// message. There is no history; every request builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: [ChatMessage; 2],
}

impl Conversation {
    /// Pair the system prompt with the user's message.
    ///
    /// The user message is stored as given: no trimming, no normalisation.
    pub fn new(system_prompt: &str, user_message: &str) -> Self {
        Self {
            messages: [ChatMessage::system(system_prompt), ChatMessage::user(user_message)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn system(&self) -> &ChatMessage {
        &self.messages[0]
    }

    pub fn user(&self) -> &ChatMessage {
        &self.messages[1]
    }
}
