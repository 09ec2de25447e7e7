//! Domain types for a single relay round trip.
//!
//! Nothing here outlives one request: a conversation is built, handed to the
//! provider, and dropped.

mod chat;
mod generation;

pub use chat::{ChatMessage, Conversation, MessageRole};
pub use generation::GenerationParams;
