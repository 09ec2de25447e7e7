//! HTTP request handlers.
//!
//! Handlers are thin: parse, delegate to the relay, map the result.

pub mod chat;
pub mod index;
