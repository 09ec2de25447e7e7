//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `axum` types in any signature
//! - One intent-based method per external call

pub mod completion;

pub use completion::{Completion, CompletionError, CompletionPort, CompletionRequest};

#[cfg(test)]
pub use completion::MockCompletionPort;
