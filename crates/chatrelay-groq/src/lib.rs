#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod models;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::GroqClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, GroqClientConfig};

// Errors
pub use error::{GroqError, GroqResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;
