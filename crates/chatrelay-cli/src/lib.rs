#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for test-only infrastructure
#[cfg(test)]
use tempfile as _;

// Used only by the binary in main.rs
use dotenvy as _;
use tokio as _;
use tracing as _;

pub mod error;
pub mod parser;
pub mod startup;

pub use error::CliError;
pub use parser::Cli;
pub use startup::{init_tracing, prepare, report_startup_error};
