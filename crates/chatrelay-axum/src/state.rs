//! Handler state: the relay service built at startup.
//!
//! The context carries no mutable data. Each request reads the persona,
//! model and provider from it and nothing is written back, so handlers
//! share one `Arc` without locking.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// State extracted by the `/chat` handler.
pub type AppState = Arc<AxumContext>;
