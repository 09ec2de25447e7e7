//! Application services.

mod relay;

pub use relay::{RelayError, RelayService};
