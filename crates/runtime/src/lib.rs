//! Queue-draining driver for `tbr-core` actions.
//!
//! Modules are organized by responsibility:
//! - [`driver`] processes queued actions and collects their effects
//! - [`config`] holds the driver limits and their environment loader
//! - [`error`] surfaces driver failures
pub mod config;
pub mod driver;
pub mod error;

pub use config::DriverConfig;
pub use driver::{ActionDriver, DrainReport, StepOutcome, StepReport};
pub use error::{DriverError, Result};
