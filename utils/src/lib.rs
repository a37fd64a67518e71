//! Shared utilities for the Regen fee module.

pub mod logging;

pub use logging::{init_test_logging, try_init_logging, LogFormat, LoggingError};
