//! Execution context for loggers
//!
//! Loggers need the current user, the working directory and a clock.
//! This module provides:
//! - `LogContext` trait for supplying them
//! - `EnvContext` reading the process environment
//! - `FixedContext` with caller-supplied values

mod traits;
mod env_context;
mod fixed_context;

pub use traits::{LogContext, SharedContext};
pub use env_context::{EnvContext, UNKNOWN_USER};
pub use fixed_context::FixedContext;
