//! Common utilities shared by the back-office binaries.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration loaded from the environment
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::AdminConfig;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
