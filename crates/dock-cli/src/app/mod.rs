//! Application-level utilities for the Dock CLI.
//!
//! This module provides:
//! - Path resolution for config and data files
//! - Master password handling with retry logic
//! - The per-invocation application context

mod context;
mod password;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use password::{new_password, unlock_with_retry};
pub use resolver::resolve_config_path;
