//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Exchange list, tier, and path resolution tests
//! - `environment_loading`: Loading through the real environment and CLI

mod helpers;
mod operation_mode;
mod precedence;
