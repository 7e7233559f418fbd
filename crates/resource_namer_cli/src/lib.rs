//! resource-namer CLI library exports for testing.
//!
//! This module exposes command implementations so they can be driven without
//! spawning the binary.

pub mod commands;
pub mod config;
pub mod errors;
