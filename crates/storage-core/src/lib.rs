//! # Storage Core
//!
//! Core types and error definitions for Bootcamp Storage.
//! Holds the `User` domain entity, its typed identifier, the unified
//! error type, and logging initialisation shared by every crate in the
//! workspace.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::{init_tracing, LogFormat, LoggingConfig};

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
