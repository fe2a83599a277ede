//! # imds-core
//!
//! Core crate for the IMDS scheduled-events mock. Contains configuration
//! schemas, the open status/type/source vocabularies, scenario templates,
//! the scheduled-events wire document, and the unified error system.
//!
//! This crate has **no** internal dependencies on other IMDS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
