//! Curate Core - Core library for changelog curation
//!
//! This crate provides the error types and configuration shared by the
//! changelog pipeline and the `curate` CLI.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, CurateError, InputError, OutputError, Result};
