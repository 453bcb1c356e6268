//! # terrarium-types
//!
//! Core type definitions for the terrarium agent environment framework.
//!
//! This crate is the foundation of the dependency graph -- all other
//! terrarium crates depend on it. It contains:
//!
//! - **[`result`]** -- [`CommandResult`], the uniform response shape every
//!   environment command returns, and [`CommandSpec`] descriptors
//! - **[`error`]** -- [`TerrariumError`] and the crate-wide [`Result`] alias
//! - **[`config`]** -- Configuration schema and file/env loading
//! - **[`secret`]** -- [`SecretString`] wrapper for API keys

pub mod config;
pub mod error;
pub mod result;
pub mod secret;

pub use error::{Result, TerrariumError};
pub use result::{CommandResult, CommandSpec};
pub use secret::SecretString;
