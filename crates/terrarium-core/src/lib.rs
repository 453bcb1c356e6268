//! # terrarium-core
//!
//! Environment abstraction and dispatch for the terrarium framework.
//!
//! - **[`environment`]** -- the [`Environment`] trait every capability
//!   provider implements, plus [`CommandContext`] and command splitting
//! - **[`registry`]** -- [`EnvironmentRegistry`], which resolves a raw
//!   command string to an environment and invokes it
//! - **[`state`]** -- [`StateStore`], process-wide shared key/value state
//!   with shallow-merge updates and snapshot reads
//!
//! Concrete environments live in the `terrarium-envs` crate; this crate
//! only defines the contract and routing infrastructure.

pub mod environment;
pub mod registry;
pub mod state;

pub use environment::{CommandContext, Environment, split_command};
pub use registry::EnvironmentRegistry;
pub use state::StateStore;
