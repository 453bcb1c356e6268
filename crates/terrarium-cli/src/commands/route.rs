//! `terra route` -- dispatch a single command string.
//!
//! # Example
//!
//! ```text
//! terra route "wallet tokens"
//! terra route web open https://www.example.com
//! ```

use clap::Args;

use terrarium_core::CommandContext;

use super::{bootstrap, print_result};

/// Arguments for the `terra route` subcommand.
#[derive(Args)]
pub struct RouteArgs {
    /// The command to dispatch, e.g. `wallet tokens`. Multiple arguments
    /// are joined with spaces, so quoting is optional.
    #[arg(required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

/// Run the route command.
pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let (registry, state) = bootstrap()?;
    let ctx = CommandContext::new(state);

    let raw = args.command.join(" ");
    let result = registry.route(&raw, &ctx).await;
    print_result(&result);
    Ok(())
}
