//! `terra envs` -- list registered environments and their commands.

use clap::Args;

use super::bootstrap;

/// Arguments for the `terra envs` subcommand.
#[derive(Args)]
pub struct EnvsArgs {}

/// Print the registry overview.
pub fn run(_args: EnvsArgs) -> anyhow::Result<()> {
    let (registry, _state) = bootstrap()?;
    println!("{}", registry.overview());
    Ok(())
}
