//! `terra repl` -- interactive command loop.
//!
//! Reads one command per line from stdin and routes it. The shared state
//! store tracks the same keys the agent loop uses: `current_time` is
//! refreshed before every command and `first_message` flips to `false`
//! after the first one.

use clap::Args;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use terrarium_core::CommandContext;

use super::{bootstrap, print_result};

/// Arguments for the `terra repl` subcommand.
#[derive(Args)]
pub struct ReplArgs {}

/// Run the interactive loop until EOF or `exit`.
pub async fn run(_args: ReplArgs) -> anyhow::Result<()> {
    let (registry, state) = bootstrap()?;
    let ctx = CommandContext::new(state.clone());

    println!("terrarium repl -- '<environment> <action>' per line, 'exit' to quit.");
    println!();
    println!("{}", registry.overview());
    println!();

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        state.update(
            [(
                "current_time".to_string(),
                json!(chrono::Utc::now().to_rfc3339()),
            )]
            .into_iter()
            .collect(),
        );

        let result = registry.route(line, &ctx).await;
        print_result(&result);
        println!();

        state.update(
            [("first_message".to_string(), json!(false))]
                .into_iter()
                .collect(),
        );
    }

    Ok(())
}
