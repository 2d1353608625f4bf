use std::io;

use clap::Parser;
use feedback_portal::cli::{Cli, Command};
use feedback_portal::{ClientConfig, CliError, FeedbackClient, commands, interactive};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.base_url, cli.timeouts())?;
    let client = FeedbackClient::new(&config)?;
    tracing::debug!(base_url = %config.base_url, "feedback client ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Ping => commands::ping(&client, &config.base_url, &mut out).await,
        Command::Submit { category, text } => commands::submit(&client, category, &text, &mut out).await,
        Command::List(args) => {
            let query = args.query();
            commands::list(&client, query, args.search.as_deref(), args.json, &mut out).await
        }
        Command::Get { id, json } => commands::get(&client, &id, json, &mut out).await,
        Command::Review { id, json } => commands::review(&client, &id, json, &mut out).await,
        Command::Delete { id, yes } => {
            let mut input = io::stdin().lock();
            commands::delete(&client, &id, yes, &mut input, &mut out).await
        }
        Command::Stats { json } => commands::stats(&client, json, &mut out).await,
        Command::Interactive => interactive::run(&client, io::stdin().lock(), &mut out).await,
    }
}
