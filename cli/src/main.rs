use std::io;
use std::process::ExitCode;

use clap::Parser;
use todo_cli::{execute, Cli, Command, UreqTransport};
use todo_core::{TodoApp, TodoClient};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut app = TodoApp::new(TodoClient::new(&cli.api_url), UreqTransport::default());
    app.set_filter(cli.filter);

    let mut out = io::stdout().lock();
    let ok = execute(cli.command.unwrap_or(Command::List), &mut app, &mut out)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
