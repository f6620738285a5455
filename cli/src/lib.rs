//! Terminal client for the todo list API.
//!
//! # Overview
//! Hosts `todo-core`: supplies a ureq [`Transport`](todo_core::Transport),
//! turns command-line actions into [`TodoApp`] calls and renders the view.
//!
//! # Design
//! Every invocation mirrors one page visit: load the list, apply at most one
//! action (which reloads on success), render. Failures show the generic
//! banner from the view state; details go to the log.

pub mod render;
pub mod transport;

use std::io::Write;

use clap::{Parser, Subcommand};
use todo_core::{Filter, TodoApp, TodoDto, Transport};
use uuid::Uuid;

pub use transport::UreqTransport;

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Terminal client for the todo list API")]
pub struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:5200")]
    pub api_url: String,

    /// Which items to show: all, active or completed.
    #[arg(long, short, default_value_t = Filter::All)]
    pub filter: Filter,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the list (the default).
    List,
    /// Ask the server for completed items only.
    Completed,
    /// Show one item by id.
    Show { id: Uuid },
    /// Add an open item.
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip an item between open and completed.
    Toggle { id: Uuid },
    /// Replace an item's title and completion flag.
    Update {
        id: Uuid,
        title: String,
        #[arg(long)]
        completed: bool,
    },
    /// Mark the first item with exactly this title as completed.
    Complete {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Remove an item by id.
    Delete { id: Uuid },
}

/// Run one command against `app` and render the result to `out`.
///
/// Returns `Ok(false)` when the view ends with an error banner.
pub fn execute<T: Transport>(
    command: Command,
    app: &mut TodoApp<T>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match command {
        Command::Completed => {
            return match app.fetch_completed() {
                Ok(todos) => {
                    render::render_completed(&todos, out)?;
                    Ok(true)
                }
                Err(_) => {
                    render::render_banner(app, out)?;
                    Ok(false)
                }
            };
        }
        Command::Show { id } => {
            return match app.fetch(id) {
                Ok(todo) => {
                    render::render_todo(&todo, out)?;
                    Ok(true)
                }
                Err(_) => {
                    render::render_banner(app, out)?;
                    Ok(false)
                }
            };
        }
        _ => {}
    }

    if let Err(err) = app.load() {
        tracing::info!(error = %err, "initial load failed");
    }
    // Nothing to act on without a list.
    if app.error().is_some() {
        render::render(app, out)?;
        return Ok(false);
    }

    let outcome = match command {
        Command::List | Command::Completed | Command::Show { .. } => Ok(()),
        Command::Add { title } => app.add(&title.join(" ")),
        Command::Toggle { id } => app.toggle(id),
        Command::Update {
            id,
            title,
            completed,
        } => app.update(id, &TodoDto::new(title, completed)),
        Command::Complete { title } => app.complete_by_title(&title.join(" ")),
        Command::Delete { id } => app.delete(id),
    };
    if let Err(err) = outcome {
        tracing::info!(error = %err, "action failed");
    }

    render::render(app, out)?;
    Ok(app.error().is_none())
}
