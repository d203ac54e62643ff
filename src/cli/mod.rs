//! CLI command definitions and dispatch.
//!
//! The command structure is defined with clap's derive macros; argument
//! counts and generated help come from the parser. `execute` maps each
//! command onto one task store call.

use crate::db::TaskStore;
use crate::error::{TaskError, TaskResult};
use crate::format;
use crate::types::{Task, TaskFilter};
use clap::{Parser, Subcommand};
use colored::Colorize;

/// Task management tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print tasks
    #[command(visible_alias = "ls")]
    List {
        #[command(subcommand)]
        filter: Option<ListFilter>,
    },

    /// Insert a new task
    #[command(visible_alias = "a")]
    Add {
        /// Title of the new task
        title: String,
    },

    /// Mark a task as completed
    #[command(visible_alias = "cpt")]
    Complete {
        /// Id of the task to complete
        id: String,
    },

    /// Remove a task
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the task to remove
        id: String,
    },
}

/// Completion-state restriction for `list`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    /// Only completed tasks
    Completed,
    /// Only uncompleted tasks
    Uncompleted,
}

/// Run one command against the store.
///
/// Errors are returned, not printed; the binary decides presentation
/// and exit code.
pub async fn execute(store: &dyn TaskStore, command: &Command) -> TaskResult<()> {
    match command {
        Command::List { filter } => {
            let tasks = match filter {
                None => store.list_all(TaskFilter::all()).await?,
                Some(ListFilter::Completed) => store.filter_by_status(true).await?,
                Some(ListFilter::Uncompleted) => store.filter_by_status(false).await?,
            };
            format::print_tasks(&tasks);
        }
        Command::Add { title } => {
            if title.trim().is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            store.add(&Task::new(title.trim())).await?;
            println!("{}", "Task added successfully!".green());
        }
        Command::Complete { id } => {
            store.complete(id).await?;
            println!("{}", "Task completed successfully".green());
        }
        Command::Delete { id } => {
            store.delete(id).await?;
            println!("{}", "Task deleted successfully".green());
        }
    }

    Ok(())
}
