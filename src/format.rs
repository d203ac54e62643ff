//! Console table rendering for task lists.

use crate::types::Task;
use colored::Colorize;
use comfy_table::{Cell, Color, Table};

/// Build the task table with ID, Title and Completed columns.
///
/// One color per row: green for completed tasks, yellow for pending
/// ones. An empty slice yields a table with the header row only.
pub fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Completed"]);

    for task in tasks {
        let color = if task.completed {
            Color::Green
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(task.id.to_hex()).fg(color),
            Cell::new(&task.title).fg(color),
            Cell::new(task.completed).fg(color),
        ]);
    }

    table
}

/// Print the titled table to stdout.
pub fn print_tasks(tasks: &[Task]) {
    println!("{}", "All Tasks".bold());
    println!("{}", task_table(tasks));
}
