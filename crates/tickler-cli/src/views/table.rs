use comfy_table::{Attribute, Cell, Color, Row, Table};
use tickler_core::models::Task;

fn due_cell(task: &Task, today: &str) -> Cell {
    let cell = Cell::new(&task.date);
    if task.date.as_str() < today {
        cell.fg(Color::Red) // Overdue
    } else if task.date == today {
        cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn repeat_text(task: &Task) -> &str {
    if task.is_recurring() {
        &task.repeat
    } else {
        "-"
    }
}

pub fn display_tasks(tasks: &[Task], today: &str) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Due", "Title", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));
        row.add_cell(due_cell(task, today));

        let mut title = String::new();
        if task.is_recurring() {
            title.push('↻');
            title.push(' ');
        }
        title.push_str(&task.title);
        row.add_cell(Cell::new(title));

        row.add_cell(Cell::new(repeat_text(task)));
        row.add_cell(Cell::new(&task.comment));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_task_details(task: &Task, today: &str) {
    let mut table = Table::new();
    table.add_row(vec![Cell::new("ID"), Cell::new(task.id)]);
    table.add_row(vec![Cell::new("Title"), Cell::new(&task.title)]);
    table.add_row(vec![Cell::new("Due"), due_cell(task, today)]);
    table.add_row(vec![Cell::new("Repeat"), Cell::new(repeat_text(task))]);
    table.add_row(vec![Cell::new("Comment"), Cell::new(&task.comment)]);
    println!("{table}");
}
