//! Plain-text rendering of the client view.

use std::io::{self, Write};

use todo_core::{Filter, Todo, TodoApp, Transport};

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "task"
    } else {
        "tasks"
    }
}

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks yet. Add a task to get started.",
        Filter::Active => "No active tasks",
        Filter::Completed => "No completed tasks",
    }
}

fn render_item(out: &mut impl Write, todo: &Todo) -> io::Result<()> {
    let mark = if todo.is_completed { 'x' } else { ' ' };
    writeln!(out, "  [{mark}] {}  ({})", todo.title_or_empty(), todo.id)
}

/// Write the whole view: error banner, header, filter bar, list and footer.
pub fn render<T: Transport>(app: &TodoApp<T>, out: &mut impl Write) -> io::Result<()> {
    if app.is_loading() {
        return writeln!(out, "Loading todos...");
    }

    if let Some(error) = app.error() {
        writeln!(out, "! {error}")?;
        writeln!(out)?;
    }

    let active = app.active_count();
    writeln!(out, "Todo List")?;
    writeln!(out, "{active} {} remaining", plural(active))?;
    writeln!(out)?;

    let bar: Vec<String> = Filter::ALL
        .into_iter()
        .map(|f| {
            let count = match f {
                Filter::Active if active > 0 => format!(" ({active})"),
                Filter::Completed if app.completed_count() > 0 => {
                    format!(" ({})", app.completed_count())
                }
                _ => String::new(),
            };
            if f == app.filter() {
                format!("[{f}{count}]")
            } else {
                format!("{f}{count}")
            }
        })
        .collect();
    writeln!(out, "{}", bar.join("  "))?;

    let visible = app.visible();
    if visible.is_empty() {
        writeln!(out, "  {}", empty_message(app.filter()))?;
    }
    for todo in visible {
        render_item(out, todo)?;
    }

    if !app.todos().is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Total: {} • Active: {active} • Done: {}",
            app.todos().len(),
            app.completed_count()
        )?;
    }
    Ok(())
}

/// Just the error banner, for commands that fail before there is a view.
pub fn render_banner<T: Transport>(app: &TodoApp<T>, out: &mut impl Write) -> io::Result<()> {
    match app.error() {
        Some(error) => writeln!(out, "! {error}"),
        None => Ok(()),
    }
}

/// One item in detail.
pub fn render_todo(todo: &Todo, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "id:        {}", todo.id)?;
    writeln!(out, "title:     {}", todo.title_or_empty())?;
    writeln!(out, "completed: {}", todo.is_completed)
}

/// The server-side completed list, one item per line.
pub fn render_completed(todos: &[Todo], out: &mut impl Write) -> io::Result<()> {
    if todos.is_empty() {
        return writeln!(out, "  {}", empty_message(Filter::Completed));
    }
    for todo in todos {
        render_item(out, todo)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todo_core::{ApiError, HttpRequest, HttpResponse, TodoClient};

    use super::*;

    struct Fixed(&'static str);

    impl Transport for Fixed {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse::new(200, self.0))
        }
    }

    const TWO: &str = r#"[
        {"id":"00000000-0000-0000-0000-00000000000a","title":"Buy milk","isCompleted":false},
        {"id":"00000000-0000-0000-0000-00000000000b","title":"Walk dog","isCompleted":true}
    ]"#;

    fn rendered<T: Transport>(app: &TodoApp<T>) -> String {
        let mut out = Vec::new();
        render(app, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn loading_gate_before_first_load() {
        let app = TodoApp::new(TodoClient::new("http://api.test"), Fixed("[]"));
        assert_eq!(rendered(&app), "Loading todos...\n");
    }

    #[test]
    fn empty_list_shows_hint() {
        let mut app = TodoApp::new(TodoClient::new("http://api.test"), Fixed("[]"));
        app.load().unwrap();
        let text = rendered(&app);
        assert!(text.contains("0 tasks remaining"));
        assert!(text.contains("No tasks yet"));
        assert!(!text.contains("Total:"));
    }

    #[test]
    fn full_view_with_filter() {
        let mut app = TodoApp::new(TodoClient::new("http://api.test"), Fixed(TWO));
        app.load().unwrap();
        app.set_filter(Filter::Active);
        let expected = "\
Todo List
1 task remaining

all  [active (1)]  completed (1)
  [ ] Buy milk  (00000000-0000-0000-0000-00000000000a)

Total: 2 • Active: 1 • Done: 1
";
        assert_eq!(rendered(&app), expected);
    }

    #[test]
    fn render_completed_marks_items() {
        let todos: Vec<Todo> = walked_dog();
        let mut out = Vec::new();
        render_completed(&todos, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "  [x] Walk dog  (00000000-0000-0000-0000-00000000000b)\n"
        );
    }

    fn walked_dog() -> Vec<Todo> {
        vec![Todo {
            id: "00000000-0000-0000-0000-00000000000b".parse().unwrap(),
            title: Some("Walk dog".to_string()),
            is_completed: true,
        }]
    }
}
