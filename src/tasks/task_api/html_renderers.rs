//! HTML rendering functions for the task pages
use crate::tasks::types::Task;

const STYLE: &str = r#"body{font-family:sans-serif;max-width:640px;margin:2em auto}
table{border-collapse:collapse;width:100%}
td,th{border:1px solid #ccc;padding:4px 8px;text-align:left}
.done{text-decoration:line-through;color:#888}"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title}</title><style>{STYLE}</style></head>
<body>
{body}
</body>
</html>"#
    )
}

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn due_date_value(task: &Task) -> String {
    task.due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Build the task list page with the create form on top.
pub fn render_index(tasks: &[Task]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Tasks</h1>\n");
    body.push_str(
        r#"<form method="post" action="/">
<input type="text" name="content" maxlength="100" placeholder="What needs doing?" required>
<input type="date" name="duedate">
<label><input type="checkbox" name="complete" value="1"> done</label>
<button type="submit">Add</button>
</form>"#,
    );

    if tasks.is_empty() {
        body.push_str("\n<p>No tasks yet.</p>");
        return page("Tasks", &body);
    }

    body.push_str("\n<table>\n<tr><th>Task</th><th>Due</th><th>Done</th><th></th><th></th></tr>\n");
    for task in tasks {
        let class = if task.is_complete() { " class=\"done\"" } else { "" };
        body.push_str(&format!(
            r#"<tr{class}><td>{content}</td><td>{due}</td><td>{done}</td><td><a href="/edit/{id}">Edit</a></td><td><a href="/delete/{id}">Delete</a></td></tr>
"#,
            content = escape_html(&task.content),
            due = due_date_value(task),
            done = if task.is_complete() { "Yes" } else { "No" },
            id = task.id,
        ));
    }
    body.push_str("</table>");
    page("Tasks", &body)
}

/// Build the pre-filled edit form for one task.
pub fn render_edit(task: &Task) -> String {
    let checked = if task.is_complete() { " checked" } else { "" };
    let body = format!(
        r#"<h1>Edit task {id}</h1>
<form method="post" action="/edit/{id}">
<input type="text" name="content" maxlength="100" value="{content}" required>
<input type="date" name="duedate" value="{due}">
<label><input type="checkbox" name="complete" value="1"{checked}> done</label>
<button type="submit">Save</button>
</form>
<p><a href="/">Back</a></p>"#,
        id = task.id,
        content = escape_html(&task.content),
        due = due_date_value(task),
    );
    page("Edit task", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(content: &str) -> Task {
        Task {
            id: 1,
            content: content.to_string(),
            complete: 0,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            created_at: NaiveDate::from_ymd_opt(2026, 8, 23)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn index_escapes_content() {
        let html = render_index(&[task("<script>alert(1)</script>")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let html = render_edit(&task("Buy milk"));
        assert!(html.contains(r#"value="Buy milk""#));
        assert!(html.contains(r#"action="/edit/1""#));
        assert!(html.contains(r#"value="2026-09-01""#));
    }

    #[test]
    fn empty_listing_has_placeholder() {
        let html = render_index(&[]);
        assert!(html.contains("No tasks yet."));
    }
}
