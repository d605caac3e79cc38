use std::io::IsTerminal;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

/// Columns shown first, in this order, when a row carries them.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "developer_id",
    "log_date",
    "first_name",
    "last_name",
    "email",
    "role",
    "manager_id",
    "mood",
    "is_reviewed",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, terminal_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn terminal_options() -> table::TableOptions {
    let stdout = std::io::stdout();
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|columns| columns.parse().ok()),
        color: stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => Ok(render_object(map, options)),
        scalar => {
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&["value"], &rows, options))
        }
    }
}

/// Objects render as a key/value table. A nested list of rows (e.g. the
/// `logs` of a team listing) is rendered as its own table underneath.
fn render_object(map: Map<String, Value>, options: table::TableOptions) -> String {
    let (nested, scalars): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(_, value)| is_row_list(value));

    let rows = scalars
        .iter()
        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
        .collect::<Vec<_>>();
    let mut sections = vec![table::render_entity_table(&["key", "value"], &rows, options)];

    for (key, value) in nested {
        if let Value::Array(items) = value {
            sections.push(format!("{key}:\n{}", render_array_table(&items, options)));
        }
    }
    sections.join("\n\n")
}

fn is_row_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_object))
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort_by_key(|header| {
        (
            LEADING_COLUMNS
                .iter()
                .position(|leading| leading == header)
                .unwrap_or(LEADING_COLUMNS.len()),
            header.clone(),
        )
    });

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " "),
        Value::Array(items) if items.iter().all(is_time_entry) => items
            .iter()
            .map(time_entry_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

fn is_time_entry(value: &Value) -> bool {
    value.get("taskId").is_some_and(Value::is_string)
        && value.get("hours").is_some()
        && value.get("minutes").is_some()
}

fn time_entry_cell(value: &Value) -> String {
    format!(
        "{}:{}h{}m",
        value["taskId"].as_str().unwrap_or_default(),
        value["hours"],
        value["minutes"]
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{render, render_table, table::TableOptions, value_to_cell};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_key_value_table() {
        let value = Example { id: "x", value: 7 };
        let out = render_table(&value, PLAIN).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("id"));
    }

    #[test]
    fn nested_rows_render_below_summary() {
        let value = json!({
            "manager_id": "dev-m",
            "count": 1,
            "logs": [{ "id": "log-1", "mood": "GOOD", "log_date": "2024-01-03" }],
        });
        let out = render_table(&value, PLAIN).expect("table render should work");
        let logs_at = out.find("logs:").expect("nested section");
        assert!(out[..logs_at].contains("manager_id"));
        let header = out[logs_at..].lines().nth(1).expect("header line");
        let id_at = header.find("id").expect("id column");
        let date_at = header.find("log_date").expect("log_date column");
        assert!(id_at < date_at);
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render_table(&Vec::<Example>::new(), PLAIN).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn time_entries_render_compactly() {
        let cell = value_to_cell(&json!([
            { "taskId": "api", "hours": 2, "minutes": 30 },
            { "taskId": "review", "hours": 0, "minutes": 45 },
        ]));
        assert_eq!(cell, "api:2h30m, review:0h45m");
    }
}
