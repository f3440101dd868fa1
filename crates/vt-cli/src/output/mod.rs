use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Record with a fixed column layout for table output.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a serializable value in the requested format.
///
/// Table mode here is the generic fallback (objects as key/value rows);
/// commands with structured output print [`Tabular`] sections instead.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = match serde_json::to_value(value)? {
                Value::Object(map) => map
                    .into_iter()
                    .map(|(key, value)| vec![key, cell(&value)])
                    .collect(),
                other => vec![vec![String::from("value"), cell(&other)]],
            };
            Ok(table::render_table(&["key", "value"], &rows, options()))
        }
    }
}

/// Print a serializable value in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Render a titled table section.
pub fn render_section<T: Tabular>(title: &str, rows: &[T]) -> String {
    let body = if rows.is_empty() {
        String::from("(none)")
    } else {
        let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();
        table::render_table(T::HEADERS, &cells, options())
    };
    format!("{title}\n{body}\n")
}

pub fn print_section<T: Tabular>(title: &str, rows: &[T]) {
    println!("{}", render_section(title, rows));
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
