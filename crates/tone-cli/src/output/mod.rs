use serde::Serialize;
use serde_json::Value;
use tone_core::ClassificationResult;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod views;

use views::{EntryView, StatsView};

const ENTRY_HEADERS: [&str; 6] = ["sentiment", "confidence", "source", "provider", "time", "text"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render ledger entries; tables keep a fixed, readable column order.
pub fn render_entries<'a, I>(entries: I, format: OutputFormat) -> anyhow::Result<String>
where
    I: IntoIterator<Item = &'a ClassificationResult>,
{
    let views: Vec<EntryView<'_>> = entries.into_iter().map(EntryView::from).collect();
    if format != OutputFormat::Table {
        return render(&views, format);
    }
    if views.is_empty() {
        return Ok(String::from("(no entries)"));
    }

    let rows = views
        .iter()
        .map(|view| {
            let value = serde_json::to_value(view)?;
            Ok(ENTRY_HEADERS
                .iter()
                .map(|header| value.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>())
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(table::render_entity_table(&ENTRY_HEADERS, &rows, table_options()))
}

pub fn output_entries<'a, I>(entries: I, format: OutputFormat) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a ClassificationResult>,
{
    println!("{}", render_entries(entries, format)?);
    Ok(())
}

/// Print ledger statistics; tables get bar charts and a sparkline.
pub fn output_stats(stats: &StatsView, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = if format == OutputFormat::Table {
        table::render_stats(stats, table_options())
    } else {
        render(stats, format)?
    };
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            return Ok(table::render_entity_table(&["key", "value"], &rows, options));
        }
        Value::Array(items) => items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>(),
        scalar => vec![vec![value_to_cell(&scalar)]],
    };
    Ok(table::render_entity_table(&["value"], &rows, options))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use tone_core::{ClassificationResult, Origin, lexicon};

    use super::{render, render_entries};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    fn entry(text: &str) -> ClassificationResult {
        ClassificationResult::new(text, lexicon::classify(text), Origin::Manual)
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
    fn table_render_for_object_is_tabular() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("id"));
    }

    #[test]
    fn entry_table_uses_fixed_column_order() {
        let entries = [entry("great day"), entry("awful day")];
        let out = render_entries(&entries, OutputFormat::Table).expect("table render");
        let columns: Vec<&str> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(columns, super::ENTRY_HEADERS);
        assert!(out.lines().nth(2).unwrap().starts_with("POSITIVE"));
    }

    #[test]
    fn entry_json_is_an_array() {
        let entries = [entry("great day")];
        let out = render_entries(&entries, OutputFormat::Json).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["sentiment"], "POSITIVE");
        assert_eq!(parsed[0]["provider"], "local");
    }

    #[test]
    fn empty_entry_table_has_placeholder() {
        let none: [ClassificationResult; 0] = [];
        let out = render_entries(&none, OutputFormat::Table).expect("table render");
        assert_eq!(out, "(no entries)");
    }
}
