use anyhow::Result;
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// Rows pulled out of a response: column names plus one cell per column per row.
#[derive(Debug, PartialEq)]
struct Rows {
    headers: Vec<String>,
    cells: Vec<Vec<String>>,
}

// -- Row extraction --

/// Finds the tabular part of a response document.
///
/// Two shapes occur: a field holding an array of objects (`to` on
/// conversions, `currencies`), and a field holding an object of such arrays
/// keyed by currency (`to` on period and monthly lookups). The latter gets a
/// leading `currency` column. A document with neither has no rows.
fn extract_rows(doc: &Value) -> Option<Rows> {
    let obj = doc.as_object()?;
    for value in obj.values() {
        if let Some(records) = object_array(value) {
            return Some(build_rows(records.into_iter().map(|r| (None, r))));
        }
    }
    for value in obj.values() {
        let Some(groups) = value.as_object() else {
            continue;
        };
        let mut records = Vec::new();
        for (currency, group) in groups {
            match object_array(group) {
                Some(items) => {
                    records.extend(items.into_iter().map(|r| (Some(currency.as_str()), r)))
                }
                None => {
                    records.clear();
                    break;
                }
            }
        }
        if !records.is_empty() {
            return Some(build_rows(records.into_iter()));
        }
    }
    None
}

fn object_array(value: &Value) -> Option<Vec<&Map<String, Value>>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(|item| item.as_object()).collect()
}

fn build_rows<'a, I>(records: I) -> Rows
where
    I: Iterator<Item = (Option<&'a str>, &'a Map<String, Value>)>,
{
    let records: Vec<_> = records.collect();
    let mut headers: Vec<String> = Vec::new();
    if records.iter().any(|(group, _)| group.is_some()) {
        headers.push("currency".to_string());
    }
    for (_, record) in records.iter() {
        for key in record.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let cells = records
        .iter()
        .map(|(group, record)| {
            headers
                .iter()
                .map(|header| match (header.as_str(), group) {
                    ("currency", Some(group)) if !record.contains_key("currency") => {
                        group.to_string()
                    }
                    _ => record.get(header).map(format_cell).unwrap_or_default(),
                })
                .collect()
        })
        .collect();

    Rows { headers, cells }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn build_table(rows: &Rows) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(rows.headers.clone());
    for row in rows.cells.iter() {
        builder.push_record(row.clone());
    }
    builder.build()
}

// -- Output --

/// Prints a response in the requested format. Documents without row data
/// are printed as JSON whatever the format.
pub fn print_response(doc: &Value, format: &OutputFormat) -> Result<()> {
    match (format, extract_rows(doc)) {
        (OutputFormat::Table, Some(rows)) => {
            print_summary(doc);
            println!("{}", build_table(&rows));
        }
        (OutputFormat::Markdown, Some(rows)) => {
            let mut table = build_table(&rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        (OutputFormat::Csv, Some(rows)) => print_csv(&rows)?,
        _ => print_json(doc),
    }
    Ok(())
}

/// Scalar header fields (`from`, `amount`, `timestamp`, ...) go to stderr
/// so the table on stdout stays clean.
fn print_summary(doc: &Value) {
    let Some(obj) = doc.as_object() else {
        return;
    };
    let summary: Vec<String> = obj
        .iter()
        .filter(|(key, value)| {
            !matches!(value, Value::Array(_) | Value::Object(_))
                && !matches!(key.as_str(), "terms" | "privacy")
        })
        .map(|(key, value)| format!("{}: {}", key, format_cell(value)))
        .collect();
    if !summary.is_empty() {
        eprintln!("{}", summary.join("  "));
    }
}

fn print_csv(rows: &Rows) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(&rows.headers)?;
    for row in rows.cells.iter() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json(data: &Value) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load_fixture(name: &str) -> Value {
        let raw = match name {
            "currencies" => include_str!("../tests/fixtures/currencies.json"),
            "convert_from" => include_str!("../tests/fixtures/convert_from.json"),
            "historic_rate_period" => {
                include_str!("../tests/fixtures/historic_rate_period.json")
            }
            "monthly_average" => include_str!("../tests/fixtures/monthly_average.json"),
            "account_info" => include_str!("../tests/fixtures/account_info.json"),
            other => panic!("unknown fixture {}", other),
        };
        serde_json::from_str(raw).unwrap()
    }

    fn cell<'a>(rows: &'a Rows, row: usize, header: &str) -> &'a str {
        let col = rows
            .headers
            .iter()
            .position(|h| h == header)
            .unwrap_or_else(|| panic!("no column {}", header));
        rows.cells[row][col].as_str()
    }

    fn sorted_headers(rows: &Rows) -> Vec<&str> {
        let mut headers: Vec<&str> = rows.headers.iter().map(|h| h.as_str()).collect();
        headers.sort();
        headers
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_rows_from_currencies() {
        let rows = extract_rows(&load_fixture("currencies")).unwrap();
        assert_eq!(sorted_headers(&rows), vec!["currency_name", "is_obsolete", "iso"]);
        assert_eq!(rows.cells.len(), 3);
        assert_eq!(cell(&rows, 1, "iso"), "EUR");
        assert_eq!(cell(&rows, 1, "currency_name"), "Euro");
        assert_eq!(cell(&rows, 1, "is_obsolete"), "false");
    }

    #[test]
    fn test_rows_from_conversion() {
        let rows = extract_rows(&load_fixture("convert_from")).unwrap();
        assert_eq!(sorted_headers(&rows), vec!["mid", "quotecurrency"]);
        assert_eq!(rows.cells.len(), 1);
        assert_eq!(cell(&rows, 0, "quotecurrency"), "CAD");
        assert_eq!(cell(&rows, 0, "mid"), "82.0521537536");
    }

    #[test]
    fn test_rows_from_grouped_period() {
        let rows = extract_rows(&load_fixture("historic_rate_period")).unwrap();
        assert_eq!(rows.headers[0], "currency");
        assert_eq!(sorted_headers(&rows), vec!["currency", "mid", "timestamp"]);
        assert_eq!(rows.cells.len(), 2);
        assert_eq!(cell(&rows, 0, "currency"), "RUB");
        assert_eq!(cell(&rows, 1, "timestamp"), "2017-09-29T12:00:00Z");
    }

    #[test]
    fn test_rows_from_monthly_average() {
        let rows = extract_rows(&load_fixture("monthly_average")).unwrap();
        assert_eq!(rows.headers[0], "currency");
        assert_eq!(cell(&rows, 0, "currency"), "EUR");
        assert_eq!(cell(&rows, 0, "month"), "5");
    }

    #[test]
    fn test_no_rows_in_account_info() {
        assert!(extract_rows(&load_fixture("account_info")).is_none());
        assert!(extract_rows(&json!([1, 2, 3])).is_none());
        assert!(extract_rows(&json!({"to": []})).is_none());
    }

    #[test]
    fn test_ragged_records_fill_blanks() {
        let doc = json!({"to": [{"a": 1}, {"b": "x", "a": null}]});
        let rows = extract_rows(&doc).unwrap();
        assert_eq!(sorted_headers(&rows), vec!["a", "b"]);
        assert_eq!(cell(&rows, 0, "a"), "1");
        assert_eq!(cell(&rows, 0, "b"), "");
        assert_eq!(cell(&rows, 1, "a"), "");
        assert_eq!(cell(&rows, 1, "b"), "x");
    }

    #[test]
    fn test_table_renders_headers() {
        let rows = extract_rows(&load_fixture("convert_from")).unwrap();
        let rendered = build_table(&rows).to_string();
        assert!(rendered.contains("quotecurrency"));
        assert!(rendered.contains("CAD"));
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!(null)), "");
        assert_eq!(format_cell(&json!("EUR")), "EUR");
        assert_eq!(format_cell(&json!(true)), "true");
        assert_eq!(format_cell(&json!(1.5)), "1.5");
        assert_eq!(format_cell(&json!([1, 2])), "[1,2]");
    }
}
