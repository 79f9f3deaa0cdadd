use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// Amortization schedules get special treatment: the `entries` array is
/// rendered as a month-by-month table and the scalar fields as a summary.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_scalar_table(value);
            }
        }
        Value::Array(arr) => print_rows_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            // Schedule-style results: entries table first, then the summary.
            if let Some(Value::Array(entries)) = res_map.get("entries") {
                print_rows_table(entries);
                let scalars: Vec<(&String, &Value)> = res_map
                    .iter()
                    .filter(|(k, _)| k.as_str() != "entries")
                    .collect();
                if !scalars.is_empty() {
                    println!();
                    let mut builder = Builder::default();
                    builder.push_record(["Field", "Value"]);
                    for (key, val) in scalars {
                        builder.push_record([key.as_str(), &format_value(val)]);
                    }
                    println!("{}", Table::from(builder));
                }
            } else {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in res_map {
                    builder.push_record([key.as_str(), &format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }
        }
        _ => print_scalar_table(&Value::Object(envelope.clone())),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_scalar_table(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_rows_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
