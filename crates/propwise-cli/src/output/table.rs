use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// Nested sections (mortgage, cash flow, scenarios, ...) are flattened one
/// level into dotted field names; deeper structures fall back to JSON.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            print_object_table(map);

            // A scenario analysis carries its ranked results as an array;
            // give them their own table below the summary fields.
            if let Some(Value::Array(recommendations)) = map.get("recommendations") {
                if !recommendations.is_empty() {
                    println!();
                    print_ranking_table(recommendations);
                }
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_object_table(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);

    for (key, val) in map {
        match val {
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    builder.push_record([
                        format!("{key}.{inner_key}").as_str(),
                        &format_value(inner_val),
                    ]);
                }
            }
            Value::Array(_) if key == "recommendations" => {
                // Rendered separately
            }
            _ => {
                builder.push_record([key.as_str(), &format_value(val)]);
            }
        }
    }

    let table = Table::from(builder);
    println!("{}", table);
}

/// Condensed one-row-per-property view of ranked underwriting results.
fn print_ranking_table(recommendations: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(["Address", "Price", "OOP", "CoC %", "Cash Flow", "Recommendation"]);

    for item in recommendations {
        let get = |path: &[&str]| -> String {
            let mut current = item;
            for key in path {
                match current.get(key) {
                    Some(v) => current = v,
                    None => return String::new(),
                }
            }
            format_value(current)
        };

        builder.push_record([
            get(&["property", "address"]),
            get(&["property", "purchase_price"]),
            get(&["mortgage", "total_out_of_pocket"]),
            get(&["coc_return"]),
            get(&["cash_flow", "monthly_cash_flow"]),
            get(&["recommendation"]),
        ]);
    }

    let table = Table::from(builder);
    println!("{}", table);
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from first object for headers
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

        let table = Table::from(builder);
        println!("{}", table);
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
