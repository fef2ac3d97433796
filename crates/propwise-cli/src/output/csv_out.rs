use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// A scenario analysis becomes one row per ranked property; anything else
/// becomes two-column field/value rows with nested sections flattened one
/// level into dotted names.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(recommendations)) = map.get("recommendations") {
                write_ranking_csv(&mut wtr, recommendations);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    match val {
                        Value::Object(inner) => {
                            for (inner_key, inner_val) in inner {
                                let _ = wtr.write_record([
                                    format!("{key}.{inner_key}").as_str(),
                                    &format_csv_value(inner_val),
                                ]);
                            }
                        }
                        _ => {
                            let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                        }
                    }
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_ranking_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, recommendations: &[Value]) {
    let _ = wtr.write_record([
        "address",
        "purchase_price",
        "total_out_of_pocket",
        "coc_return",
        "monthly_cash_flow",
        "risk_level",
        "recommendation",
    ]);

    for item in recommendations {
        let get = |path: &[&str]| -> String {
            let mut current = item;
            for key in path {
                match current.get(key) {
                    Some(v) => current = v,
                    None => return String::new(),
                }
            }
            format_csv_value(current)
        };

        let _ = wtr.write_record([
            get(&["property", "address"]),
            get(&["property", "purchase_price"]),
            get(&["mortgage", "total_out_of_pocket"]),
            get(&["coc_return"]),
            get(&["cash_flow", "monthly_cash_flow"]),
            get(&["risk_assessment", "risk_level"]),
            get(&["recommendation"]),
        ]);
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Extract headers from first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
