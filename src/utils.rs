use serde_json::Value;

/// Render a JSON number as a dollar amount with thousands separators
/// ("$60,000.00"). Missing or non-numeric values render as "N/A".
pub fn format_usd(value: Option<&Value>) -> String {
    match value.and_then(Value::as_f64) {
        Some(amount) => format!("${}", group_thousands(amount)),
        None => "N/A".to_string(),
    }
}

fn group_thousands(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

/// Uppercase the first character ("bitcoin" -> "Bitcoin").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
