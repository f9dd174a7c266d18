//! List filters: case-insensitive name match and numeric age bounds.

use crate::config::Record;
use serde::Deserialize;
use serde_json::Value;

/// Query parameters understood by the list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "_embed")]
    pub embed: Option<String>,
    pub name: Option<String>,
    pub age_gte: Option<String>,
    pub age_lte: Option<String>,
}

/// Apply every present filter in turn. Keeps the input order.
pub fn filter_records<'a>(records: &'a [Record], query: &ListQuery) -> Vec<&'a Record> {
    let mut out: Vec<&Record> = records.iter().collect();

    if let Some(name) = non_empty(&query.name) {
        let wanted = name.to_lowercase();
        out.retain(|r| {
            r.get("name")
                .and_then(Value::as_str)
                .is_some_and(|n| n.to_lowercase() == wanted)
        });
    }

    if let Some(raw) = non_empty(&query.age_gte) {
        let bound = parse_int(raw);
        out.retain(|r| matches!((age_of(r), bound), (Some(age), Some(b)) if age >= b));
    }

    if let Some(raw) = non_empty(&query.age_lte) {
        let bound = parse_int(raw);
        out.retain(|r| matches!((age_of(r), bound), (Some(age), Some(b)) if age <= b));
    }

    out
}

fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

fn age_of(record: &Record) -> Option<f64> {
    match record.get("age")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Lenient integer parse: leading whitespace, optional sign, optional `0x`,
/// then as many digits as are there. `None` when no digit leads the input.
pub fn parse_int(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: Option<f64> = None;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(d)),
            None => break,
        }
    }
    value.map(|v| if negative { -v } else { v })
}
