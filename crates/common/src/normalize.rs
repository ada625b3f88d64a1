//! Value coercions applied between upstream parsing and field mapping.

use chrono::NaiveDate;
use serde_json::Value;

/// Parses an SAP decimal field.
///
/// Locale-invariant base-10 parsing. Missing, empty, non-finite or
/// unparseable input yields `0.0`. SAP's trailing-minus notation
/// (`"12.50-"`) is read as a negative value; the legacy Node portals read
/// the same string as `12.5`, so totals on negative documents differ from theirs.
pub fn parse_numeric(raw: Option<&str>) -> f64 {
    let Some((digits, negative)) = split_sign(raw) else {
        return 0.0;
    };
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if negative {
                -value
            } else {
                value
            }
        }
        _ => 0.0,
    }
}

/// Parses an SAP counter field as an integer.
///
/// Decimal input is truncated toward zero; anything unparseable or out of
/// `i64` range after applying the sign yields `0`.
pub fn parse_integer(raw: Option<&str>) -> i64 {
    let Some((digits, negative)) = split_sign(raw) else {
        return 0;
    };
    let value = match digits.parse::<i64>() {
        Ok(value) => value,
        Err(_) => match digits.parse::<f64>() {
            Ok(value) if value.is_finite() => value.trunc() as i64,
            _ => return 0,
        },
    };
    if negative {
        value.checked_neg().unwrap_or(0)
    } else {
        value
    }
}

fn split_sign(raw: Option<&str>) -> Option<(&str, bool)> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.strip_suffix('-') {
        Some(rest) => Some((rest.trim_end(), true)),
        None => Some((trimmed, false)),
    }
}

/// Coerces an optional JSON value into a list of rows.
///
/// `null`/absent becomes empty, an array is returned element-wise, and any
/// other value is treated as a single row.
pub fn as_array(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Formats an SAP `YYYYMMDD` date as `YYYY-MM-DD`.
///
/// Empty input and the SAP null date `00000000` become `""`. Values that are
/// not a valid calendar date are returned unchanged.
pub fn format_sap_date(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() || trimmed == "00000000" {
        return String::new();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y%m%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => trimmed.to_string(),
    }
}
