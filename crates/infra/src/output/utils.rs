// crates/infra/src/output/utils.rs
use gapdash_domain::model::Record;

use crate::output::config::RenderConfig;

pub(crate) fn limited<'a>(rows: &'a [Record], config: &RenderConfig) -> &'a [Record] {
    let limit = config.top_n.unwrap_or(rows.len()).min(rows.len());
    &rows[..limit]
}

pub(crate) fn format_ratio(val: u64, total: u64) -> String {
    if total == 0 { "0.0".into() } else { format!("{:.1}", (val as f64) * 100.0 / (total as f64)) }
}

pub(crate) fn truncate_rows<T>(rows: &mut Vec<T>, limit: Option<usize>) {
    if let Some(n) = limit {
        rows.truncate(n);
    }
}

pub(crate) fn safe_key_label(key: &str) -> String {
    key.replace('|', "\\|")
}

pub(crate) fn escape_field(s: &str, sep: char) -> String {
    if sep == ',' && (s.contains(',') || s.contains('"') || s.contains('\n')) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

/// Thousands-separated integer, e.g. 1318683096 -> "1,318,683,096".
pub(crate) fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Compact population for the metric row: billions/millions with two
/// decimals, grouped digits below a million.
pub(crate) fn format_population_compact(value: u64) -> String {
    const BILLION: f64 = 1.0e9;
    const MILLION: f64 = 1.0e6;
    let v = value as f64;
    if v >= BILLION {
        format!("{:.2} B", v / BILLION)
    } else if v >= MILLION {
        format!("{:.2} M", v / MILLION)
    } else {
        group_digits(value)
    }
}

/// Dollar amount with grouped integer part, e.g. "$31,656.07".
pub(crate) fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    format!("${}.{:02}", group_digits(cents / 100), cents % 100)
}
