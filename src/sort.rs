use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::calculator::parse_float_prefix;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("valid regex"));

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%m/%d/%Y", "%d %b %Y"];

/// how a column's cell text is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKind {
    #[default]
    String,
    Number,
    Date,
}

/// sort body rows ascending by one column, in place
///
/// Stable. Cells are trimmed before comparison and a missing cell counts as
/// empty. Number and date cells that cannot be parsed sort after every
/// parsed cell and keep their relative order. Slash dates read as
/// `MM/DD/YYYY`.
pub fn sort_rows(rows: &mut [Vec<String>], column: usize, kind: SortKind) {
    rows.sort_by(|a, b| {
        let a = cell(a, column);
        let b = cell(b, column);
        match kind {
            SortKind::String => compare_text(a, b),
            SortKind::Number => compare_keys(parse_number(a), parse_number(b)),
            SortKind::Date => compare_keys(parse_date(a), parse_date(b)),
        }
    });
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(|c| c.trim()).unwrap_or("")
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn compare_keys<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// strip everything but ASCII digits, `.` and `-`, then read the leading number
///
/// `"₹1,234.50"` reads as 1234.50 and `"1 (3-5)"` as 13.
pub fn parse_number(text: &str) -> Option<Decimal> {
    parse_float_prefix(&NON_NUMERIC.replace_all(text, ""))
}

/// parse the date renderings used in the loan tables
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    let text = text.replace(". ", " ");
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
}
