//! CSV parsing for the price, VIX and breadth files.
//!
//! Column names are matched case-insensitively. Rows with an unparsable date
//! or value are skipped. Output is sorted ascending by date with duplicate
//! dates collapsed (the last row wins), which is the ordering the snapshot
//! engine expects.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::{Bar, BreadthPoint, Dated, VolatilityPoint};
use crate::services::error::ProviderError;

const DATE_COLUMNS: [&str; 2] = ["date", "observation_date"];
const VIX_VALUE_COLUMNS: [&str; 4] = ["vix", "vixcls", "close", "value"];

/// Daily OHLCV file (Stooq layout or anything with `date` and `close`)
pub fn parse_prices(content: &str) -> Result<Vec<Bar>, ProviderError> {
    let table = Table::read(content)?;
    let date = table.require(&["date"])?;
    let close = table.require(&["close"])?;

    let rows = table
        .rows
        .iter()
        .filter_map(|r| Some(Bar::new(parse_date(r.get(date)?)?, parse_number(r.get(close)?)?)))
        .collect();
    Ok(normalize(rows))
}

/// VIX levels; accepts FRED's `observation_date,VIXCLS` layout. FRED marks
/// missing sessions with `.`, which are dropped.
pub fn parse_vix(content: &str) -> Result<Vec<VolatilityPoint>, ProviderError> {
    let table = Table::read(content)?;
    let date = table.require(&DATE_COLUMNS)?;
    let value = table.require(&VIX_VALUE_COLUMNS)?;

    let rows = table
        .rows
        .iter()
        .filter_map(|r| {
            Some(VolatilityPoint::new(
                parse_date(r.get(date)?)?,
                parse_number(r.get(value)?)?,
            ))
        })
        .collect();
    Ok(normalize(rows))
}

/// `date,advances,declines,new_highs,new_lows`
pub fn parse_breadth(content: &str) -> Result<Vec<BreadthPoint>, ProviderError> {
    let table = Table::read(content)?;
    let missing: Vec<String> = ["date", "advances", "declines", "new_highs", "new_lows"]
        .into_iter()
        .filter(|c| table.column(&[*c]).is_none())
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ProviderError::MissingColumns { columns: missing });
    }

    let date = table.require(&["date"])?;
    let advances = table.require(&["advances"])?;
    let declines = table.require(&["declines"])?;
    let new_highs = table.require(&["new_highs"])?;
    let new_lows = table.require(&["new_lows"])?;

    let number = |r: &StringRecord, idx: usize| r.get(idx).and_then(parse_number);
    let rows = table
        .rows
        .iter()
        .filter_map(|r| {
            Some(BreadthPoint::new(
                parse_date(r.get(date)?)?,
                number(r, advances)?,
                number(r, declines)?,
                number(r, new_highs)?,
                number(r, new_lows)?,
            ))
        })
        .collect();
    Ok(normalize(rows))
}

/// Sort ascending by date and keep the last row for each date.
pub fn normalize<T: Dated>(mut rows: Vec<T>) -> Vec<T> {
    rows.sort_by_key(|r| r.date());

    let mut out: Vec<T> = Vec::with_capacity(rows.len());
    for row in rows {
        match out.last_mut() {
            Some(prev) if prev.date() == row.date() => *prev = row,
            _ => out.push(row),
        }
    }
    out
}

/// `YYYY-MM-DD`, tolerating a trailing time component
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

struct Table {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    fn read(content: &str) -> Result<Self, ProviderError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?);
        }

        Ok(Self { headers, rows })
    }

    /// Index of the first header matching any of `names`
    fn column(&self, names: &[&str]) -> Option<usize> {
        names
            .iter()
            .find_map(|name| self.headers.iter().position(|h| h == name))
    }

    fn require(&self, names: &[&str]) -> Result<usize, ProviderError> {
        self.column(names).ok_or_else(|| ProviderError::MissingColumns {
            columns: vec![names.join("|")],
        })
    }
}
