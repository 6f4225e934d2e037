//! Daily to weekly resampling

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::models::Bar;

/// Collapse daily bars into one bar per ISO week.
///
/// Each week keeps its latest-dated bar (the last trading day of that week).
/// Output is ascending by date.
pub fn weekly_series(prices: &[Bar]) -> Vec<Bar> {
    let mut buckets: BTreeMap<(i32, u32), Bar> = BTreeMap::new();

    for bar in prices {
        let week = bar.date.iso_week();
        buckets
            .entry((week.year(), week.week()))
            .and_modify(|existing| {
                if bar.date > existing.date {
                    *existing = *bar;
                }
            })
            .or_insert(*bar);
    }

    // ISO (year, week) keys already iterate in calendar order
    buckets.into_values().collect()
}

/// Closing values of a bar series
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
