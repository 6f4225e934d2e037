//! Date-aligned ratio between two price series

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::Bar;

/// Divide `numerator` by `denominator` on every date both series share.
///
/// Dates present only in `numerator` are dropped, never interpolated.
/// A zero close in `denominator` yields an infinite or NaN ratio; that is
/// left to the data source.
pub fn ratio_series(numerator: &[Bar], denominator: &[Bar]) -> Vec<Bar> {
    let by_date: HashMap<NaiveDate, f64> =
        denominator.iter().map(|b| (b.date, b.close)).collect();

    let mut ratio: Vec<Bar> = numerator
        .iter()
        .filter_map(|bar| {
            by_date
                .get(&bar.date)
                .map(|close| Bar::new(bar.date, bar.close / close))
        })
        .collect();

    ratio.sort_by_key(|b| b.date);
    ratio
}
