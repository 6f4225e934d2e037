use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's closing value for a priced instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Daily volatility index level (VIX), kept apart from `Bar` since it is not a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl VolatilityPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Daily market breadth statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreadthPoint {
    pub date: NaiveDate,
    pub advances: f64,
    pub declines: f64,
    pub new_highs: f64,
    pub new_lows: f64,
}

impl BreadthPoint {
    pub fn new(
        date: NaiveDate,
        advances: f64,
        declines: f64,
        new_highs: f64,
        new_lows: f64,
    ) -> Self {
        Self {
            date,
            advances,
            declines,
            new_highs,
            new_lows,
        }
    }

    /// Advances minus declines
    pub fn net_advances(&self) -> f64 {
        self.advances - self.declines
    }

    /// New highs minus new lows
    pub fn net_new_highs(&self) -> f64 {
        self.new_highs - self.new_lows
    }
}

/// Anything that sits on the daily calendar. Lets the CSV loaders sort and
/// dedupe every series type the same way.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Bar {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for VolatilityPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for BreadthPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The four input series consumed by the snapshot engine.
///
/// All series must be sorted ascending by date with no duplicate dates.
/// `breadth` is optional; `None` and an empty vector are treated the same.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Equity index closes (SPY)
    pub index: Vec<Bar>,
    /// Equal-weight proxy closes (RSP)
    pub proxy: Vec<Bar>,
    pub volatility: Vec<VolatilityPoint>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breadth: Option<Vec<BreadthPoint>>,
}

impl MarketInputs {
    pub fn new(index: Vec<Bar>, proxy: Vec<Bar>, volatility: Vec<VolatilityPoint>) -> Self {
        Self {
            index,
            proxy,
            volatility,
            breadth: None,
        }
    }

    pub fn with_breadth(mut self, breadth: Vec<BreadthPoint>) -> Self {
        self.breadth = Some(breadth);
        self
    }

    /// Breadth series if present and non-empty
    pub fn breadth(&self) -> Option<&[BreadthPoint]> {
        self.breadth.as_deref().filter(|b| !b.is_empty())
    }
}
