//! Signal names and the groups they belong to

pub const WEEKLY_MACD: &str = "Weekly MACD";
pub const WEEKLY_MA_CROSS: &str = "8/21 Weekly MA";
pub const WEEKLY_EMA_SLOPE: &str = "8W EMA Slope";
pub const CUM_AD_VS_EMA: &str = "Cum A/D vs 89-EMA";
pub const NHNL_VS_MA: &str = "NHNL Cum vs 10-MA";
pub const NYSI_SLOPE: &str = "NYSI Slope";
pub const VIX_REGIME: &str = "VIX Regime";
pub const RSP_SPY_BREADTH: &str = "RSP/SPY Breadth";

/// Every snapshot carries exactly these signals, in this order.
pub const SIGNAL_NAMES: [&str; 8] = [
    WEEKLY_MACD,
    WEEKLY_MA_CROSS,
    WEEKLY_EMA_SLOPE,
    CUM_AD_VS_EMA,
    NHNL_VS_MA,
    NYSI_SLOPE,
    VIX_REGIME,
    RSP_SPY_BREADTH,
];

pub const BREADTH_UNAVAILABLE: &str = "Breadth unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalCategory {
    /// Weekly price trend of the index
    Trend,
    /// Advance/decline and new high/low statistics
    Breadth,
    Volatility,
    /// Equal-weight proxy against the cap-weighted index
    Participation,
}

impl SignalCategory {
    pub fn of(name: &str) -> Option<Self> {
        match name {
            WEEKLY_MACD | WEEKLY_MA_CROSS | WEEKLY_EMA_SLOPE => Some(Self::Trend),
            CUM_AD_VS_EMA | NHNL_VS_MA | NYSI_SLOPE => Some(Self::Breadth),
            VIX_REGIME => Some(Self::Volatility),
            RSP_SPY_BREADTH => Some(Self::Participation),
            _ => None,
        }
    }
}
