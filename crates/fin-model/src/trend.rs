//! Trend classification types shared by trend analysis and forecast summaries.

use serde::{Deserialize, Serialize};

/// Percent change beyond which a trend counts as strong.
pub const STRONG_CHANGE_PCT: f64 = 5.0;

/// Direction of a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    SlightlyIncreasing,
    Stable,
    SlightlyDecreasing,
    Decreasing,
    /// Not enough observations to tell.
    Unknown,
}

impl TrendDirection {
    /// Classifies a percent change with ±5% as the strong/slight boundary.
    pub fn from_change_pct(change_pct: f64) -> Self {
        if change_pct > STRONG_CHANGE_PCT {
            Self::Increasing
        } else if change_pct > 0.0 {
            Self::SlightlyIncreasing
        } else if change_pct < -STRONG_CHANGE_PCT {
            Self::Decreasing
        } else if change_pct < 0.0 {
            Self::SlightlyDecreasing
        } else {
            Self::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::SlightlyIncreasing => "Slightly Increasing",
            Self::Stable => "Stable",
            Self::SlightlyDecreasing => "Slightly Decreasing",
            Self::Decreasing => "Decreasing",
            Self::Unknown => "Unknown",
        }
    }
}

/// Coefficient-of-variation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityLevel {
    Low,
    Moderate,
    High,
}

impl VolatilityLevel {
    /// Above 0.2 is high, above 0.1 moderate.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.2 {
            Self::High
        } else if ratio > 0.1 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low volatility",
            Self::Moderate => "Moderate volatility",
            Self::High => "High volatility",
        }
    }
}

/// First-to-last change analysis of a date/value series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub trend: TrendDirection,
    pub change_pct: f64,
    /// Sample std over mean; only with more than two observations.
    pub volatility: Option<f64>,
    pub volatility_level: Option<VolatilityLevel>,
    pub description: String,
    pub observations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_thresholds() {
        assert_eq!(TrendDirection::from_change_pct(5.1), TrendDirection::Increasing);
        assert_eq!(TrendDirection::from_change_pct(5.0), TrendDirection::SlightlyIncreasing);
        assert_eq!(TrendDirection::from_change_pct(0.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_change_pct(-0.1), TrendDirection::SlightlyDecreasing);
        assert_eq!(TrendDirection::from_change_pct(-7.0), TrendDirection::Decreasing);
    }

    #[test]
    fn volatility_bands() {
        assert_eq!(VolatilityLevel::from_ratio(0.25), VolatilityLevel::High);
        assert_eq!(VolatilityLevel::from_ratio(0.15), VolatilityLevel::Moderate);
        assert_eq!(VolatilityLevel::from_ratio(0.1), VolatilityLevel::Low);
    }
}
