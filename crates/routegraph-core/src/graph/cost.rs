//! Congestion cost model
//!
//! Maps a route's base cost to the cost charged during a path query. The
//! multiplier depends only on the hour of day and is applied once per query
//! to every traversed route:
//!
//! | hours              | band       | multiplier |
//! |--------------------|------------|------------|
//! | 07–09, 16–18       | `peak`     | 1.35       |
//! | 22–23, 00–05       | `off-peak` | 0.85       |
//! | all other hours    | `neutral`  | 1.0        |

use std::fmt;

use serde::Serialize;

use crate::error::PathError;

pub const PEAK_MULTIPLIER: f64 = 1.35;
pub const OFF_PEAK_MULTIPLIER: f64 = 0.85;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Congestion band of an hour of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CongestionBand {
    Peak,
    OffPeak,
    Neutral,
}

impl CongestionBand {
    pub fn multiplier(&self) -> f64 {
        match self {
            CongestionBand::Peak => PEAK_MULTIPLIER,
            CongestionBand::OffPeak => OFF_PEAK_MULTIPLIER,
            CongestionBand::Neutral => NEUTRAL_MULTIPLIER,
        }
    }
}

impl fmt::Display for CongestionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CongestionBand::Peak => write!(f, "peak"),
            CongestionBand::OffPeak => write!(f, "off-peak"),
            CongestionBand::Neutral => write!(f, "neutral"),
        }
    }
}

/// An hour of day in 0..=23
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub fn new(hour: u8) -> Result<Self, PathError> {
        if hour > 23 {
            return Err(PathError::InvalidHour { hour });
        }
        Ok(HourOfDay(hour))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> CongestionBand {
        match self.0 {
            7..=9 | 16..=18 => CongestionBand::Peak,
            0..=5 | 22..=23 => CongestionBand::OffPeak,
            _ => CongestionBand::Neutral,
        }
    }
}

/// Cost context shared by every route of one path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostContext {
    /// No congestion: routes cost their base cost
    #[default]
    BaseCosts,
    /// Congestion for the given hour
    TimeOfDay(HourOfDay),
}

impl CostContext {
    /// Context for an optional hour; `None` means base costs
    pub fn from_hour(hour: Option<u8>) -> Result<Self, PathError> {
        match hour {
            Some(hour) => Ok(CostContext::TimeOfDay(HourOfDay::new(hour)?)),
            None => Ok(CostContext::BaseCosts),
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            CostContext::BaseCosts => NEUTRAL_MULTIPLIER,
            CostContext::TimeOfDay(hour) => hour.band().multiplier(),
        }
    }

    pub fn hour(&self) -> Option<HourOfDay> {
        match self {
            CostContext::BaseCosts => None,
            CostContext::TimeOfDay(hour) => Some(*hour),
        }
    }
}

/// Cost charged for traversing a route with `base_cost` under `context`
pub fn effective_cost(base_cost: f64, context: &CostContext) -> f64 {
    base_cost * context.multiplier()
}
