//! Ratio policy: the fixed mapping from a classified region to a target triple.
//!
//! The triple is always replaced wholesale. There is no partial update path,
//! so every observed value sums to 1.

#[cfg(test)]
#[path = "ratio_test.rs"]
mod ratio_test;

use serde::{Deserialize, Serialize};

use crate::regions::RegionId;

const THIRD: f64 = 1.0 / 3.0;
const HALF: f64 = 0.5;
const MAJOR: f64 = 2.0 / 3.0;
const MINOR: f64 = 1.0 / 6.0;

/// One of the three weighted axes, in base-triangle edge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Edge 0 (vertex 0 → vertex 1).
    Economics,
    /// Edge 1 (vertex 1 → vertex 2).
    Reliability,
    /// Edge 2 (vertex 2 → vertex 0).
    Sustainability,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Economics, Axis::Reliability, Axis::Sustainability];

    /// Index of the triangle edge this axis labels.
    #[must_use]
    pub fn edge_index(self) -> usize {
        match self {
            Self::Economics => 0,
            Self::Reliability => 1,
            Self::Sustainability => 2,
        }
    }

    /// Display label drawn along the edge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Economics => "ECONOMICS",
            Self::Reliability => "RELIABILITY",
            Self::Sustainability => "SUSTAINABILITY",
        }
    }
}

/// Three-way weighting. Each component lies in `[0, 1]` and the three sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratios {
    pub economics: f64,
    pub reliability: f64,
    pub sustainability: f64,
}

impl Default for Ratios {
    fn default() -> Self {
        Self::EVEN
    }
}

impl Ratios {
    /// The initial, evenly balanced triple.
    pub const EVEN: Ratios = Ratios::raw(THIRD, THIRD, THIRD);

    const fn raw(economics: f64, reliability: f64, sustainability: f64) -> Self {
        Self { economics, reliability, sustainability }
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Economics => self.economics,
            Axis::Reliability => self.reliability,
            Axis::Sustainability => self.sustainability,
        }
    }

    /// Components in axis order: economics, reliability, sustainability.
    #[must_use]
    pub fn as_array(&self) -> [f64; 3] {
        [self.economics, self.reliability, self.sustainability]
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.economics + self.reliability + self.sustainability
    }
}

/// Target triple for a region.
///
/// Tips split evenly between the two axes whose edges meet at that vertex,
/// inner edges lean toward their own axis, outer edges are pure.
#[must_use]
pub fn ratio_for(region: RegionId) -> Ratios {
    match region {
        RegionId::Center => Ratios::EVEN,
        RegionId::Tip1 => Ratios::raw(HALF, 0.0, HALF),
        RegionId::Tip2 => Ratios::raw(HALF, HALF, 0.0),
        RegionId::Tip3 => Ratios::raw(0.0, HALF, HALF),
        RegionId::Edge1 => Ratios::raw(MAJOR, MINOR, MINOR),
        RegionId::Edge2 => Ratios::raw(MINOR, MAJOR, MINOR),
        RegionId::Edge3 => Ratios::raw(MINOR, MINOR, MAJOR),
        RegionId::Outer1 => Ratios::raw(1.0, 0.0, 0.0),
        RegionId::Outer2 => Ratios::raw(0.0, 1.0, 0.0),
        RegionId::Outer3 => Ratios::raw(0.0, 0.0, 1.0),
    }
}

/// Format a `0..=1` amount as an en-US percentage, e.g. `0.3333 → "33%"`.
///
/// Rounds half away from zero.
#[must_use]
pub fn format_percent(amount: f64, digits: u8) -> String {
    let factor = 10f64.powi(i32::from(digits));
    // Adding +0.0 turns a rounded -0.0 into 0.0.
    let rounded = (amount * 100.0 * factor).round() / factor + 0.0;
    format!("{rounded:.prec$}%", prec = usize::from(digits))
}
