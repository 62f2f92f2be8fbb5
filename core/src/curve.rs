//! Lorenz-style cumulative curves on the `[0,100] x [0,100]` plane.
//!
//! x = cumulative share of items, y = cumulative share of revenue.

use crate::types::Percent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: Percent,
    pub y: Percent,
}

impl CurvePoint {
    pub const fn new(x: Percent, y: Percent) -> Self {
        Self { x, y }
    }
}

/// Idealized Pareto rule: 20% of items make 70% of revenue, the next 30%
/// make the next 20%, the remaining 50% make the last 10%.
pub const THEORETICAL_CURVE: [CurvePoint; 4] = [
    CurvePoint::new(0.0, 0.0),
    CurvePoint::new(20.0, 70.0),
    CurvePoint::new(50.0, 90.0),
    CurvePoint::new(100.0, 100.0),
];

/// Linear interpolation of `curve` at `x`.
///
/// `curve` must be sorted by x. Outside the known range the nearest end
/// point's y is returned; an empty curve yields `None`.
pub fn interpolate(curve: &[CurvePoint], x: Percent) -> Option<Percent> {
    let first = curve.first()?;
    let last = curve.last()?;
    if x <= first.x {
        return Some(first.y);
    }
    if x >= last.x {
        return Some(last.y);
    }

    curve.windows(2).find_map(|w| {
        let (lo, hi) = (w[0], w[1]);
        if x < lo.x || x > hi.x {
            return None;
        }
        let span = hi.x - lo.x;
        if span == 0.0 {
            return Some(hi.y);
        }
        Some(lo.y + (hi.y - lo.y) * (x - lo.x) / span)
    })
}

/// `reference` evaluated at each x of `points`. Used to shade the area
/// between the actual and reference curves.
pub fn resample(reference: &[CurvePoint], points: &[CurvePoint]) -> Vec<CurvePoint> {
    points
        .iter()
        .filter_map(|p| interpolate(reference, p.x).map(|y| CurvePoint::new(p.x, y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_theoretical_knots() {
        assert_eq!(interpolate(&THEORETICAL_CURVE, 10.0), Some(35.0));
        assert_eq!(interpolate(&THEORETICAL_CURVE, 35.0), Some(80.0));
        assert_eq!(interpolate(&THEORETICAL_CURVE, 75.0), Some(95.0));
    }

    #[test]
    fn knots_map_to_themselves() {
        for p in THEORETICAL_CURVE {
            assert_eq!(interpolate(&THEORETICAL_CURVE, p.x), Some(p.y));
        }
    }

    #[test]
    fn clamps_outside_range_and_handles_empty() {
        assert_eq!(interpolate(&THEORETICAL_CURVE, -5.0), Some(0.0));
        assert_eq!(interpolate(&THEORETICAL_CURVE, 120.0), Some(100.0));
        assert_eq!(interpolate(&[], 50.0), None);
    }
}
