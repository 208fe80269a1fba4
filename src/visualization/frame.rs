//! Chart-space to screen-space mapping
//!
//! Chart points are `(t, value)` pairs in simulation units. A [`PlotFrame`]
//! maps them affinely onto an axis-aligned screen rectangle so the data
//! range fills the rectangle exactly.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Fraction of the span added on each side of a non-flat range
const RANGE_MARGIN: f64 = 0.05;

/// Smallest and largest value, `None` when there are no values
pub fn value_range<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Widen a range for display.
///
/// Non-flat ranges get a 5% margin on each side. Flat ranges (a constant
/// acceleration, a body at rest) are opened up around the value so the line
/// sits in the middle of the chart instead of on a degenerate axis.
pub fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span > 0.0 {
        let m = span * RANGE_MARGIN;
        return (lo - m, hi + m);
    }
    let pad = if lo == 0.0 { 1.0 } else { lo.abs() * RANGE_MARGIN };
    (lo - pad, hi + pad)
}

/// Affine map from a data rectangle onto a screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub data_min: NVec2, // (t_min, value_min)
    pub data_max: NVec2, // (t_max, value_max)
    pub screen_min: NVec2, // bottom-left corner on screen
    pub screen_max: NVec2, // top-right corner on screen
}

impl PlotFrame {
    /// Frame a data range inside a screen rectangle given by its center and size
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), center: NVec2, size: NVec2) -> Self {
        let half = size * 0.5;
        Self {
            data_min: NVec2::new(x_range.0, y_range.0),
            data_max: NVec2::new(x_range.1, y_range.1),
            screen_min: center - half,
            screen_max: center + half,
        }
    }

    /// Map a data point to the screen
    pub fn to_screen(&self, p: NVec2) -> NVec2 {
        let data_span = self.data_max - self.data_min;
        let screen_span = self.screen_max - self.screen_min;
        let rel = (p - self.data_min).component_div(&data_span);
        self.screen_min + rel.component_mul(&screen_span)
    }

    /// Screen corners in drawing order, closed (first == last)
    pub fn outline(&self) -> [NVec2; 5] {
        let (lo, hi) = (self.screen_min, self.screen_max);
        [
            lo,
            NVec2::new(hi.x, lo.y),
            hi,
            NVec2::new(lo.x, hi.y),
            lo,
        ]
    }

    pub fn screen_center(&self) -> NVec2 {
        (self.screen_min + self.screen_max) * 0.5
    }
}
