// File: crates/scatter-core/src/axis.rs
// Summary: Axis model: label text plus tick values/positions derived from a channel scale.

use crate::channel::Attribute;
use crate::grid::format_integer;
use crate::scale::LinearScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Ticks hang below a horizontal line at the bottom of the plot.
    Bottom,
    /// Ticks extend left of a vertical line at the left of the plot.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Offset along the axis, in plot coordinates.
    pub position: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub label: String,
    pub ticks: Vec<Tick>,
    /// Pixel extent covered by the axis line.
    pub range: (f64, f64),
}

impl Axis {
    pub fn new(orient: AxisOrient, attribute: Attribute, scale: &LinearScale, tick_count: usize) -> Self {
        let mut axis = Self { orient, label: String::new(), ticks: Vec::new(), range: scale.range };
        axis.update(attribute, scale, tick_count);
        axis
    }

    /// Re-derive ticks and label after the bound attribute or its scale changed.
    pub fn update(&mut self, attribute: Attribute, scale: &LinearScale, tick_count: usize) {
        self.label = attribute.axis_label();
        self.range = scale.range;
        self.ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| Tick { value, position: scale.map(value), text: format_integer(value) })
            .collect();
    }
}
