// File: crates/scatter-core/src/config.rs
// Summary: Chart configuration record (surface layout, channel ranges, legend geometry).

use crate::channel::ChannelMapping;
use crate::dataset::YEAR_JITTER;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Fraction of the extent added on each side of the x/y domains.
    pub axis_padding: f64,
    /// Radius range of the size channel, in pixels.
    pub size_range: (f64, f64),
    pub opacity_range: (f64, f64),
    pub jitter: f64,
    pub mapping: ChannelMapping,
    pub tick_count: usize,
    /// Legend origin relative to the plot area's top-left corner.
    pub legend_origin: (f32, f32),
    pub legend_radius: f32,
    pub legend_padding: f32,
    pub legend_label_offset: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            axis_padding: 0.05,
            size_range: (4.0, 16.0),
            opacity_range: (0.4, 1.0),
            jitter: YEAR_JITTER,
            mapping: ChannelMapping::default(),
            tick_count: 10,
            legend_origin: (25.0, 20.0),
            legend_radius: 8.0,
            legend_padding: 10.0,
            legend_label_offset: 10.0,
        }
    }
}

impl ChartConfig {
    /// Inner plot width (surface minus horizontal margins).
    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.hsum() as i32).max(1) as f64
    }

    /// Inner plot height (surface minus vertical margins).
    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.vsum() as i32).max(1) as f64
    }
}
