// File: crates/scatter-core/src/legend.rs
// Summary: Platform legend entries (color swatch + label), their opacity state and hit-testing.

use skia_safe as skia;

use crate::config::ChartConfig;
use crate::dataset::PlatformIndex;
use crate::geometry::RectF32;
use crate::scale::OrdinalColorScale;

/// Opacity of legend entries that are not the active filter.
pub const DIMMED: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub platform: String,
    pub color: skia::Color,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(platforms: &PlatformIndex, colors: &OrdinalColorScale) -> Self {
        let entries = platforms
            .platforms()
            .iter()
            .enumerate()
            .map(|(i, p)| LegendEntry { platform: p.clone(), color: colors.color(i), opacity: 1.0 })
            .collect();
        Self { entries }
    }

    /// Dim every entry and bring `platform` back to full opacity.
    pub fn highlight(&mut self, platform: &str) {
        for e in &mut self.entries {
            e.opacity = if e.platform == platform { 1.0 } else { DIMMED };
        }
    }

    pub fn reset(&mut self) {
        for e in &mut self.entries {
            e.opacity = 1.0;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Swatch center of legend row `i`, in surface pixels.
pub fn swatch_center(config: &ChartConfig, i: usize) -> (f32, f32) {
    let (ox, oy) = origin(config);
    let r = config.legend_radius;
    let row = 2.0 * r + config.legend_padding;
    (ox + r, oy + r + row * i as f32)
}

/// Baseline origin of legend row `i`'s label, in surface pixels.
pub fn label_origin(config: &ChartConfig, i: usize) -> (f32, f32) {
    let (cx, cy) = swatch_center(config, i);
    (cx + config.legend_radius + config.legend_label_offset, cy + config.legend_radius * 0.5)
}

/// Clickable area of row `i`: swatch plus a label-wide strip to its right.
pub fn row_rect(config: &ChartConfig, i: usize, label_width: f32) -> RectF32 {
    let (cx, cy) = swatch_center(config, i);
    let r = config.legend_radius;
    let right = cx + r + config.legend_label_offset + label_width;
    RectF32::from_ltrb(cx - r, cy - r, right, cy + r)
}

fn origin(config: &ChartConfig) -> (f32, f32) {
    (
        config.insets.left as f32 + config.legend_origin.0,
        config.insets.top as f32 + config.legend_origin.1,
    )
}
