// File: crates/scatter-core/src/chart.rs
// Summary: Chart controller: owns records, channel mapping, scales and the rendered point state,
// and applies viewer interactions (select changes, legend filter, reset, hover).

use std::path::Path;

use rand::Rng;
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient};
use crate::channel::{Attribute, Channel, ChannelMapping};
use crate::config::ChartConfig;
use crate::dataset::{DatasetLoader, PlatformIndex};
use crate::error::{ChartError, Result};
use crate::extent::{attribute_extent, extent_with_padding};
use crate::geometry::in_circle;
use crate::legend::{self, Legend};
use crate::record::Record;
use crate::scale::{LinearScale, OrdinalColorScale};
use crate::text::label_width;
use crate::tooltip::Tooltip;

/// Id of the control that clears the platform filter.
pub const RESET_CONTROL_ID: &str = "reset-platform";

/// Visual attributes of one rendered data point, in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: skia::Color,
    pub fill_opacity: f64,
    /// Element opacity set by the platform filter; `None` until first set.
    pub opacity: Option<f64>,
}

impl DataPoint {
    /// Alpha actually painted: fill opacity times element opacity.
    pub fn effective_alpha(&self) -> f64 {
        self.fill_opacity * self.opacity.unwrap_or(1.0)
    }

    /// NaN geometry leaves the point visually absent.
    pub fn is_drawable(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite() && self.r.is_finite() && self.r > 0.0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChannelScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub size: LinearScale,
    pub opacity: LinearScale,
}

impl ChannelScales {
    pub fn get(&self, channel: Channel) -> &LinearScale {
        match channel {
            Channel::X => &self.x,
            Channel::Y => &self.y,
            Channel::Size => &self.size,
            Channel::Opacity => &self.opacity,
        }
    }
}

pub struct ChartController {
    config: ChartConfig,
    data: Vec<Record>,
    platforms: PlatformIndex,
    mapping: ChannelMapping,
    scales: ChannelScales,
    colors: OrdinalColorScale,
    points: Vec<DataPoint>,
    x_axis: Axis,
    y_axis: Axis,
    legend: Legend,
    filter: Option<String>,
    hovered: Option<usize>,
}

impl ChartController {
    /// Build scales, axes, legend and points for `data` in one pass.
    pub fn new(data: Vec<Record>, config: ChartConfig) -> Result<Self> {
        if data.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let mapping = config.mapping;
        let platforms = PlatformIndex::build(&data);
        let colors = OrdinalColorScale::category10(platforms.len());

        let mut scales = ChannelScales {
            x: LinearScale::undefined((0.0, config.plot_width())),
            y: LinearScale::undefined((config.plot_height(), 0.0)),
            size: LinearScale::undefined(config.size_range),
            opacity: LinearScale::undefined(config.opacity_range),
        };
        scales.x.set_domain(extent_with_padding(&data, mapping.x, config.axis_padding));
        scales.y.set_domain(extent_with_padding(&data, mapping.y, config.axis_padding));
        scales.size.set_domain(attribute_extent(&data, mapping.size));
        scales.opacity.set_domain(attribute_extent(&data, mapping.opacity));

        let x_axis = Axis::new(AxisOrient::Bottom, mapping.x, &scales.x, config.tick_count);
        let y_axis = Axis::new(AxisOrient::Left, mapping.y, &scales.y, config.tick_count);
        let legend = Legend::new(&platforms, &colors);

        let points = data
            .iter()
            .map(|d| DataPoint {
                cx: scales.x.map(d.value(mapping.x)),
                cy: scales.y.map(d.value(mapping.y)),
                r: scales.size.map(d.value(mapping.size)),
                fill: colors.color(platforms.get(&d.platform).unwrap_or(0)),
                fill_opacity: scales.opacity.map(d.value(mapping.opacity)),
                opacity: None,
            })
            .collect();

        tracing::debug!(
            records = data.len(),
            platforms = platforms.len(),
            x = %mapping.x,
            y = %mapping.y,
            size = %mapping.size,
            opacity = %mapping.opacity,
            "chart initialized"
        );

        Ok(Self {
            config,
            data,
            platforms,
            mapping,
            scales,
            colors,
            points,
            x_axis,
            y_axis,
            legend,
            filter: None,
            hovered: None,
        })
    }

    /// Load `path` with the configured jitter and build the chart.
    pub fn from_csv_path<R: Rng + ?Sized>(path: impl AsRef<Path>, config: ChartConfig, rng: &mut R) -> Result<Self> {
        let data = DatasetLoader::new(config.jitter).load_path(path, rng)?;
        Self::new(data, config)
    }

    // ---- interaction --------------------------------------------------------

    /// Rebind `channel` to `attribute` and re-apply only that channel.
    pub fn select(&mut self, channel: Channel, attribute: Attribute) {
        self.mapping.set(channel, attribute);
        match channel {
            Channel::X => self.change_x(attribute),
            Channel::Y => self.change_y(attribute),
            Channel::Size => self.change_size(attribute),
            Channel::Opacity => self.change_opacity(attribute),
        }
        tracing::debug!(channel = %channel, attribute = %attribute, "channel remapped");
    }

    /// Dispatch a control event by element id (`select-x`, ..., `reset-platform`).
    pub fn handle_control(&mut self, control_id: &str, value: &str) -> Result<()> {
        let id = control_id.strip_prefix('#').unwrap_or(control_id);
        if id == RESET_CONTROL_ID {
            self.reset_platform();
            return Ok(());
        }
        let channel = Channel::from_control_id(id).ok_or_else(|| ChartError::UnknownControl(control_id.to_string()))?;
        let attribute = value.parse::<Attribute>()?;
        self.select(channel, attribute);
        Ok(())
    }

    fn change_x(&mut self, attribute: Attribute) {
        self.scales.x.set_domain(extent_with_padding(&self.data, attribute, self.config.axis_padding));
        self.x_axis.update(attribute, &self.scales.x, self.config.tick_count);
        for (p, d) in self.points.iter_mut().zip(&self.data) {
            p.cx = self.scales.x.map(d.value(attribute));
        }
    }

    fn change_y(&mut self, attribute: Attribute) {
        self.scales.y.set_domain(extent_with_padding(&self.data, attribute, self.config.axis_padding));
        self.y_axis.update(attribute, &self.scales.y, self.config.tick_count);
        for (p, d) in self.points.iter_mut().zip(&self.data) {
            p.cy = self.scales.y.map(d.value(attribute));
        }
    }

    fn change_size(&mut self, attribute: Attribute) {
        self.scales.size.set_domain(attribute_extent(&self.data, attribute));
        for (p, d) in self.points.iter_mut().zip(&self.data) {
            p.r = self.scales.size.map(d.value(attribute));
        }
    }

    fn change_opacity(&mut self, attribute: Attribute) {
        self.scales.opacity.set_domain(attribute_extent(&self.data, attribute));
        for (p, d) in self.points.iter_mut().zip(&self.data) {
            p.fill_opacity = self.scales.opacity.map(d.value(attribute));
        }
    }

    /// Show only points of `platform`; the legend highlights its entry.
    pub fn filter_platform(&mut self, platform: &str) -> Result<()> {
        if self.platforms.get(platform).is_none() {
            return Err(ChartError::UnknownPlatform(platform.to_string()));
        }
        self.legend.highlight(platform);
        for (p, d) in self.points.iter_mut().zip(&self.data) {
            p.opacity = Some(if d.platform == platform { 1.0 } else { 0.0 });
        }
        self.filter = Some(platform.to_string());
        tracing::debug!(platform, "platform filter applied");
        Ok(())
    }

    /// Clear the platform filter. Point opacity returns to the current
    /// opacity-channel value rather than to a fixed default.
    pub fn reset_platform(&mut self) {
        self.legend.reset();
        let attribute = self.mapping.opacity;
        for (p, d) in self.points.iter_mut().zip(&self.data) {
            p.opacity = Some(self.scales.opacity.map(d.value(attribute)));
        }
        self.filter = None;
        tracing::debug!("platform filter reset");
    }

    /// Legend row under surface pixel `(px, py)`, if any.
    pub fn legend_entry_at(&self, px: f32, py: f32) -> Option<&str> {
        self.legend.entries.iter().enumerate().find_map(|(i, e)| {
            let w = label_width(&e.platform, crate::text::LEGEND_FONT_SIZE);
            legend::row_rect(&self.config, i, w).contains(px, py).then_some(e.platform.as_str())
        })
    }

    /// Forward a click at surface pixel `(px, py)` to the legend.
    /// Returns the platform now filtered, if the click hit an entry.
    pub fn click_at(&mut self, px: f32, py: f32) -> Option<String> {
        let platform = self.legend_entry_at(px, py)?.to_string();
        self.filter_platform(&platform).ok()?;
        Some(platform)
    }

    /// Hover the topmost point under surface pixel `(px, py)`.
    pub fn hover_at(&mut self, px: f64, py: f64) -> Option<Tooltip> {
        let x = px - self.config.insets.left as f64;
        let y = py - self.config.insets.top as f64;
        self.hovered = self.points.iter().rposition(|p| in_circle(x, y, p.cx, p.cy, p.r));
        self.tooltip()
    }

    pub fn hover(&mut self, index: usize) -> Option<Tooltip> {
        self.hovered = (index < self.data.len()).then_some(index);
        self.tooltip()
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.hovered.map(|i| Tooltip::for_record(&self.data[i]))
    }

    // ---- accessors ----------------------------------------------------------

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn records(&self) -> &[Record] { &self.data }
    pub fn platforms(&self) -> &PlatformIndex { &self.platforms }
    pub fn mapping(&self) -> ChannelMapping { self.mapping }
    pub fn scales(&self) -> &ChannelScales { &self.scales }
    pub fn scale(&self, channel: Channel) -> &LinearScale { self.scales.get(channel) }
    pub fn colors(&self) -> &OrdinalColorScale { &self.colors }
    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn legend(&self) -> &Legend { &self.legend }
    pub fn active_filter(&self) -> Option<&str> { self.filter.as_deref() }
    pub fn hovered(&self) -> Option<usize> { self.hovered }
}
