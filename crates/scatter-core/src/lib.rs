// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the dataset loader, channel scales, chart controller and renderers.

pub mod axis;
pub mod channel;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod record;
pub mod render;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use channel::{select_options, Attribute, Channel, ChannelMapping};
pub use chart::{ChartController, DataPoint, RESET_CONTROL_ID};
pub use config::ChartConfig;
pub use dataset::{DatasetLoader, PlatformIndex};
pub use error::ChartError;
pub use extent::{extent, extent_with_padding};
pub use legend::{Legend, LegendEntry};
pub use record::Record;
pub use render::RenderOptions;
pub use scale::{LinearScale, OrdinalColorScale};
pub use theme::Theme;
pub use text::TextShaper;
pub use tooltip::Tooltip;
