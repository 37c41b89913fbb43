// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (axes, labels, legend text, tooltip).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_label: skia::Color,
    pub point_stroke: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            legend_label: skia::Color::from_argb(255, 0, 0, 0),
            point_stroke: skia::Color::from_argb(0, 0, 0, 0),
            tooltip_background: skia::Color::from_argb(204, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
            point_stroke: skia::Color::from_argb(0, 0, 0, 0),
            tooltip_background: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            point_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
