// File: crates/scatter-core/src/svg.rs
// Summary: SVG document export mirroring the page structure (axes, labels, legend cells, data points).

use std::fmt::Write as _;

use anyhow::Result;

use crate::axis::{Axis, AxisOrient};
use crate::chart::ChartController;
use crate::render::RenderOptions;
use crate::scale::hex;

impl ChartController {
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let doc = self.render_to_svg_string(opts)?;
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, doc)?;
        Ok(())
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String> {
        let cfg = self.config();
        let theme = &opts.theme;
        let (plot_w, plot_h) = (cfg.plot_width(), cfg.plot_height());
        let mut s = String::new();

        writeln!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            cfg.width, cfg.height, cfg.width, cfg.height
        )?;
        writeln!(s, r#"<rect width="100%" height="100%" fill="{}"/>"#, hex(theme.background))?;
        writeln!(s, r#"<g transform="translate({}, {})">"#, cfg.insets.left, cfg.insets.top)?;

        // legend
        writeln!(
            s,
            r#"<g class="legend" transform="translate({}, {})">"#,
            cfg.legend_origin.0, cfg.legend_origin.1
        )?;
        let r = cfg.legend_radius;
        let row = 2.0 * r + cfg.legend_padding;
        for (i, e) in self.legend().entries.iter().enumerate() {
            writeln!(
                s,
                r#"<g class="cell" transform="translate(0, {})" style="opacity: {};"><circle class="swatch" cx="{}" cy="{}" r="{}" fill="{}"/><text class="label" x="{}" y="{}" font-family="sans-serif" font-size="12">{}</text></g>"#,
                row * i as f32,
                e.opacity,
                r,
                r,
                r,
                hex(e.color),
                2.0 * r + cfg.legend_label_offset,
                r * 1.5,
                escape(&e.platform)
            )?;
        }
        writeln!(s, "</g>")?;

        write_axis(&mut s, "x-axis", self.x_axis(), plot_h)?;
        write_axis(&mut s, "y-axis", self.y_axis(), plot_h)?;

        writeln!(
            s,
            r#"<text id="x-label" x="{}" y="{}" style="text-anchor: middle;" font-family="sans-serif" font-size="16px">{}</text>"#,
            plot_w / 2.0,
            plot_h + cfg.insets.bottom as f64 - 10.0,
            escape(&self.x_axis().label)
        )?;
        writeln!(
            s,
            r#"<text id="y-label" y="{}" x="{}" transform="rotate(-90)" dy="1em" style="text-anchor: middle;" font-family="sans-serif" font-size="16px">{}</text>"#,
            -(cfg.insets.left as f64) + 10.0,
            -plot_h / 2.0,
            escape(&self.y_axis().label)
        )?;

        for (i, p) in self.points().iter().enumerate() {
            write!(
                s,
                r#"<circle class="data-point" data-index="{}" cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}""#,
                i,
                p.cx,
                p.cy,
                p.r,
                hex(p.fill),
                p.fill_opacity
            )?;
            if let Some(o) = p.opacity {
                write!(s, r#" style="opacity: {};""#, o)?;
            }
            writeln!(s, "/>")?;
        }

        writeln!(s, "</g>")?;
        writeln!(s, "</svg>")?;
        Ok(s)
    }
}

fn write_axis(s: &mut String, id: &str, axis: &Axis, plot_h: f64) -> std::fmt::Result {
    let (r0, r1) = axis.range;
    match axis.orient {
        AxisOrient::Bottom => {
            writeln!(s, r#"<g class="axis" id="{}" transform="translate(0, {})">"#, id, plot_h)?;
            writeln!(s, r#"<path class="domain" stroke="currentColor" d="M{},6V0H{}V6"/>"#, r0, r1)?;
            for t in &axis.ticks {
                writeln!(
                    s,
                    r#"<g class="tick" transform="translate({}, 0)"><line stroke="currentColor" y2="6"/><text fill="currentColor" y="9" dy="0.71em" text-anchor="middle">{}</text></g>"#,
                    t.position, t.text
                )?;
            }
        }
        AxisOrient::Left => {
            writeln!(s, r#"<g class="axis" id="{}">"#, id)?;
            writeln!(s, r#"<path class="domain" stroke="currentColor" d="M-6,{}H0V{}H-6"/>"#, r0, r1)?;
            for t in &axis.ticks {
                writeln!(
                    s,
                    r#"<g class="tick" transform="translate(0, {})"><line stroke="currentColor" x2="-6"/><text fill="currentColor" x="-9" dy="0.32em" text-anchor="end">{}</text></g>"#,
                    t.position, t.text
                )?;
            }
        }
    }
    writeln!(s, "</g>")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
