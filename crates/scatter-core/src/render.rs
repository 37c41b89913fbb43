// File: crates/scatter-core/src/render.rs
// Summary: Headless rendering pipeline (PNG file/bytes, RGBA8 buffer) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient};
use crate::chart::ChartController;
use crate::legend;
use crate::text::{TextShaper, LABEL_FONT_SIZE, LEGEND_FONT_SIZE, TICK_FONT_SIZE, TOOLTIP_FONT_SIZE};
use crate::theme::Theme;

/// Length of axis tick marks, in pixels.
const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f32 = 3.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Text is skipped entirely when false (keeps pixel output font-independent).
    pub draw_labels: bool,
    pub draw_tooltip: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, draw_tooltip: true }
    }
}

impl ChartController {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let cfg = self.config();
        let mut surface = skia::surfaces::raster_n32_premul((cfg.width.max(1), cfg.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let shaper = opts.draw_labels.then(TextShaper::new);
        draw_chart(surface.canvas(), self, opts, shaper.as_ref());
        Ok(surface)
    }
}

/// Paint the whole chart onto `canvas` (surface coordinates).
pub fn draw_chart(canvas: &skia::Canvas, chart: &ChartController, opts: &RenderOptions, shaper: Option<&TextShaper>) {
    let cfg = chart.config();
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let left = cfg.insets.left as f32;
    let top = cfg.insets.top as f32;
    let plot_w = cfg.plot_width() as f32;
    let plot_h = cfg.plot_height() as f32;

    canvas.save();
    canvas.translate((left, top));
    draw_axis(canvas, chart.x_axis(), plot_h, theme, shaper);
    draw_axis(canvas, chart.y_axis(), plot_h, theme, shaper);
    if let Some(shaper) = shaper {
        draw_axis_labels(canvas, chart, plot_w, plot_h, theme, shaper);
    }
    draw_points(canvas, chart, theme);
    canvas.restore();

    draw_legend(canvas, chart, theme, shaper);

    if opts.draw_tooltip {
        if let Some(shaper) = shaper {
            draw_tooltip(canvas, chart, theme, shaper);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, plot_h: f32, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut line = skia::Paint::default();
    line.set_color(theme.axis_line);
    line.set_anti_alias(true);
    line.set_stroke_width(1.0);

    let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
    match axis.orient {
        AxisOrient::Bottom => {
            canvas.draw_line((r0, plot_h), (r1, plot_h), &line);
            for t in &axis.ticks {
                let x = t.position as f32;
                canvas.draw_line((x, plot_h), (x, plot_h + TICK_SIZE), &line);
                if let Some(shaper) = shaper {
                    let y = plot_h + TICK_SIZE + TICK_PADDING + TICK_FONT_SIZE * 0.71 + TICK_FONT_SIZE * 0.5;
                    shaper.draw_centered(canvas, &t.text, x, y, TICK_FONT_SIZE, theme.tick);
                }
            }
        }
        AxisOrient::Left => {
            canvas.draw_line((0.0, r0), (0.0, r1), &line);
            for t in &axis.ticks {
                let y = t.position as f32;
                canvas.draw_line((0.0, y), (-TICK_SIZE, y), &line);
                if let Some(shaper) = shaper {
                    let x = -(TICK_SIZE + TICK_PADDING);
                    shaper.draw_right(canvas, &t.text, x, y + TICK_FONT_SIZE * 0.32, TICK_FONT_SIZE, theme.tick);
                }
            }
        }
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    chart: &ChartController,
    plot_w: f32,
    plot_h: f32,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let cfg = chart.config();
    let x_label_y = plot_h + cfg.insets.bottom as f32 - 10.0;
    shaper.draw_centered(canvas, &chart.x_axis().label, plot_w * 0.5, x_label_y, LABEL_FONT_SIZE, theme.axis_label);

    // rotated -90deg: x runs upward along the left margin
    canvas.save();
    canvas.rotate(-90.0, None);
    let y_label_y = -(cfg.insets.left as f32) + 10.0 + LABEL_FONT_SIZE;
    shaper.draw_centered(canvas, &chart.y_axis().label, -plot_h * 0.5, y_label_y, LABEL_FONT_SIZE, theme.axis_label);
    canvas.restore();
}

fn draw_points(canvas: &skia::Canvas, chart: &ChartController, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.point_stroke);
    let outline = theme.point_stroke.a() > 0;

    for p in chart.points() {
        if !p.is_drawable() {
            continue;
        }
        let alpha = p.effective_alpha().clamp(0.0, 1.0) as f32;
        if alpha <= 0.0 {
            continue;
        }
        fill.set_color(p.fill);
        fill.set_alpha_f(alpha);
        let center = (p.cx as f32, p.cy as f32);
        canvas.draw_circle(center, p.r as f32, &fill);
        if outline {
            stroke.set_alpha_f(alpha);
            canvas.draw_circle(center, p.r as f32, &stroke);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, chart: &ChartController, theme: &Theme, shaper: Option<&TextShaper>) {
    let cfg = chart.config();
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);

    for (i, entry) in chart.legend().entries.iter().enumerate() {
        let alpha = entry.opacity.clamp(0.0, 1.0) as f32;
        swatch.set_color(entry.color);
        swatch.set_alpha_f(alpha);
        canvas.draw_circle(legend::swatch_center(cfg, i), cfg.legend_radius, &swatch);
        if let Some(shaper) = shaper {
            let (x, y) = legend::label_origin(cfg, i);
            let text = theme.legend_label.with_a((alpha * theme.legend_label.a() as f32).round() as u8);
            shaper.draw_left(canvas, &entry.platform, x, y, LEGEND_FONT_SIZE, text);
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, chart: &ChartController, theme: &Theme, shaper: &TextShaper) {
    let (Some(index), Some(tip)) = (chart.hovered(), chart.tooltip()) else { return };
    let p = &chart.points()[index];
    if !p.is_drawable() {
        return;
    }
    let cfg = chart.config();
    let line_h = TOOLTIP_FONT_SIZE + 4.0;
    let pad = 8.0;
    let w = tip.lines.iter().map(|l| shaper.measure_width(l, TOOLTIP_FONT_SIZE)).fold(0.0f32, f32::max) + pad * 2.0;
    let h = line_h * tip.lines.len() as f32 + pad * 2.0;

    // centered above the point, kept on the surface
    let px = cfg.insets.left as f32 + p.cx as f32;
    let py = cfg.insets.top as f32 + p.cy as f32;
    let x = (px - w * 0.5).clamp(0.0, (cfg.width as f32 - w).max(0.0));
    let y = (py - p.r as f32 - 6.0 - h).max(0.0);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(skia::Rect::from_xywh(x, y, w, h), 2.0, 2.0, &bg);

    for (i, line) in tip.lines.iter().enumerate() {
        let baseline = y + pad + line_h * i as f32 + TOOLTIP_FONT_SIZE;
        shaper.draw_left(canvas, line, x + pad, baseline, TOOLTIP_FONT_SIZE, theme.tooltip_text);
    }
}
