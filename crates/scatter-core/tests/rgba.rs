// File: crates/scatter-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use scatter_core::{ChartConfig, ChartController, Record, RenderOptions};

fn cpu(platform: &str, price: f64, year: f64) -> Record {
    Record { name: "cpu".into(), frequency: 3.0, lithography: 14.0, platform: platform.into(), price, year }
}

#[test]
fn render_rgba8_buffer() {
    let data = vec![cpu("Desktop", 100.0, 2010.0), cpu("Server", 900.0, 2020.0)];
    let chart = ChartController::new(data, ChartConfig::default()).unwrap();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (960, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is plain background (white, opaque)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn filtered_points_leave_background() {
    let data = vec![cpu("Desktop", 100.0, 2010.0), cpu("Server", 900.0, 2020.0)];
    let mut chart = ChartController::new(data, ChartConfig::default()).unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;

    let cfg = *chart.config();
    let pixel = |buf: &[u8], i: usize, c: &ChartController| {
        let p = c.points()[i];
        let x = (cfg.insets.left as f64 + p.cx).round() as usize;
        let y = (cfg.insets.top as f64 + p.cy).round() as usize;
        let at = y * cfg.width as usize * 4 + x * 4;
        [buf[at], buf[at + 1], buf[at + 2]]
    };

    let (before, ..) = chart.render_to_rgba8(&opts).unwrap();
    assert_ne!(pixel(&before, 0, &chart), [255, 255, 255], "desktop point painted");

    chart.filter_platform("Server").unwrap();
    let (after, ..) = chart.render_to_rgba8(&opts).unwrap();
    assert_eq!(pixel(&after, 0, &chart), [255, 255, 255], "desktop point hidden");
    assert_ne!(pixel(&after, 1, &chart), [255, 255, 255], "server point still painted");
}
