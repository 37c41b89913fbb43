// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (fixed records, no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, checks the render is reproducible and the expected points are painted,
//   then logs how to bless a golden file.

use scatter_core::{Attribute, Channel, ChartConfig, ChartController, Record, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8], again: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let again_img = image::load_from_memory(again).expect("decode again").to_rgba8();
        assert_eq!(got_img.dimensions(), (960, 600));
        assert_eq!(got_img.as_raw(), again_img.as_raw(), "two renders of the same chart differ");
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn pixel_at(bytes: &[u8], chart: &ChartController, index: usize) -> [u8; 4] {
    let img = image::load_from_memory(bytes).expect("decode").to_rgba8();
    let cfg = chart.config();
    let p = chart.points()[index];
    let x = (cfg.insets.left as f64 + p.cx).round() as u32;
    let y = (cfg.insets.top as f64 + p.cy).round() as u32;
    img.get_pixel(x, y).0
}

fn records() -> Vec<Record> {
    let rows = [
        ("A", 3.4, 32.0, "Desktop", 317.0, 2011.0),
        ("B", 2.9, 32.0, "Server", 2057.0, 2012.0),
        ("C", 2.1, 22.0, "Mobile", 398.0, 2013.0),
        ("D", 4.0, 14.0, "Desktop", 339.0, 2015.0),
        ("E", 1.8, 45.0, "Embedded", 63.0, 2010.0),
        ("F", 2.3, 22.0, "Server", 4115.0, 2014.0),
    ];
    rows.iter()
        .map(|&(name, frequency, lithography, platform, price, year)| Record {
            name: name.into(),
            frequency,
            lithography,
            platform: platform.into(),
            price,
            year,
        })
        .collect()
}

fn render_bytes(build: impl Fn(&mut ChartController)) -> (Vec<u8>, ChartController) {
    let mut chart = ChartController::new(records(), ChartConfig::default()).expect("chart");
    build(&mut chart);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    (bytes, chart)
}

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn snap(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_default_mapping() {
    let (bytes, chart) = render_bytes(|_| {});
    let (again, _) = render_bytes(|_| {});
    for i in 0..chart.points().len() {
        assert_ne!(pixel_at(&bytes, &chart, i), WHITE, "point {i} not painted");
    }
    write_or_compare(&snap("default_mapping.png"), &bytes, &again);
}

#[test]
fn golden_remapped_and_filtered() {
    let build = |c: &mut ChartController| {
        c.select(Channel::X, Attribute::Lithography);
        c.select(Channel::Size, Attribute::Price);
        c.filter_platform("Server").unwrap();
    };
    let (bytes, chart) = render_bytes(build);
    let (again, _) = render_bytes(build);
    // Server rows (1 and 5) stay visible, the rest are hidden
    assert_ne!(pixel_at(&bytes, &chart, 1), WHITE);
    assert_ne!(pixel_at(&bytes, &chart, 5), WHITE);
    assert_eq!(pixel_at(&bytes, &chart, 2), WHITE);
    write_or_compare(&snap("remapped_filtered.png"), &bytes, &again);
}
