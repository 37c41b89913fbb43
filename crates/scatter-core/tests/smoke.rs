// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNG and SVG output.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::{Attribute, Channel, ChartConfig, ChartController, RenderOptions};

fn fixture_chart() -> ChartController {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cpus.csv");
    let mut rng = StdRng::seed_from_u64(2024);
    ChartController::from_csv_path(&path, ChartConfig::default(), &mut rng).expect("fixture chart")
}

#[test]
fn render_smoke_png() {
    let mut chart = fixture_chart();
    chart.select(Channel::Size, Attribute::Price);
    chart.filter_platform("Server").unwrap();
    chart.hover(0);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn svg_mirrors_page_structure() {
    let mut chart = fixture_chart();
    let doc = chart.render_to_svg_string(&RenderOptions::default()).expect("svg");
    for id in ["id=\"x-axis\"", "id=\"y-axis\"", "id=\"x-label\"", "id=\"y-label\"", "class=\"legend\""] {
        assert!(doc.contains(id), "missing {id}");
    }
    assert_eq!(doc.matches("class=\"data-point\"").count(), 27);
    assert_eq!(doc.matches("class=\"cell\"").count(), 4);
    assert!(doc.contains(">Year</text>"));
    assert!(doc.contains(">Price ($)</text>"));
    assert!(!doc.contains("style=\"opacity: 0;\""));

    chart.select(Channel::X, Attribute::Lithography);
    chart.filter_platform("Mobile").unwrap();
    let doc = chart.render_to_svg_string(&RenderOptions::default()).expect("svg");
    assert!(doc.contains(">Lithography (nm)</text>"));
    assert!(doc.contains("style=\"opacity: 0;\""));
    assert!(doc.contains("style=\"opacity: 0.1;\""));

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&RenderOptions::default(), &out).expect("write svg");
    assert!(std::fs::metadata(&out).expect("svg exists").len() > 0);
}
