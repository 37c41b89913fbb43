// File: crates/scatter-core/tests/extent.rs
// Purpose: Validate raw and padded extents over record attributes.

use scatter_core::extent::{attribute_extent, extent, pad};
use scatter_core::{extent_with_padding, Attribute, Record};

fn cpu(price: f64) -> Record {
    Record {
        name: "cpu".into(),
        frequency: 3.0,
        lithography: 14.0,
        platform: "Desktop".into(),
        price,
        year: 2015.0,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn padded_price_extent() {
    let data: Vec<Record> = [100.0, 300.0, 500.0, 900.0].into_iter().map(cpu).collect();
    let (lo, hi) = extent_with_padding(&data, Attribute::Price, 0.05).expect("non-empty");
    assert!(close(lo, 60.0), "lo = {lo}");
    assert!(close(hi, 940.0), "hi = {hi}");
}

#[test]
fn padding_is_symmetric_for_any_fraction() {
    let data: Vec<Record> = [7.5, -3.0, 12.25, 4.0].into_iter().map(cpu).collect();
    for pct in [0.0, 0.05, 0.25, 0.5, 1.0] {
        let (lo, hi) = extent_with_padding(&data, Attribute::Price, pct).unwrap();
        let diff = 12.25 - (-3.0);
        assert!(close(lo, -3.0 - pct * diff), "pct {pct}: lo {lo}");
        assert!(close(hi, 12.25 + pct * diff), "pct {pct}: hi {hi}");
    }
}

#[test]
fn single_value_collapses() {
    let data = vec![cpu(250.0), cpu(250.0)];
    assert_eq!(extent_with_padding(&data, Attribute::Price, 0.05), Some((250.0, 250.0)));
    assert_eq!(pad(3.0, 3.0, 0.5), (3.0, 3.0));
}

#[test]
fn nan_values_are_ignored() {
    let data = vec![cpu(f64::NAN), cpu(20.0), cpu(f64::NAN), cpu(10.0)];
    assert_eq!(attribute_extent(&data, Attribute::Price), Some((10.0, 20.0)));
    assert_eq!(extent([f64::NAN, f64::NAN]), None);
}

#[test]
fn empty_input_has_no_extent() {
    assert_eq!(extent(std::iter::empty()), None);
    assert_eq!(extent_with_padding(&[], Attribute::Year, 0.05), None);
}
