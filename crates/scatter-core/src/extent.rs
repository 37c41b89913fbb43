// File: crates/scatter-core/src/extent.rs
// Summary: Min/max extents over record attributes, with optional symmetric padding.

use crate::channel::Attribute;
use crate::record::Record;

/// [min, max] of `values`, skipping NaN. `None` when nothing is comparable.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

pub fn attribute_extent(data: &[Record], attribute: Attribute) -> Option<(f64, f64)> {
    extent(data.iter().map(|r| r.value(attribute)))
}

/// Extent widened by `pct * (max - min)` on both sides. A single-valued
/// attribute stays collapsed at `[v, v]`.
pub fn extent_with_padding(data: &[Record], attribute: Attribute, pct: f64) -> Option<(f64, f64)> {
    attribute_extent(data, attribute).map(|(min, max)| pad(min, max, pct))
}

#[inline]
pub fn pad(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let diff = max - min;
    (min - diff * pct, max + diff * pct)
}
