// File: crates/scatter-core/src/scale.rs
// Summary: Linear channel scales (domain -> range) and the categorical platform color scale.

use skia_safe as skia;

use crate::grid::ticks;

/// Data value on a mapped attribute.
pub type Value = f64;

/// Linear map from a data domain onto a visual range. Values outside the
/// domain extrapolate; nothing is clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale whose domain is unknown; every value maps to NaN.
    pub fn undefined(range: (f64, f64)) -> Self {
        Self { domain: (f64::NAN, f64::NAN), range }
    }

    pub fn set_domain(&mut self, domain: Option<(Value, Value)>) {
        self.domain = domain.unwrap_or((f64::NAN, f64::NAN));
    }

    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            // collapsed domain sits in the middle of the range
            if v.is_nan() { f64::NAN } else { 0.5 }
        } else {
            (v - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        let (d0, d1) = self.domain;
        ticks(d0, d1, count)
    }
}

/// Category10, the default categorical palette.
pub const CATEGORY10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

/// Platform index -> color. The palette is truncated to the number of
/// platforms and cycles when there are more than ten.
#[derive(Clone, Debug)]
pub struct OrdinalColorScale {
    palette: Vec<skia::Color>,
}

impl OrdinalColorScale {
    pub fn category10(categories: usize) -> Self {
        let n = categories.clamp(1, CATEGORY10.len());
        let palette = CATEGORY10[..n]
            .iter()
            .map(|&(r, g, b)| skia::Color::from_rgb(r, g, b))
            .collect();
        Self { palette }
    }

    #[inline]
    pub fn color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }
}

/// `#rrggbb` form of a color, as written into SVG fill attributes.
pub fn hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
