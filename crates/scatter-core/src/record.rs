// File: crates/scatter-core/src/record.rs
// Summary: One CPU row of the dataset.

use crate::channel::Attribute;

/// A single CPU specification. Numeric fields may be NaN when the source
/// cell was malformed or missing.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    pub frequency: f64,
    pub lithography: f64,
    pub platform: String,
    pub price: f64,
    /// Release year plus a small jitter to reduce overplotting.
    pub year: f64,
}

impl Record {
    #[inline]
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Year => self.year,
            Attribute::Price => self.price,
            Attribute::Frequency => self.frequency,
            Attribute::Lithography => self.lithography,
        }
    }

    /// True when every mappable attribute parsed to a number.
    pub fn is_complete(&self) -> bool {
        Attribute::ALL.iter().all(|a| !self.value(*a).is_nan())
    }
}
