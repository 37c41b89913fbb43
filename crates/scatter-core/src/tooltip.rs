// File: crates/scatter-core/src/tooltip.rs
// Summary: Hover tooltip content for a single CPU record.

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn for_record(r: &Record) -> Self {
        Self {
            lines: vec![
                r.name.clone(),
                format!("Year: {}", r.year),
                format!("Frequency: {}", r.frequency),
                format!("Lithography: {} nm", r.lithography),
                format!("Price: ${}", r.price),
            ],
        }
    }
}
