// File: crates/scatter-core/src/dataset.rs
// Summary: CSV dataset loader (typed coercion + year jitter) and the platform index.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::Rng;

use crate::error::{ChartError, Result};
use crate::record::Record;

/// Default half-width of the random offset added to `Year`.
pub const YEAR_JITTER: f64 = 0.2;

/// Reads the CPU CSV shape: Name, Frequency, Lithography, Platform, Price, Year.
#[derive(Clone, Copy, Debug)]
pub struct DatasetLoader {
    pub jitter: f64,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self { jitter: YEAR_JITTER }
    }
}

impl DatasetLoader {
    pub fn new(jitter: f64) -> Self {
        Self { jitter: jitter.abs() }
    }

    pub fn load_path<R: Rng + ?Sized>(&self, path: impl AsRef<Path>, rng: &mut R) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        let records = self.load_reader(file, rng)?;
        tracing::info!(path = %path.display(), records = records.len(), "dataset loaded");
        Ok(records)
    }

    pub fn load_reader<R: Rng + ?Sized>(&self, reader: impl Read, rng: &mut R) -> Result<Vec<Record>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Err(ChartError::MissingHeader);
        }
        let idx = |name: &str| headers.iter().position(|h| h.trim() == name);
        let i_name = idx("Name");
        let i_freq = idx("Frequency");
        let i_litho = idx("Lithography");
        let i_platform = idx("Platform");
        let i_price = idx("Price");
        let i_year = idx("Year");

        let mut out = Vec::new();
        let mut incomplete = 0usize;
        for row in rdr.records() {
            let row = row?;
            let field = |i: Option<usize>| i.and_then(|ix| row.get(ix));
            let record = Record {
                name: field(i_name).unwrap_or_default().to_string(),
                frequency: coerce_number(field(i_freq)),
                lithography: coerce_number(field(i_litho)),
                platform: field(i_platform).unwrap_or_default().to_string(),
                price: coerce_number(field(i_price)),
                year: coerce_number(field(i_year)) + (rng.gen::<f64>() * 2.0 - 1.0) * self.jitter,
            };
            if !record.is_complete() {
                incomplete += 1;
            }
            out.push(record);
        }
        if incomplete > 0 {
            tracing::warn!(rows = incomplete, "rows with non-numeric fields will not be plotted");
        }
        Ok(out)
    }
}

/// Loose numeric coercion: absent -> NaN, blank -> 0, unparsable -> NaN.
///
/// Accepts signed decimal literals, `Infinity` in exactly that spelling, and
/// unsigned `0x` / `0o` / `0b` integers. `inf`, `nan` and friends are NaN.
pub fn coerce_number(cell: Option<&str>) -> f64 {
    match cell.map(str::trim) {
        None => f64::NAN,
        Some("") => 0.0,
        Some(s) => parse_number(s),
    }
}

fn parse_number(s: &str) -> f64 {
    if let Some(v) = parse_prefixed_integer(s) {
        return v;
    }
    let (sign, body) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };
    if body == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let radix = match s.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// Distinct platforms numbered in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformIndex {
    order: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl PlatformIndex {
    pub fn build(records: &[Record]) -> Self {
        let mut index = Self::default();
        for r in records {
            if !index.lookup.contains_key(&r.platform) {
                index.lookup.insert(r.platform.clone(), index.order.len());
                index.order.push(r.platform.clone());
            }
        }
        index
    }

    pub fn get(&self, platform: &str) -> Option<usize> {
        self.lookup.get(platform).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Platforms in index order.
    pub fn platforms(&self) -> &[String] {
        &self.order
    }
}
