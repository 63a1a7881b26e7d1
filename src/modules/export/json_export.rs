//! JSON Export
//!
//! Writes reviews and regional revenue to JSON files.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::domain::{RegionRevenue, Review};

/// Region rows are written as `[code, value]` pairs, the shape map widgets take.
#[derive(Serialize)]
struct ExportableRegion<'a>(&'a str, f64);

pub fn write_reviews(path: &Path, reviews: &[Review]) -> Result<usize> {
    write_json(path, reviews)?;
    Ok(reviews.len())
}

pub fn write_regions(path: &Path, regions: &[RegionRevenue]) -> Result<usize> {
    let exportable: Vec<ExportableRegion<'_>> = regions
        .iter()
        .map(|r| ExportableRegion(&r.region_code, r.value))
        .collect();
    write_json(path, &exportable)?;
    Ok(regions.len())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
