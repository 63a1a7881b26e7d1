//! CSV Export
//!
//! Writes the revenue series and the category breakdown to CSV files.

use std::path::Path;

use anyhow::Result;

use crate::domain::{CategoryEntry, SalesPoint};

/// Write the daily revenue series
pub fn write_sales(path: &Path, sales: &[SalesPoint]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["day", "value"])?;
    for point in sales {
        wtr.write_record([point.label.clone(), point.value.to_string()])?;
    }

    wtr.flush()?;
    Ok(sales.len())
}

/// Write the category breakdown. `recent` is flattened to a space separated
/// column.
pub fn write_categories(path: &Path, categories: &[CategoryEntry]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "value", "recent"])?;
    for entry in categories {
        let recent = entry
            .recent
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        wtr.write_record([entry.name.clone(), entry.value.to_string(), recent])?;
    }

    wtr.flush()?;
    Ok(categories.len())
}
