//! Chart projections
//!
//! Each function turns fixture lists into the shape a ratatui widget wants.
//! Nothing here aggregates beyond what the fixtures already hold.

use ratatui::style::Color;

use crate::domain::{CategoryEntry, ColorPalette, RegionRevenue, Rgb, SalesPoint};

/// Low and high ends of the region revenue gradient.
pub const REGION_GRADIENT: (Rgb, Rgb) = (Rgb(0xE1, 0xF5, 0xFE), Rgb(0x02, 0x77, 0xBD));

/// Fill color of the revenue area chart.
pub const REVENUE_COLOR: Rgb = Rgb(0x4F, 0xC3, 0xF7);

/// Revenue over time, ready for a `Chart` dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSeries {
    pub labels: Vec<String>,
    pub points: Vec<(f64, f64)>,
    pub max: f64,
}

pub fn revenue_series(sales: &[SalesPoint]) -> RevenueSeries {
    let labels = sales.iter().map(|p| p.label.clone()).collect();
    let points = sales
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();
    let max = sales.iter().map(|p| p.value).fold(0.0, f64::max);
    RevenueSeries {
        labels,
        points,
        max,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub name: String,
    pub value: u64,
    pub color: Color,
}

/// One bar per category, colored positionally from the palette.
pub fn category_bars(categories: &[CategoryEntry], palette: &ColorPalette) -> Vec<CategoryBar> {
    categories
        .iter()
        .enumerate()
        .map(|(i, entry)| CategoryBar {
            name: entry.name.clone(),
            value: entry.value.max(0.0).round() as u64,
            color: palette.color_at(i),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub region_code: String,
    pub value: f64,
    pub color: Color,
}

/// Region revenue rows shaded along `gradient` by value; the largest value
/// gets the high end.
pub fn region_rows(regions: &[RegionRevenue], gradient: (Rgb, Rgb)) -> Vec<RegionRow> {
    let min = regions.iter().map(|r| r.value).fold(f64::INFINITY, f64::min);
    let max = regions.iter().map(|r| r.value).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    regions
        .iter()
        .map(|region| {
            let t = if span > 0.0 {
                (region.value - min) / span
            } else {
                1.0
            };
            RegionRow {
                region_code: region.region_code.clone(),
                value: region.value,
                color: gradient.0.lerp(gradient.1, t).into(),
            }
        })
        .collect()
}

/// Per-category sparkline inputs, in category order.
pub fn trend_series(categories: &[CategoryEntry]) -> Vec<(&str, &[u64])> {
    categories
        .iter()
        .map(|entry| (entry.name.as_str(), entry.recent.as_slice()))
        .collect()
}

/// `3557` -> `$3,557`
pub fn format_currency(value: f64) -> String {
    let whole = value.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && whole > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
