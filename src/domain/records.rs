//! Record shapes backing the tiles and charts

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::FixtureError;

/// Highest star rating a review may carry.
pub const MAX_STARS: u8 = 5;

/// One point of the daily revenue series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub label: String,
    pub value: f64,
}

impl SalesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Share of sales for one product category, plus its recent trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub value: f64,
    pub recent: Vec<u64>,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, value: f64, recent: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            value,
            recent,
        }
    }
}

/// A customer review waiting for moderation.
///
/// Fields are private so the star range checked in [`Review::new`] holds for
/// every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: String,
    product: String,
    text: String,
    stars: u8,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        product: impl Into<String>,
        text: impl Into<String>,
        stars: u8,
    ) -> Result<Self, FixtureError> {
        let id = id.into();
        if stars > MAX_STARS {
            return Err(FixtureError::InvalidStars {
                id,
                stars,
                max: MAX_STARS,
            });
        }
        Ok(Self {
            id,
            product: product.into(),
            text: text.into(),
            stars,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }
}

/// Id + display name. Shared by customers, deliveries and support tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRecord {
    pub id: String,
    pub name: String,
}

impl NamedRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Revenue attributed to one region (ISO 3166-2 style code, e.g. `US-CA`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRevenue {
    pub region_code: String,
    pub value: f64,
}

impl RegionRevenue {
    pub fn new(region_code: impl Into<String>, value: f64) -> Self {
        Self {
            region_code: region_code.into(),
            value,
        }
    }
}

/// Reject the first id that appears twice in `ids`.
pub fn ensure_unique_ids<'a>(
    list: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), FixtureError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                list,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
