use crate::domain::{
    ensure_unique_ids, CategoryEntry, ColorPalette, NamedRecord, RegionRevenue, Review, SalesPoint,
};
use crate::error::FixtureError;

/// Raw lists handed to [`FixtureStore::new`] for validation.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub sales: Vec<SalesPoint>,
    pub categories: Vec<CategoryEntry>,
    pub reviews: Vec<Review>,
    pub customers: Vec<NamedRecord>,
    pub deliveries: Vec<NamedRecord>,
    pub supports: Vec<NamedRecord>,
    pub regions: Vec<RegionRevenue>,
    pub palette: Option<ColorPalette>,
}

/// Read-only sample data behind every tile and chart.
///
/// Built once at startup and only ever lent out by shared reference, so the
/// lists are constant for the life of the process.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    sales: Vec<SalesPoint>,
    categories: Vec<CategoryEntry>,
    reviews: Vec<Review>,
    customers: Vec<NamedRecord>,
    deliveries: Vec<NamedRecord>,
    supports: Vec<NamedRecord>,
    regions: Vec<RegionRevenue>,
    palette: ColorPalette,
}

impl FixtureStore {
    pub fn new(set: FixtureSet) -> Result<Self, FixtureError> {
        ensure_unique_ids("reviews", set.reviews.iter().map(Review::id))?;
        ensure_unique_ids("customers", set.customers.iter().map(|r| r.id.as_str()))?;
        ensure_unique_ids("deliveries", set.deliveries.iter().map(|r| r.id.as_str()))?;
        ensure_unique_ids("supports", set.supports.iter().map(|r| r.id.as_str()))?;
        ensure_unique_ids(
            "regions",
            set.regions.iter().map(|r| r.region_code.as_str()),
        )?;

        let palette = match set.palette {
            Some(palette) => palette,
            None => ColorPalette::from_hex([])?,
        };

        Ok(Self {
            sales: set.sales,
            categories: set.categories,
            reviews: set.reviews,
            customers: set.customers,
            deliveries: set.deliveries,
            supports: set.supports,
            regions: set.regions,
            palette,
        })
    }

    /// The camping store sample data the dashboard ships with.
    pub fn builtin() -> Result<Self, FixtureError> {
        let sales = [
            ("01-01", 5500.0),
            ("01-02", 7955.0),
            ("01-03", 23565.0),
            ("01-04", 4544.0),
            ("01-05", 600.0),
            ("01-06", 3000.0),
            ("01-07", 8000.0),
        ]
        .into_iter()
        .map(|(label, value)| SalesPoint::new(label, value))
        .collect();

        let categories = vec![
            CategoryEntry::new("Tents", 30.0, vec![12, 18, 15, 22, 27, 25, 30]),
            CategoryEntry::new("Sleeping Bags", 20.0, vec![25, 22, 21, 19, 18, 20, 20]),
            CategoryEntry::new("Kitchen & Hydration", 15.0, vec![8, 9, 12, 11, 14, 13, 15]),
            CategoryEntry::new("Clothing", 15.0, vec![17, 16, 16, 15, 14, 15, 15]),
            CategoryEntry::new("Footwear", 10.0, vec![6, 7, 9, 12, 11, 10, 10]),
            CategoryEntry::new("Tools & Lighting", 10.0, vec![14, 12, 11, 9, 10, 9, 10]),
        ];

        let reviews = vec![
            Review::new(
                "111",
                "Tent",
                "Amazing tent... we were right beside a lake, it was windy, but it was one of \
                 the most peaceful nights of my life.",
                4,
            )?,
            Review::new(
                "222",
                "Hiking Shoes",
                "Not great... leaked a ton. I stepped in a very small puddle and for the rest \
                 of my trip my socks were soaked!",
                2,
            )?,
            Review::new(
                "333",
                "Stove",
                "Made coffee in the morning. You would not beleive how great it is to drink a \
                 coffee while camping.",
                4,
            )?,
        ];

        let customers = named(&[
            ("111", "Amy Alpine"),
            ("222", "Billy Bob"),
            ("333", "Carly Crew"),
            ("444", "Dan Deckers"),
            ("555", "Egbert Egg"),
        ]);
        let deliveries = named(&[
            ("111", "Water Purifier"),
            ("222", "Winter Gloves"),
            ("333", "Flashlight"),
            ("444", "Propane Tank"),
            ("555", "Sleeping Bag"),
        ]);
        let supports = named(&[
            ("111", "Flanders Finster"),
            ("222", "Greg Golf"),
            ("333", "Hailey Hello"),
            ("444", "Iggers Island"),
            ("555", "Jack Jimbo"),
        ]);

        let regions = [
            ("US-CA", 3557.0),
            ("US-NY", 3061.0),
            ("US-PA", 2644.0),
            ("US-IL", 1803.0),
            ("US-FL", 1590.0),
            ("US-NJ", 1714.0),
            ("US-CO", 1159.0),
        ]
        .into_iter()
        .map(|(code, value)| RegionRevenue::new(code, value))
        .collect();

        let palette = ColorPalette::from_hex([
            "#E57373", "#9575CD", "#64B5F6", "#4DB6AC", "#FFF176", "#FF8A65", "#90A4AE",
        ])?;

        Self::new(FixtureSet {
            sales,
            categories,
            reviews,
            customers,
            deliveries,
            supports,
            regions,
            palette: Some(palette),
        })
    }

    pub fn sales(&self) -> &[SalesPoint] {
        &self.sales
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn customers(&self) -> &[NamedRecord] {
        &self.customers
    }

    pub fn deliveries(&self) -> &[NamedRecord] {
        &self.deliveries
    }

    pub fn supports(&self) -> &[NamedRecord] {
        &self.supports
    }

    pub fn regions(&self) -> &[RegionRevenue] {
        &self.regions
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id() == id)
    }
}

fn named(rows: &[(&str, &str)]) -> Vec<NamedRecord> {
    rows.iter()
        .map(|(id, name)| NamedRecord::new(*id, *name))
        .collect()
}
