pub mod palette;
pub mod records;

pub use palette::{ColorPalette, Rgb};
pub use records::{
    ensure_unique_ids, CategoryEntry, NamedRecord, RegionRevenue, Review, SalesPoint, MAX_STARS,
};
