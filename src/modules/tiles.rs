//! Summary tiles - label, headline value and a short list per tile
//!
//! Tiles are plain values built from the fixture store on every frame. The
//! headline values are display literals, not aggregates of the listed rows.

use crate::domain::{NamedRecord, Review, MAX_STARS};
use crate::modules::review_dialog::DialogEvent;
use crate::store::FixtureStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TileKind {
    Revenue,
    Deliveries,
    Reviews,
    Support,
}

impl TileKind {
    pub const ALL: [TileKind; 4] = [
        TileKind::Revenue,
        TileKind::Deliveries,
        TileKind::Reviews,
        TileKind::Support,
    ];

    pub fn index(&self) -> usize {
        match self {
            TileKind::Revenue => 0,
            TileKind::Deliveries => 1,
            TileKind::Reviews => 2,
            TileKind::Support => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TileKind::Revenue => "Revenue Earned",
            TileKind::Deliveries => "Pending Deliveries",
            TileKind::Reviews => "Review Approval",
            TileKind::Support => "Awaiting Support",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            TileKind::Revenue => "$24,431",
            TileKind::Deliveries => "50",
            TileKind::Reviews => "10",
            TileKind::Support => "15",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TileKind::Revenue => "$",
            TileKind::Deliveries => "▣",
            TileKind::Reviews => "✎",
            TileKind::Support => "☏",
        }
    }

    pub fn next(&self) -> TileKind {
        TileKind::ALL[(self.index() + 1) % TileKind::ALL.len()]
    }

    pub fn prev(&self) -> TileKind {
        TileKind::ALL[(self.index() + TileKind::ALL.len() - 1) % TileKind::ALL.len()]
    }
}

/// Inline control attached to a tile row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileAction {
    /// The cog next to a review
    ReviewSettings(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileItem {
    pub id: String,
    pub label: String,
    pub stars: Option<u8>,
    pub action: Option<TileAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTile {
    pub kind: TileKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub headline: &'static str,
    pub items: Vec<TileItem>,
}

impl SummaryTile {
    pub fn named(kind: TileKind, records: &[NamedRecord]) -> Self {
        let items = records
            .iter()
            .map(|record| TileItem {
                id: record.id.clone(),
                label: record.name.clone(),
                stars: None,
                action: None,
            })
            .collect();
        Self::with_items(kind, items)
    }

    pub fn reviews(reviews: &[Review]) -> Self {
        let items = reviews
            .iter()
            .map(|review| TileItem {
                id: review.id().to_string(),
                label: review.product().to_string(),
                stars: Some(review.stars()),
                action: Some(TileAction::ReviewSettings(review.id().to_string())),
            })
            .collect();
        Self::with_items(TileKind::Reviews, items)
    }

    fn with_items(kind: TileKind, items: Vec<TileItem>) -> Self {
        Self {
            kind,
            label: kind.label(),
            icon: kind.icon(),
            headline: kind.headline(),
            items,
        }
    }

    /// Event raised by the inline control of row `index`, if it has one.
    pub fn activate(&self, index: usize) -> Option<DialogEvent> {
        match self.items.get(index)?.action.as_ref()? {
            TileAction::ReviewSettings(id) => Some(DialogEvent::SelectReview(id.clone())),
        }
    }
}

/// The four tiles in display order.
pub fn summary_tiles(store: &FixtureStore) -> [SummaryTile; 4] {
    [
        SummaryTile::named(TileKind::Revenue, store.customers()),
        SummaryTile::named(TileKind::Deliveries, store.deliveries()),
        SummaryTile::reviews(store.reviews()),
        SummaryTile::named(TileKind::Support, store.supports()),
    ]
}

/// `stars` repetitions of `glyph`, capped at `max` and at [`MAX_STARS`].
pub fn star_glyphs(stars: u8, glyph: char, max: u8) -> String {
    let count = stars.min(max).min(MAX_STARS) as usize;
    std::iter::repeat(glyph).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_follow_fixture_lists() {
        let store = FixtureStore::builtin().unwrap();
        let tiles = summary_tiles(&store);
        assert_eq!(tiles[0].items.len(), store.customers().len());
        assert_eq!(tiles[1].items.len(), store.deliveries().len());
        assert_eq!(tiles[2].items.len(), store.reviews().len());
        assert_eq!(tiles[3].items.len(), store.supports().len());
        for (tile, kind) in tiles.iter().zip(TileKind::ALL) {
            assert_eq!(tile.kind, kind);
        }
    }

    #[test]
    fn test_headlines_are_literals() {
        let tiles = summary_tiles(&FixtureStore::builtin().unwrap());
        let headlines: Vec<&str> = tiles.iter().map(|t| t.headline).collect();
        assert_eq!(headlines, ["$24,431", "50", "10", "15"]);
    }

    #[test]
    fn test_empty_list_gives_empty_tile() {
        let tile = SummaryTile::named(TileKind::Support, &[]);
        assert!(tile.items.is_empty());
        assert_eq!(tile.activate(0), None);
    }

    #[test]
    fn test_only_reviews_carry_actions() {
        let store = FixtureStore::builtin().unwrap();
        let tiles = summary_tiles(&store);
        assert_eq!(tiles[0].activate(0), None);
        assert_eq!(
            tiles[2].activate(1),
            Some(DialogEvent::SelectReview("222".to_string()))
        );
        assert_eq!(tiles[2].activate(7), None);
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(star_glyphs(4, '★', 5), "★★★★");
        assert_eq!(star_glyphs(0, '★', 5), "");
        assert_eq!(star_glyphs(5, '*', 3), "***");
        assert_eq!(star_glyphs(9, '*', 9).chars().count(), MAX_STARS as usize);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(TileKind::Support.next(), TileKind::Revenue);
        assert_eq!(TileKind::Revenue.prev(), TileKind::Support);
        assert_eq!(TileKind::Deliveries.next(), TileKind::Reviews);
    }
}
