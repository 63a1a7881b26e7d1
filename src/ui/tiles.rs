use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::config::Config;
use crate::modules::tiles::{star_glyphs, SummaryTile, TileItem, TileKind};
use crate::ui::layout::{self, COG_WIDTH};

pub const COG: &str = "[⚙]";

/// One list entry per tile item. Review rows are two lines: stars with the
/// cog control, then the product.
pub fn tile_list_items(tile: &SummaryTile, width: u16, config: &Config) -> Vec<ListItem<'static>> {
    tile.items
        .iter()
        .map(|item| tile_list_item(tile.kind, item, width, config))
        .collect()
}

fn tile_list_item(kind: TileKind, item: &TileItem, width: u16, config: &Config) -> ListItem<'static> {
    let marker = match kind {
        TileKind::Revenue | TileKind::Support => "☺ ",
        TileKind::Deliveries => "▤ ",
        TileKind::Reviews => "",
    };

    let Some(stars) = item.stars else {
        return ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::DarkGray)),
            Span::styled(item.label.clone(), Style::default().fg(Color::LightBlue)),
        ]));
    };

    let glyphs = star_glyphs(stars, config.star_glyph, config.max_stars);
    let mut first = vec![Span::styled(glyphs.clone(), Style::default().fg(Color::Yellow))];
    if item.action.is_some() {
        let used = glyphs.chars().count() as u16;
        let pad = width.saturating_sub(used + COG_WIDTH) as usize;
        first.push(Span::raw(" ".repeat(pad)));
        first.push(Span::styled(COG, Style::default().fg(Color::Gray)));
    }
    ListItem::new(Text::from(vec![
        Line::from(first),
        Line::from(Span::styled(
            item.label.clone(),
            Style::default().fg(Color::LightBlue),
        )),
    ]))
}

pub fn draw_tile(
    f: &mut Frame,
    area: Rect,
    tile: &SummaryTile,
    focused: bool,
    selected: usize,
    config: &Config,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} {} ", tile.icon, tile.label))
        .border_style(border_style);
    f.render_widget(block, area);

    let inner = layout::rect_inner(area);
    if inner.height == 0 {
        return;
    }
    let headline = Paragraph::new(Line::from(Span::styled(
        tile.headline,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right);
    f.render_widget(headline, Rect { height: 1, ..inner });

    let list_area = layout::tile_list_area(area);
    let items = tile_list_items(tile, list_area.width, config);
    let highlight_style = if focused {
        Style::default().bg(Color::Rgb(30, 30, 55)).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight_style);

    let mut state = ListState::default();
    if !tile.items.is_empty() {
        state.select(Some(selected.min(tile.items.len() - 1)));
    }
    f.render_stateful_widget(list, list_area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NamedRecord, Review};
    use crate::ui::test_support::{buffer_text, render};

    #[test]
    fn test_list_items_match_input() {
        let config = Config::default();
        let records: Vec<NamedRecord> = (0..7)
            .map(|i| NamedRecord::new(i.to_string(), format!("Camper {i}")))
            .collect();
        let tile = SummaryTile::named(TileKind::Support, &records);
        assert_eq!(tile_list_items(&tile, 20, &config).len(), 7);

        let empty = SummaryTile::named(TileKind::Support, &[]);
        assert!(tile_list_items(&empty, 20, &config).is_empty());
    }

    #[test]
    fn test_review_rows_are_two_lines() {
        let reviews = vec![Review::new("1", "Tent", "ok", 3).unwrap()];
        let tile = SummaryTile::reviews(&reviews);
        let items = tile_list_items(&tile, 20, &Config::default());
        assert_eq!(items[0].height(), 2);
    }

    #[test]
    fn test_review_tile_renders_stars_and_cog() {
        let reviews = vec![Review::new("1", "Tent", "ok", 3).unwrap()];
        let tile = SummaryTile::reviews(&reviews);
        let config = Config::default();
        let text = buffer_text(&render(30, 13, |f| {
            let area = f.size();
            draw_tile(f, area, &tile, true, 0, &config)
        }));
        assert_eq!(text.matches('★').count(), 3);
        assert!(text.contains('⚙'));
        assert!(text.contains("Tent"));
        assert!(text.contains("10"));
    }

    #[test]
    fn test_empty_tile_renders() {
        let tile = SummaryTile::named(TileKind::Deliveries, &[]);
        let config = Config::default();
        let text = buffer_text(&render(30, 13, |f| {
            let area = f.size();
            draw_tile(f, area, &tile, false, 3, &config)
        }));
        assert!(text.contains("Pending Deliveries"));
        assert!(text.contains("50"));
    }
}
