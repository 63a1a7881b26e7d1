use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod charts;
pub mod layout;
pub mod tiles;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::config::Config;
use crate::domain::Review;
use crate::modules::tiles::star_glyphs;

pub const TITLE: &str = "The Wonderful World Of Camping Admin";

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);

    let tiles = app.tiles();
    for (tile, area) in tiles.iter().zip(areas.tiles) {
        let focused = app.focus == tile.kind && !app.dialog.is_open();
        let selected = app.selections[tile.kind.index()];
        tiles::draw_tile(f, area, tile, focused, selected, &app.config);
    }

    charts::draw_revenue_chart(f, areas.revenue, app.fixtures);
    charts::draw_panel(f, areas.panel, app.fixtures, app.panel);
    charts::draw_category_chart(f, areas.categories, app.fixtures);

    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if let Some(review) = app.dialog.review() {
        draw_review_dialog(f, areas.size, review, &app.config);
    }
    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled("≡ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let panel = Line::from(vec![
        Span::styled("Panel ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.panel.title()),
    ]);
    f.render_widget(
        Paragraph::new(panel).alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let color = match level {
                StatusLevel::Info => Color::Green,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
        }
        None => Line::from(vec![
            Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}  ", app.focus.label())),
            Span::styled("Reviews ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.fixtures.reviews().len().to_string()),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(": ", Style::default().fg(Color::Yellow)),
            Span::raw(app.command.input.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        InputMode::Normal if app.dialog.is_open() => hint_line(&[
            ("a", "Approve"),
            ("d", "Deny"),
            ("Esc", "Close"),
        ]),
        InputMode::Normal => hint_line(&[
            ("Tab", "Tile"),
            ("j/k", "Move"),
            ("Enter", "Review"),
            ("v", "Map/Trends"),
            ("e", "Export"),
            (":", "Command"),
            ("?", "Help"),
            ("q", "Quit"),
        ]),
    };
    f.render_widget(Paragraph::new(content), area);
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::LightCyan)));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Line::from(spans)
}

/// The approve/deny dialog for `review`, centered in `area`. Controls are
/// placed by [`layout::dialog_controls`] so clicks can be matched to them.
pub fn draw_review_dialog(f: &mut Frame, area: Rect, review: &Review, config: &Config) {
    let controls = layout::dialog_controls(area);
    f.render_widget(Clear, controls.popup);
    f.render_widget(
        Block::default()
            .title(" Please review ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
        controls.popup,
    );

    let lines = vec![
        Line::from(Span::styled(
            review.product().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            star_glyphs(review.stars(), config.star_glyph, config.max_stars),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(review.text().to_string()),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        controls.body,
    );

    f.render_widget(
        Paragraph::new(Span::styled(layout::DIALOG_DENY, Style::default().fg(Color::LightRed))),
        controls.deny,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            layout::DIALOG_APPROVE,
            Style::default().fg(Color::LightGreen),
        )),
        controls.approve,
    );
    f.render_widget(
        Paragraph::new(Span::styled(layout::DIALOG_CLOSE, Style::default().fg(Color::Gray))),
        controls.close,
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = layout::centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  Tab / S-Tab  Cycle tiles"),
        Line::from("  j / k        Move selection"),
        Line::from("  Enter / c    Open review settings"),
        Line::from("  Mouse        Click a row, or a review's cog"),
        Line::from(""),
        Line::from("Review dialog"),
        Line::from("  a            Approve"),
        Line::from("  d            Deny"),
        Line::from("  Esc / x      Close"),
        Line::from("  Mouse        [ Deny ], [ Approve ], [x]"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  v            Toggle map / trends"),
        Line::from("  e            Export snapshot"),
        Line::from("  :            Command line (Up recalls the last)"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("Commands: review <id>, approve, deny, dismiss,"),
        Line::from("          map, trends, export, help, quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}


#[cfg(test)]
mod tests {
    use super::test_support::{buffer_text, render};
    use super::*;
    use crate::modules::review_dialog::DialogEvent;
    use crate::modules::tiles::TileKind;
    use crate::store::FixtureStore;

    #[test]
    fn test_dialog_shows_review_fields() {
        let review = Review::new("111", "Tent", "Amazing tent", 4).unwrap();
        let config = Config::default();
        let text = buffer_text(&render(80, 24, |f| {
            let area = f.size();
            draw_review_dialog(f, area, &review, &config)
        }));
        assert!(text.contains("Please review"));
        assert!(text.contains("Tent"));
        assert!(text.contains("Amazing tent"));
        assert_eq!(text.matches('★').count(), 4);
        assert!(text.contains(layout::DIALOG_APPROVE));
        assert!(text.contains(layout::DIALOG_DENY));
    }

    fn text_at(buffer: &ratatui::buffer::Buffer, rect: Rect) -> String {
        (rect.x..rect.x + rect.width)
            .map(|x| buffer.get(x, rect.y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_dialog_controls_drawn_where_clicks_land() {
        let review = Review::new("111", "Tent", "Amazing tent", 4).unwrap();
        let config = Config::default();
        let buffer = render(80, 24, |f| {
            let area = f.size();
            draw_review_dialog(f, area, &review, &config)
        });
        let controls = layout::dialog_controls(Rect::new(0, 0, 80, 24));
        assert_eq!(text_at(&buffer, controls.approve), layout::DIALOG_APPROVE);
        assert_eq!(text_at(&buffer, controls.deny), layout::DIALOG_DENY);
        assert_eq!(text_at(&buffer, controls.close), layout::DIALOG_CLOSE);
    }

    #[test]
    fn test_review_cog_drawn_where_hit_test_expects() {
        let store = FixtureStore::builtin().unwrap();
        let app = App::new(&store, Config::default());
        let size = Rect::new(0, 0, 120, 40);
        let buffer = render(size.width, size.height, |f| draw(f, &app));

        let areas = layout::areas(size);
        let list = layout::tile_list_area(areas.tiles[TileKind::Reviews.index()]);
        for row in 0..store.reviews().len() as u16 {
            let y = list.y + row * layout::item_height(TileKind::Reviews);
            let cog = Rect::new(list.x + list.width - layout::COG_WIDTH, y, layout::COG_WIDTH, 1);
            assert_eq!(text_at(&buffer, cog), tiles::COG);
            let hit = layout::hit_test(&areas, &app.selections, cog.x + 1, y).unwrap();
            assert!(hit.on_cog);
            assert_eq!(hit.row, Some(row as usize));
        }
    }

    #[test]
    fn test_dashboard_names_every_category() {
        let store = FixtureStore::builtin().unwrap();
        let app = App::new(&store, Config::default());
        for (width, height) in [(120, 40), (160, 48)] {
            let text = buffer_text(&render(width, height, |f| draw(f, &app)));
            for category in store.categories() {
                assert!(
                    text.contains(&category.name),
                    "{width}x{height} missing {}",
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_full_dashboard_renders() {
        let store = FixtureStore::builtin().unwrap();
        let app = App::new(&store, Config::default());
        let text = buffer_text(&render(140, 44, |f| draw(f, &app)));
        assert!(text.contains(TITLE));
        for label in ["Revenue Earned", "Pending Deliveries", "Review Approval", "Awaiting Support"]
        {
            assert!(text.contains(label), "missing tile {label}");
        }
        assert!(text.contains("$24,431"));
        assert!(text.contains("Amy Alpine"));
        assert!(text.contains("Revenue Per State"));
        assert!(!text.contains("Please review"));
    }

    #[test]
    fn test_dashboard_shows_dialog_when_open() {
        let store = FixtureStore::builtin().unwrap();
        let mut app = App::new(&store, Config::default());
        app.handle_dialog(DialogEvent::SelectReview("222".into()));
        let text = buffer_text(&render(140, 44, |f| draw(f, &app)));
        assert!(text.contains("Please review"));
        assert!(text.contains("Hiking Shoes"));
    }
}
