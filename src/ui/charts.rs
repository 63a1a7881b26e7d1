use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;

use crate::config::PanelVariant;
use crate::modules::charts::{
    category_bars, format_currency, region_rows, revenue_series, trend_series, CategoryBar,
    REGION_GRADIENT, REVENUE_COLOR,
};
use crate::store::FixtureStore;
use crate::ui::layout;
use crate::ui::widgets::MiniSparkline;

fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn draw_revenue_chart(f: &mut Frame, area: Rect, store: &FixtureStore) {
    let series = revenue_series(store.sales());
    let block = panel_block("Revenue");
    if series.points.is_empty() {
        f.render_widget(Paragraph::new("No sales data").block(block), area);
        return;
    }

    let last = series.points.len().saturating_sub(1);
    let x_labels: Vec<Span> = [0, last / 2, last]
        .into_iter()
        .filter_map(|i| series.labels.get(i))
        .map(|label| Span::raw(label.clone()))
        .collect();
    let y_max = (series.max * 1.1).max(1.0);

    let dataset = Dataset::default()
        .name("Revenue")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(REVENUE_COLOR.into()))
        .data(&series.points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Day")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("$0"),
                    Span::raw(format_currency(y_max / 2.0)),
                    Span::raw(format_currency(y_max)),
                ]),
        );
    f.render_widget(chart, area);
}

pub fn draw_category_chart(f: &mut Frame, area: Rect, store: &FixtureStore) {
    let block = panel_block("Category Percentage");
    let bars = category_bars(store.categories(), store.palette());
    if bars.is_empty() {
        f.render_widget(Paragraph::new("No categories").block(block), area);
        return;
    }

    let inner = layout::rect_inner(area);
    f.render_widget(block, area);

    let legend = legend_lines(&bars, inner.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(legend.len() as u16), Constraint::Min(0)])
        .split(inner);
    f.render_widget(Paragraph::new(legend), chunks[0]);

    let count = bars.len() as u16;
    let bar_width = (inner.width.saturating_sub(count) / count).clamp(1, 12);

    let bars: Vec<Bar> = bars
        .into_iter()
        .map(|bar| {
            let label: String = bar.name.chars().take(bar_width as usize).collect();
            Bar::default()
                .value(bar.value)
                .text_value(format!("{}%", bar.value))
                .label(Line::from(label))
                .style(Style::default().fg(bar.color))
                .value_style(Style::default().fg(Color::Black).bg(bar.color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    f.render_widget(chart, chunks[1]);
}

/// Swatch and full name per category, packed into as few lines of `width`
/// as possible. An entry is never split across lines.
fn legend_lines(bars: &[CategoryBar], width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for bar in bars {
        let entry = bar.name.chars().count() + 2;
        if used > 0 && used + 2 + entry > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw("  "));
            used += 2;
        }
        spans.push(Span::styled("■ ", Style::default().fg(bar.color)));
        spans.push(Span::raw(bar.name.clone()));
        used += entry;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

pub fn draw_panel(f: &mut Frame, area: Rect, store: &FixtureStore, panel: PanelVariant) {
    match panel {
        PanelVariant::Map => draw_region_panel(f, area, store),
        PanelVariant::Trends => draw_trend_panel(f, area, store),
    }
}

/// Region revenue as shaded rows with proportional bars.
fn draw_region_panel(f: &mut Frame, area: Rect, store: &FixtureStore) {
    let block = panel_block(PanelVariant::Map.title());
    let rows = region_rows(store.regions(), REGION_GRADIENT);
    let inner = layout::rect_inner(area);
    f.render_widget(block, area);

    let max = rows.iter().map(|r| r.value).fold(0.0, f64::max);
    let bar_room = inner.width.saturating_sub(16) as f64;
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let filled = if max > 0.0 {
                ((row.value / max) * bar_room).round() as usize
            } else {
                0
            };
            Line::from(vec![
                Span::raw(format!("{:<6} ", row.region_code)),
                Span::styled("█".repeat(filled), Style::default().fg(row.color)),
                Span::raw(format!(" {}", format_currency(row.value))),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_trend_panel(f: &mut Frame, area: Rect, store: &FixtureStore) {
    let block = panel_block(PanelVariant::Trends.title());
    let inner = layout::rect_inner(area);
    f.render_widget(block, area);

    let trends = trend_series(store.categories());
    let constraints: Vec<Constraint> = trends
        .iter()
        .map(|_| Constraint::Length(1))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (name, recent)) in trends.iter().enumerate() {
        let row = rows[i];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(1)])
            .split(row);
        f.render_widget(Paragraph::new(*name), cols[0]);
        f.render_widget(
            MiniSparkline::new(recent).style(Style::default().fg(store.palette().color_at(i))),
            cols[1],
        );
    }
}
