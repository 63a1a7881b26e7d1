//! Single-line sparkline for category trends

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A compact inline sparkline. Values are scaled between the series minimum
/// and maximum so small movements around a large base stay visible.
pub struct MiniSparkline<'a> {
    data: &'a [u64],
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.data.is_empty() {
            return;
        }

        for (i, ch) in sparkline_text(self.data, area.width as usize).chars().enumerate() {
            let x = area.x + i as u16;
            buf.get_mut(x, area.y).set_char(ch).set_style(self.style);
        }
    }
}

/// Render the last `width` values as bar characters.
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    if data.is_empty() || width == 0 {
        return String::new();
    }

    let data_len = data.len().min(width);
    let window = &data[data.len() - data_len..];
    let min = window.iter().copied().min().unwrap_or(0);
    let max = window.iter().copied().max().unwrap_or(0);
    let span = max - min;

    window
        .iter()
        .map(|&value| {
            if span == 0 {
                return BAR_CHARS[3];
            }
            let scaled = (((value - min) as f64 / span as f64) * 7.0).round() as usize;
            BAR_CHARS[scaled.min(7)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_text_spans_range() {
        let text = sparkline_text(&[10, 12, 14, 24], 8);
        assert_eq!(text.chars().count(), 4);
        assert_eq!(text.chars().next(), Some('▁'));
        assert_eq!(text.chars().last(), Some('█'));
    }

    #[test]
    fn test_sparkline_text_keeps_latest() {
        let text = sparkline_text(&[1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(text.chars().count(), 3);
        assert_eq!(text.chars().last(), Some('█'));
    }

    #[test]
    fn test_flat_series_is_mid_height() {
        assert_eq!(sparkline_text(&[15, 15, 15], 8), "▄▄▄");
    }

    #[test]
    fn test_sparkline_text_empty() {
        assert!(sparkline_text(&[], 8).is_empty());
        assert!(sparkline_text(&[1, 2], 0).is_empty());
    }
}
