use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::modules::review_dialog::DialogEvent;
use crate::modules::tiles::TileKind;

/// Rows above a tile's list: headline, then a spacer.
pub const TILE_HEADER_ROWS: u16 = 2;

/// Columns at the right edge of a review row holding its cog control.
pub const COG_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub tiles: [Rect; 4],
    pub revenue: Rect,
    pub panel: Rect,
    pub categories: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(size);

    let tile_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(vertical[1]);

    let chart_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[2]);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chart_rows[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[3]);

    UiAreas {
        size,
        header: vertical[0],
        tiles: [tile_chunks[0], tile_chunks[1], tile_chunks[2], tile_chunks[3]],
        revenue: chart_rows[0],
        panel: bottom_chunks[0],
        categories: bottom_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// The part of a tile below its headline where the item list is drawn.
pub fn tile_list_area(tile: Rect) -> Rect {
    let inner = rect_inner(tile);
    Rect {
        x: inner.x,
        y: inner.y.saturating_add(TILE_HEADER_ROWS),
        width: inner.width,
        height: inner.height.saturating_sub(TILE_HEADER_ROWS),
    }
}

/// Review rows show stars above the product name.
pub fn item_height(kind: TileKind) -> u16 {
    match kind {
        TileKind::Reviews => 2,
        _ => 1,
    }
}

/// First visible row of a list whose selection is kept on screen.
pub fn list_offset(selected: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if selected >= visible {
        selected - (visible - 1)
    } else {
        0
    }
}

/// Where a click inside a tile landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHit {
    pub kind: TileKind,
    /// List row under the pointer, counted from the top of the list (not the
    /// viewport). `None` for the border and headline.
    pub row: Option<usize>,
    /// True on the cog of a review row's first line.
    pub on_cog: bool,
}

/// Resolve a click at (`col`, `row`) against the tiles drawn in `areas`.
/// `selections` must be the same ones the frame was drawn with, since they
/// decide how far each list is scrolled.
pub fn hit_test(areas: &UiAreas, selections: &[usize; 4], col: u16, row: u16) -> Option<TileHit> {
    let (kind, rect) = TileKind::ALL
        .into_iter()
        .zip(areas.tiles)
        .find(|(_, rect)| rect_contains(*rect, col, row))?;

    let list = tile_list_area(rect);
    if !rect_contains(list, col, row) {
        return Some(TileHit {
            kind,
            row: None,
            on_cog: false,
        });
    }

    let height = item_height(kind);
    let visible = (list.height / height).max(1) as usize;
    let offset = list_offset(selections[kind.index()], visible);
    let line = row - list.y;
    let first_line = line % height == 0;
    let on_cog = kind == TileKind::Reviews
        && first_line
        && col >= list.x + list.width.saturating_sub(COG_WIDTH);

    Some(TileHit {
        kind,
        row: Some(offset + (line / height) as usize),
        on_cog,
    })
}

pub const DIALOG_DENY: &str = "[ Deny ]";
pub const DIALOG_APPROVE: &str = "[ Approve ]";
pub const DIALOG_CLOSE: &str = "[x]";

/// Geometry of the review dialog: the popup, its text body, and the three
/// clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogControls {
    pub popup: Rect,
    pub body: Rect,
    pub deny: Rect,
    pub approve: Rect,
    pub close: Rect,
}

pub fn dialog_controls(size: Rect) -> DialogControls {
    let popup = centered_rect(60, 50, size);
    let inner = rect_inner(popup);
    let button_y = inner.y + inner.height.saturating_sub(1);
    let button_height = inner.height.min(1);

    let approve_width = (DIALOG_APPROVE.len() as u16).min(inner.width);
    let approve = Rect {
        x: inner.x + inner.width - approve_width,
        y: button_y,
        width: approve_width,
        height: button_height,
    };
    let deny_width = (DIALOG_DENY.len() as u16).min(approve.x - inner.x);
    let deny = Rect {
        x: approve.x.saturating_sub(deny_width + 2).max(inner.x),
        y: button_y,
        width: deny_width,
        height: button_height,
    };
    let close_width = (DIALOG_CLOSE.len() as u16).min(popup.width.saturating_sub(2));
    let close = Rect {
        x: popup.x + popup.width.saturating_sub(close_width + 1),
        y: popup.y,
        width: close_width,
        height: popup.height.min(1),
    };
    let body = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };

    DialogControls {
        popup,
        body,
        deny,
        approve,
        close,
    }
}

/// Dialog event for a click on one of its controls.
pub fn dialog_hit(controls: &DialogControls, col: u16, row: u16) -> Option<DialogEvent> {
    if rect_contains(controls.approve, col, row) {
        Some(DialogEvent::Approve)
    } else if rect_contains(controls.deny, col, row) {
        Some(DialogEvent::Deny)
    } else if rect_contains(controls.close, col, row) {
        Some(DialogEvent::Dismiss)
    } else {
        None
    }
}

/// Centered popup of the given percentage size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
