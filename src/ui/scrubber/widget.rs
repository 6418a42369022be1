//! Rendering for the scrubber column and its bubble.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::Frame;

use crate::ui::theme::{BUBBLE_BORDER, INDEX_SELECTED_BG, INDEX_SELECTED_FG, INDEX_TEXT};

use super::layout::HitTest;
use super::state::ScrubberState;

pub const BUBBLE_WIDTH: u16 = 7;
pub const BUBBLE_HEIGHT: u16 = 3;

/// Gap between the bubble and the column.
const BUBBLE_MARGIN: u16 = 1;

/// The column of key rows.
///
/// Each cell shows the key whose row covers the cell's center, so a
/// pointer on a drawn label selects that label.
pub struct ScrubberWidget<'a> {
    state: &'a ScrubberState,
}

impl<'a> ScrubberWidget<'a> {
    pub fn new(state: &'a ScrubberState) -> Self {
        Self { state }
    }
}

impl Widget for ScrubberWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = self.state.layout();
        if layout.row_count() == 0 {
            return;
        }
        let keys = self.state.keys();
        let active = self.state.active_index();
        let cells = area.height.min(layout.column_height().ceil() as u16);

        let center_of = |cell: u16| f32::from(cell) + 0.5;
        // A selected key too short to cover any cell center borrows the cell
        // holding its own center.
        let borrowed_cell = active
            .filter(|&index| {
                !(0..cells).any(|cell| layout.hit_test(center_of(cell)) == HitTest::Row(index))
            })
            .and_then(|index| layout.row_center(index))
            .map(|center| center.floor() as u16);

        let mut last_drawn = None;
        for cell in 0..cells {
            let index = if borrowed_cell == Some(cell) {
                active
            } else {
                match layout.hit_test(center_of(cell)) {
                    HitTest::Row(index) => Some(index),
                    HitTest::Gap | HitTest::Outside => None,
                }
            };
            let Some((index, key)) = index.and_then(|index| keys.get(index).map(|key| (index, key)))
            else {
                continue;
            };

            let y = area.y + cell;
            let selected = active == Some(index);
            let style = if selected {
                Style::default()
                    .fg(INDEX_SELECTED_FG)
                    .bg(INDEX_SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(INDEX_TEXT)
            };
            if selected {
                buf.set_string(area.x, y, " ".repeat(area.width as usize), style);
            }
            if last_drawn == Some(index) {
                continue;
            }
            let label = key.label();
            let width = label.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            buf.set_string(x, y, label, style);
            last_drawn = Some(index);
        }
    }
}

/// Where the bubble goes: left of `column`, level with the active row.
pub fn bubble_rect(state: &ScrubberState, column: Rect) -> Option<Rect> {
    if !state.bubble_visible() {
        return None;
    }
    let index = state.active_index()?;
    let center = state.layout().row_center(index)?;

    let right = column.x.checked_sub(BUBBLE_MARGIN)?;
    let x = right.checked_sub(BUBBLE_WIDTH)?;
    let max_y = (column.y + column.height).saturating_sub(BUBBLE_HEIGHT);
    let y = (column.y + center.floor() as u16)
        .saturating_sub(BUBBLE_HEIGHT / 2)
        .clamp(column.y, max_y.max(column.y));

    Some(Rect {
        x,
        y,
        width: BUBBLE_WIDTH,
        height: BUBBLE_HEIGHT,
    })
}

/// Draw the enlarged preview of the active key, if visible.
pub fn render_bubble(frame: &mut Frame, state: &ScrubberState, column: Rect) {
    let Some(area) = bubble_rect(state, column) else {
        return;
    };
    let Some(key) = state.active_key() else {
        return;
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BUBBLE_BORDER));
    let label = Paragraph::new(key.label())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(INDEX_SELECTED_FG)
                .bg(INDEX_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);
    frame.render_widget(label, area);
}
