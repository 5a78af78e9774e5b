//! Tape pane rendering as a hex dump
//!
//! Each row shows eight cells as hex bytes followed by their printable
//! characters. The cell under the data pointer is highlighted in both columns.
//! While following, the view scrolls so the pointer row stays visible.

use super::utils::{border_style, printable_char};
use crate::memory::tape::Tape;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const CELLS_PER_ROW: usize = 8;

/// Scroll state for the tape pane
pub struct TapeScrollState {
    pub offset: usize,
    /// Keep the data pointer row in view
    pub follow: bool,
}

impl TapeScrollState {
    pub fn new() -> Self {
        TapeScrollState {
            offset: 0,
            follow: true,
        }
    }
}

impl Default for TapeScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the tape pane
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    tape: &Tape,
    is_focused: bool,
    scroll_state: &mut TapeScrollState,
) {
    let pointer = tape.pointer();
    let block = Block::default()
        .title(format!(
            " Tape  dp={} cell={} ",
            pointer,
            tape.cells().get(pointer).copied().unwrap_or(0)
        ))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let total_rows = tape.len().div_ceil(CELLS_PER_ROW);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let pointer_row = pointer / CELLS_PER_ROW;

    if scroll_state.follow {
        if pointer_row < scroll_state.offset {
            scroll_state.offset = pointer_row;
        } else if pointer_row >= scroll_state.offset + visible_height {
            scroll_state.offset = pointer_row + 1 - visible_height;
        }
    }
    scroll_state.offset = scroll_state
        .offset
        .min(total_rows.saturating_sub(visible_height));

    let pointer_style = Style::default()
        .bg(DEFAULT_THEME.pointer)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = (scroll_state.offset..total_rows)
        .take(visible_height)
        .map(|row| {
            let start = row * CELLS_PER_ROW;
            let end = (start + CELLS_PER_ROW).min(tape.len());
            let cells = &tape.cells()[start..end];

            let mut spans = vec![
                Span::styled(
                    format!("{:04x}", start),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::raw(" │ "),
            ];

            for (i, &value) in cells.iter().enumerate() {
                let style = if start + i == pointer {
                    pointer_style
                } else if value == 0 {
                    Style::default().fg(DEFAULT_THEME.zero_cell)
                } else {
                    Style::default().fg(DEFAULT_THEME.fg)
                };
                spans.push(Span::styled(format!("{:02x}", value), style));
                spans.push(Span::raw(" "));
            }
            // Pad a short final row so the character column lines up
            for _ in cells.len()..CELLS_PER_ROW {
                spans.push(Span::raw("   "));
            }

            spans.push(Span::raw("│ "));
            for (i, &value) in cells.iter().enumerate() {
                let style = if start + i == pointer {
                    pointer_style
                } else {
                    Style::default().fg(DEFAULT_THEME.io)
                };
                spans.push(Span::styled(printable_char(value).to_string(), style));
            }

            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
