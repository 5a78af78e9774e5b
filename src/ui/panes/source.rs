//! Source code pane rendering with opcode highlighting
//!
//! Every byte of the program is one instruction, so the instruction pointer
//! is shown as a single highlighted character rather than a whole line. The
//! line holding it gets the current-line background, and the view scrolls to
//! keep that line at a fixed visual row while stepping.

use super::utils::{border_style, line_starts, locate, printable_char};
use crate::interpreter::history::BREAKPOINT;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Style for one source byte, by opcode class
fn opcode_style(byte: u8, set_zero: bool) -> Style {
    match byte {
        b'>' | b'<' => Style::default().fg(DEFAULT_THEME.pointer_move),
        b'+' | b'-' => Style::default().fg(DEFAULT_THEME.arithmetic),
        b',' | b'.' => Style::default()
            .fg(DEFAULT_THEME.io)
            .add_modifier(Modifier::BOLD),
        b'[' | b']' => Style::default().fg(DEFAULT_THEME.primary),
        b'0' if set_zero => Style::default().fg(DEFAULT_THEME.arithmetic),
        BREAKPOINT => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.comment), // Comments
    }
}

/// Scroll state for the source pane
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

impl SourceScrollState {
    pub fn new() -> Self {
        SourceScrollState {
            offset: 0,
            target_line_row: None,
        }
    }
}

impl Default for SourceScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &[u8],
    ip: usize,
    set_zero: bool,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let starts = line_starts(source);
    let total_lines = starts.len();
    let (current_line, current_col) = locate(&starts, ip.min(source.len()));
    let halted = ip >= source.len();

    // Calculate visible range
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Calculate scroll offset to keep current line at target visual row
    scroll_state.offset = current_line.saturating_sub(target_row);
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = (scroll_state.offset..total_lines)
        .take(visible_height)
        .map(|line_idx| {
            let start = starts[line_idx];
            let end = starts
                .get(line_idx + 1)
                .map(|next| next - 1) // drop the '\n'
                .unwrap_or(source.len());
            let is_current = line_idx == current_line;

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };
            let mut spans = vec![Span::styled(format!("{:4} ", line_idx + 1), num_style)];

            for (col, &byte) in source[start..end].iter().enumerate() {
                let mut style = opcode_style(byte, set_zero);
                if is_current {
                    style = style.bg(DEFAULT_THEME.current_line_bg);
                }
                if is_current && col == current_col && !halted {
                    style = Style::default()
                        .bg(DEFAULT_THEME.pointer)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD);
                }
                let ch = if byte.is_ascii_control() { ' ' } else { printable_char(byte) };
                spans.push(Span::styled(ch.to_string(), style));
            }

            if is_current && halted {
                spans.push(Span::styled(
                    " ■",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
