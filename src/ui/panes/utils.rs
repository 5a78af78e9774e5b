use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Single-column rendering of a byte: itself if printable, `.` otherwise
pub(crate) fn printable_char(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}

/// Split `source` into lines, returning the byte offset each line starts at
pub(crate) fn line_starts(source: &[u8]) -> Vec<usize> {
    let mut starts = vec![0];
    for (pos, &byte) in source.iter().enumerate() {
        if byte == b'\n' {
            starts.push(pos + 1);
        }
    }
    starts
}

/// 0-based (line, column) of byte offset `pos`; offsets past the end land
/// after the last character
pub(crate) fn locate(starts: &[usize], pos: usize) -> (usize, usize) {
    let line = match starts.binary_search(&pos) {
        Ok(line) => line,
        Err(next) => next.saturating_sub(1),
    };
    (line, pos - starts[line])
}

/// Split output bytes into display lines; a trailing newline adds no empty line
pub(crate) fn output_lines(output: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = output
        .split(|&byte| byte == b'\n')
        .map(|line| {
            line.iter()
                .filter(|&&byte| byte != b'\r')
                .map(|&byte| printable_char(byte))
                .collect()
        })
        .collect();
    if lines.last().is_some_and(|s| s.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_positions() {
        let starts = line_starts(b"++\n[-]\n.");
        assert_eq!(starts, vec![0, 3, 7]);
        assert_eq!(locate(&starts, 0), (0, 0));
        assert_eq!(locate(&starts, 2), (0, 2));
        assert_eq!(locate(&starts, 4), (1, 1));
        assert_eq!(locate(&starts, 7), (2, 0));
        assert_eq!(locate(&starts, 8), (2, 1));
    }

    #[test]
    fn test_output_lines() {
        assert_eq!(output_lines(b"hi\nthere\n"), vec!["hi", "there"]);
        assert_eq!(output_lines(&[1, b'a']), vec![".a"]);
        assert!(output_lines(b"").is_empty());
    }
}
