//! Terminal output utilities.
//!
//! Box drawing, wrapping, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_warning(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Horizontal rule inside a box.
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content      │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(display_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// │   content    │
pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(display_width(content));
    let left = total / 2;
    println!(
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    );
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Label followed by text that wraps onto indented continuation lines.
pub fn box_wrapped(label: &str, text: &str) {
    let indent = " ".repeat(display_width(label));
    let lines = wrap(text, INNER_WIDTH.saturating_sub(indent.len()).max(1));

    match lines.split_first() {
        None => box_line(label),
        Some((first, rest)) => {
            box_line(&format!("{label}{first}"));
            for line in rest {
                box_line(&format!("{indent}{line}"));
            }
        }
    }
}

/// Help option row: flag column then a wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 24;
    let desc_col = INNER_WIDTH - FLAG_COL;

    let flag_padded = format!("{:<width$}", flag, width = FLAG_COL);
    let lines = wrap(desc, desc_col);
    let indent = " ".repeat(FLAG_COL);

    for (i, line) in lines.iter().enumerate() {
        let lead = if i == 0 { flag_padded.as_str() } else { indent.as_str() };
        box_line(&format!("{lead}{line}"));
    }
    if lines.is_empty() {
        box_line(&flag_padded);
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let len = current.chars().count();
        if len > 0 && len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Printable width, skipping ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(display_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(display_width("héllo"), 5);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 5), Vec::<String>::new());
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("ab abcdefgh", 3), vec!["ab", "abc", "def", "gh"]);
    }
}
