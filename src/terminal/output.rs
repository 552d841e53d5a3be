//! Terminal output utilities.
//!
//! Box drawing for help and listings, ANSI reset.

use std::io::{self, Write};

use crossterm::execute;
use crossterm::style::ResetColor;

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Restore default colours on stdout.
pub fn reset_terminal() {
    let _ = execute!(io::stdout(), ResetColor);
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    println!("{}", top_line(title));
}

fn top_line(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

fn content_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Print text over as many box lines as it needs, breaking between words.
pub fn box_text(content: &str) {
    for line in text_lines(content) {
        println!("{line}");
    }
}

pub fn text_lines(content: &str) -> Vec<String> {
    wrap(content, BOX_WIDTH - 4)
        .iter()
        .map(|line| content_line(line))
        .collect()
}

/// Greedy word wrap. Always yields at least one (possibly empty) line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a flag and its description, wrapping the description column.
pub fn box_opt(flag: &str, desc: &str) {
    for line in opt_lines(flag, desc) {
        println!("{line}");
    }
}

fn opt_lines(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);
    let wrapped = wrap(desc, desc_col);

    let indent = " ".repeat(flag_col);
    wrapped
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { flag_padded.as_str() } else { indent.as_str() };
            let padding = desc_col.saturating_sub(text.len());
            format!("│ {}{}{} │", lead, text, " ".repeat(padding))
        })
        .collect()
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
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
        assert_eq!(console_width("\x1b[33mabc\x1b[0m"), 3);
        assert_eq!(console_width("│ x"), 3);
    }

    #[test]
    fn lines_fill_box_width() {
        assert_eq!(top_line("Title").chars().count(), BOX_WIDTH);
        assert_eq!(top_line("").chars().count(), BOX_WIDTH);
        assert_eq!(content_line("hello").chars().count(), BOX_WIDTH);
    }

    #[test]
    fn long_descriptions_wrap() {
        let desc = "word ".repeat(30);
        let lines = opt_lines("  -x, --example", &desc);
        assert!(lines.len() > 1);
        for line in &lines {
            assert_eq!(line.chars().count(), BOX_WIDTH);
        }
        assert_eq!(opt_lines("-y", "").len(), 1);
    }

    #[test]
    fn long_text_wraps_inside_the_box() {
        let text = "Secret word or phrase used to authenticate access to a system or account";
        assert!(text.len() > BOX_WIDTH - 4);
        let lines = text_lines(text);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.chars().count(), BOX_WIDTH, "{:?}", line);
        }
        assert!(lines[1].starts_with("│ account"));
        assert_eq!(text_lines("short"), vec![content_line("short")]);
    }
}
