use unicode_width::UnicodeWidthStr;

/// Hard-wraps `s` at `width` display columns, keeping existing line breaks
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    s.lines()
        .map(|line| {
            let mut wrapped = String::new();
            let mut column = 0;
            for c in line.chars() {
                let w = c.to_string().width();
                if column + w > width && column > 0 {
                    wrapped.push('\n');
                    column = 0;
                }
                wrapped.push(c);
                column += w;
            }
            wrapped
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keeps at most `max_height` lines, replacing the overflow with an ellipsis line
pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() <= max_height {
        return s.to_string();
    }
    if max_height == 1 {
        return String::from("...");
    }
    format!("{}\n...", lines[..max_height - 1].join("\n"))
}

/// Deck text comes from user files; escape sequences must not reach the terminal
pub fn sanitize(s: &str) -> String {
    let stripped = strip_ansi_escapes::strip(s);
    String::from_utf8_lossy(&stripped)
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

/// Display width in terminal columns
pub fn display_width(s: &str) -> usize {
    s.width()
}
