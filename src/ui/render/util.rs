use lipgloss::Style;

pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, per: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > per {
        normalized.truncate(per);
    } else {
        while normalized.len() < per {
            normalized.push(line_style.render(""));
        }
    }
    normalized.join("\n")
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Truncate-or-pad to exactly `width` characters.
pub fn pad_cell(s: &str, width: usize) -> String {
    let mut out = truncate_chars(s, width);
    let len = out.chars().count();
    for _ in len..width {
        out.push(' ');
    }
    out
}
