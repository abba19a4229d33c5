use crate::ui::model::{Model, DEFAULT_WIDTH, HEADER_BLOCK_LINES};
use crate::ui::render::styles::{STYLE_DESC, STYLE_ERR, STYLE_HEADER_BOX, STYLE_TITLE};
use crate::ui::render::util::truncate_chars;

/// Boxed header: application title plus the current catalog status, the
/// refresh progress indicator, or the last error.
pub fn render_header_block(m: &Model) -> Vec<String> {
    let box_width = if m.screen_width >= 2 {
        m.screen_width - 2
    } else {
        DEFAULT_WIDTH
    };

    let title = "kiosk";
    let mut rest = if m.err.is_empty() {
        m.status.clone()
    } else {
        m.err.clone()
    };
    if m.refreshing {
        rest.push_str(" · refreshing…");
    }
    // box padding is 1 per side, plus the separator after the title
    let budget = box_width.saturating_sub(title.chars().count() + 5);
    let rest = truncate_chars(&rest, budget);
    let rest_styled = if m.err.is_empty() {
        STYLE_DESC.render(&rest)
    } else {
        STYLE_ERR.render(&rest)
    };

    let inner = format!("{} · {}", STYLE_TITLE.render(title), rest_styled);
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let block = STYLE_HEADER_BOX.clone().width(w_i32).render(&inner);
    let mut out: Vec<String> = block.lines().map(|s| s.to_string()).collect();
    // Ensure the header occupies exactly HEADER_BLOCK_LINES lines by truncating or padding with empty lines.
    out.truncate(HEADER_BLOCK_LINES);
    while out.len() < HEADER_BLOCK_LINES {
        out.push(String::new());
    }
    out
}
