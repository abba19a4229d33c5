use crate::ui::model::{Model, SelectionMode, DEFAULT_WIDTH};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

pub fn render_modeline(m: &Model, inner_max: usize, mode: &str) -> String {
    // Build styled pairs, compute plain widths, and fit the right-hand
    // summary into available space.
    let total_pages = m.total_pages();

    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let sum_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    // key/description pairs definitions
    let pairs_def: Vec<(&str, &str)> = vec![
        ("r", "refresh"),
        ("g", "layout"),
        ("s", "select"),
        ("e", "empty"),
        ("c", "clear"),
    ];

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();

    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    // right-hand summary: selection count and pagination
    let mut sum_parts_plain: Vec<String> = Vec::new();
    if m.selection_mode != SelectionMode::None {
        sum_parts_plain.push(format!("{} sel", m.selected_count()));
    }
    if total_pages > 1 {
        sum_parts_plain.push(format!("Page {}/{} ↑/↓", m.page + 1, total_pages));
    }
    let mut sum_plain = sum_parts_plain.join("  ");
    let mut sum_rendered = if sum_plain.is_empty() {
        String::new()
    } else {
        sum_style.render(&sum_plain)
    };
    let mut sum_width = sum_plain.chars().count();

    // Start with all pairs and compute left width
    let mut pairs_count = pairs.len();
    let mut left_joined_rendered = pairs
        .iter()
        .map(|(r, _)| r.clone())
        .collect::<Vec<_>>()
        .join(&pair_sep_rendered);
    let mut left_width =
        pairs.iter().map(|(_, w)| *w).sum::<usize>() + pair_sep_width * (pairs_count - 1);

    // mode and separator widths (mode has padding of 2 chars in modeStyle)
    let mode_len = mode.chars().count();
    let mode_padding = 2usize; // Padding(0,1) adds 1 left + 1 right
    let mode_w = mode_len + mode_padding;
    let sep_w = " | ".chars().count();

    let avail = if inner_max > mode_w + sep_w {
        inner_max - mode_w - sep_w
    } else {
        0
    };

    // drop rightmost pairs until left + summary fits into avail
    while pairs_count > 0 && left_width + sum_width > avail {
        pairs_count -= 1;
        if pairs_count > 0 {
            left_width = pairs
                .iter()
                .take(pairs_count)
                .map(|(_, w)| *w)
                .sum::<usize>()
                + pair_sep_width * (pairs_count - 1);
            left_joined_rendered = pairs
                .iter()
                .take(pairs_count)
                .map(|(r, _)| r.clone())
                .collect::<Vec<_>>()
                .join(&pair_sep_rendered);
        } else {
            left_width = 0;
            left_joined_rendered.clear();
        }
    }

    // if still doesn't fit, shorten the summary to bare pagination
    if left_width + sum_width > avail && total_pages > 1 {
        sum_plain = format!("Page {}/{}", m.page + 1, total_pages);
        sum_width = sum_plain.chars().count();
        sum_rendered = sum_style.render(&sum_plain);
    }

    // compute filler width (subtract 2 to keep spacing consistent)
    let pad = if avail > left_width + sum_width + 2 {
        avail - left_width - sum_width - 2
    } else {
        0
    };
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let footer_inner = format!("{left_joined_rendered}{filler}{sum_rendered}");

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let mode_styled = mode_style.render(mode);

    // Indicator: a dim single-char marker at the far left showing the active
    // layout ('L' linear, 'G' grid).
    let indicator_style = STYLE_MODELINE.clone().faint(true).padding(0, 1, 0, 1);
    let indicator_styled = indicator_style.render(m.layout.indicator());

    let sep_styled = inner_style.render(" | ");
    let rest_content = format!("{sep_styled}{footer_inner}");

    let trailing_pad = STYLE_MODELINE.render(" ");

    // Place the indicator to the far left followed by the mode block.
    format!("{indicator_styled}{mode_styled}{rest_content}{trailing_pad}")
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = if total_width > 0 {
        total_width.saturating_sub(2) - 1
    } else {
        DEFAULT_WIDTH
    };
    let mode = m.mode();
    let modeline = render_modeline(m, inner_max, &mode);
    let modeline_single = modeline.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline_single)
}

#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::ui::model::{initial_model, RESERVED_LINES};
    use crate::ui::Msg;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn modeline_fits_terminal_width() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: 24 });
        let modeline = crate::ui::render_modeline_padded(&m);
        let stripped = strip_ansi(&modeline);
        assert!(stripped.lines().next().unwrap_or("").chars().count() <= 80);
    }

    #[test]
    fn modeline_shows_layout_indicator() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: 24 });
        let stripped = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert!(stripped.trim_start().starts_with('L'));
        m.update(Msg::ToggleLayout);
        let stripped = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert!(stripped.trim_start().starts_with('G'));
    }

    #[test]
    fn modeline_shows_selection_mode_and_count() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: 24 });
        let stripped = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert!(stripped.contains("browse"));
        m.update(Msg::CycleSelectionMode);
        m.update(Msg::KeyEnter);
        let stripped = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert!(stripped.contains("single"));
        assert!(stripped.contains("1 sel"));
    }

    #[test]
    fn modeline_shows_pagination_when_needed() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: RESERVED_LINES + 4 });
        let stripped = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert!(stripped.contains("Page 1/3"), "{stripped}");
    }

    #[test]
    fn modeline_reports_refreshing() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: 24 });
        m.update(Msg::RefreshRequested);
        let stripped = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert!(stripped.contains("refreshing"));
    }
}
