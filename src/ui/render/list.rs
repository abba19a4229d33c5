use crate::ui::model::{LayoutMode, Model, SelectionMode};
use crate::ui::render::empty::render_empty_state;
use crate::ui::render::grid::render_grid_content;
use crate::ui::render::item::render_row;
use crate::ui::render::styles::STYLE_LINENUM;
use crate::ui::render::util::normalize_and_pad;

fn compute_gutter_width(total: usize) -> usize {
    if total == 0 {
        return 1;
    }
    let gw = ((total as f64).log10().floor() as usize) + 1;
    usize::max(gw, 3)
}

fn format_num_str(num: usize, gutter_width: usize) -> String {
    format!("{:>1$} │ ", num, gutter_width)
}

/// First/one-past-last item index for the given page.
pub fn page_bounds(total: usize, per: usize, page: usize) -> (usize, usize) {
    if total == 0 || per == 0 {
        return (0, 0);
    }
    let start = usize::min(page.saturating_mul(per), total);
    let end = usize::min(start + per, total);
    (start, end)
}

pub fn render_linear_content(m: &Model) -> String {
    let total = m.products.len();
    let (start, end) = page_bounds(total, m.items_per_page(), m.page);
    let gutter_width = compute_gutter_width(total);
    let budget = m.content_width().saturating_sub(gutter_width + 3);

    let mut b = String::new();
    for idx in start..end {
        if let Some(p) = m.products.get(idx) {
            let checkbox = if m.selection_mode == SelectionMode::None {
                None
            } else {
                Some(m.selected.contains(&idx))
            };
            b.push_str(&STYLE_LINENUM.render(&format_num_str(idx + 1, gutter_width)));
            b.push_str(&render_row(p, checkbox, idx == m.highlighted, budget));
            b.push('\n');
        }
    }
    b
}

/// Content area for the current model state: the empty-state placeholder
/// when the list has no elements, otherwise the active layout.
pub fn render_content(m: &Model) -> String {
    if m.products.is_empty() {
        return render_empty_state(m);
    }
    match m.layout {
        LayoutMode::Linear => render_linear_content(m),
        LayoutMode::Grid => render_grid_content(m),
    }
}

pub fn render_main_content(m: &Model) -> String {
    let total_width = m.content_width();
    let content = render_content(m);
    let lines: Vec<String> = content.lines().map(|s| s.to_string()).collect();
    let per = if m.per_page == 0 { lines.len().max(1) } else { m.per_page };
    // Ensure we return exactly `per` lines each normalized to the terminal width.
    normalize_and_pad(lines, total_width, per)
}
