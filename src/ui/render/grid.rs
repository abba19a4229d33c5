use crate::ui::model::{Model, SelectionMode};
use crate::ui::render::item::render_cell;
use crate::ui::render::list::page_bounds;

pub const CELL_WIDTH: usize = 24;
pub const CELL_GAP: usize = 2;

/// Grid column count for a terminal width: as many fixed-width cells as fit
/// with a gap between them, never fewer than one.
pub fn columns_for_width(width: usize) -> usize {
    usize::max(1, (width + CELL_GAP) / (CELL_WIDTH + CELL_GAP))
}

/// Number of grid rows needed for `count` items at `columns` per row.
pub fn rows_for(count: usize, columns: usize) -> usize {
    if count == 0 || columns == 0 {
        return 0;
    }
    count.div_ceil(columns)
}

pub fn render_grid_content(m: &Model) -> String {
    let total = m.products.len();
    let (start, end) = page_bounds(total, m.items_per_page(), m.page);
    let columns = columns_for_width(m.content_width());
    let gap = " ".repeat(CELL_GAP);

    let mut b = String::new();
    let mut idx = start;
    while idx < end {
        let row_end = usize::min(idx + columns, end);
        let mut cells = Vec::with_capacity(columns);
        for i in idx..row_end {
            if let Some(p) = m.products.get(i) {
                let checkbox = if m.selection_mode == SelectionMode::None {
                    None
                } else {
                    Some(m.selected.contains(&i))
                };
                cells.push(render_cell(p, CELL_WIDTH, checkbox, i == m.highlighted));
            }
        }
        b.push_str(&cells.join(&gap));
        b.push('\n');
        idx = row_end;
    }
    b
}
