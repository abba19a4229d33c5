use crate::product::Product;
use crate::ui::model::{Model, SelectionMode};
use bubbletea_widgets::Viewport;

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::KeyUp => handle_key_up(m),
        crate::ui::Msg::KeyDown => handle_key_down(m),
        crate::ui::Msg::KeyEnter => handle_key_enter(m),
        crate::ui::Msg::KeySpace => handle_key_space(m),
        crate::ui::Msg::ToggleLayout => handle_toggle_layout(m),
        crate::ui::Msg::CycleSelectionMode => handle_cycle_selection_mode(m),
        crate::ui::Msg::ToggleEmptyView => handle_toggle_empty_view(m),
        crate::ui::Msg::ClearList => handle_clear_list(m),
        crate::ui::Msg::RefreshRequested => handle_refresh_requested(m),
        crate::ui::Msg::RefreshLoaded(res) => handle_refresh_loaded(m, res),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.per_page = height.saturating_sub(crate::ui::model::RESERVED_LINES);
    m.vp = Viewport::new(m.per_page, m.screen_width);
    m.clamp_highlight();
    m.sync_viewport();
}

fn handle_key_down(m: &mut Model) {
    let len = m.products.len();
    if len == 0 {
        return;
    }
    let step = m.row_step();
    m.highlighted = usize::min(m.highlighted + step, len - 1);
    m.page = m.highlighted / m.items_per_page();
    m.sync_viewport();
}

fn handle_key_up(m: &mut Model) {
    if m.products.is_empty() {
        return;
    }
    m.highlighted = m.highlighted.saturating_sub(m.row_step());
    m.page = m.highlighted / m.items_per_page();
    m.sync_viewport();
}

// Enter activates the highlighted row: replace the selection in single mode,
// toggle membership in multiple mode.
fn handle_key_enter(m: &mut Model) {
    if m.products.is_empty() {
        return;
    }
    match m.selection_mode {
        SelectionMode::None => return,
        SelectionMode::Single => {
            m.selected.clear();
            m.selected.insert(m.highlighted);
        }
        SelectionMode::Multiple => toggle_highlighted(m),
    }
    m.sync_viewport();
}

// Space is the multiple-mode toggle; elsewhere it does nothing.
fn handle_key_space(m: &mut Model) {
    if m.products.is_empty() || m.selection_mode != SelectionMode::Multiple {
        return;
    }
    toggle_highlighted(m);
    m.sync_viewport();
}

fn toggle_highlighted(m: &mut Model) {
    if !m.selected.remove(&m.highlighted) {
        m.selected.insert(m.highlighted);
    }
}

fn handle_toggle_layout(m: &mut Model) {
    m.layout = m.layout.toggled();
    m.clamp_highlight();
    m.sync_viewport();
}

fn handle_cycle_selection_mode(m: &mut Model) {
    m.selection_mode = m.selection_mode.next();
    m.selected.clear();
    m.sync_viewport();
}

fn handle_toggle_empty_view(m: &mut Model) {
    m.empty_alt = !m.empty_alt;
    m.sync_viewport();
}

fn handle_clear_list(m: &mut Model) {
    m.products.clear();
    m.apply_list_changes();
}

fn handle_refresh_requested(m: &mut Model) {
    // no queueing and no cancellation: a request during an in-flight refresh
    // is dropped
    if m.refreshing {
        return;
    }
    m.refreshing = true;
}

fn handle_refresh_loaded(m: &mut Model, res: Result<Vec<Product>, String>) {
    m.refreshing = false;
    match res {
        Ok(products) => {
            m.err.clear();
            m.products.replace_all(products);
            m.apply_list_changes();
        }
        Err(e) => {
            m.err = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::ui::model::{initial_model, LayoutMode, RESERVED_LINES};
    use crate::ui::Msg;

    #[test]
    fn resize_clamps_page_to_new_geometry() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: RESERVED_LINES + 2 });
        for _ in 0..9 {
            m.update(Msg::KeyDown);
        }
        assert_eq!(m.page, 4);
        // taller terminal: every product fits one page again
        m.update(Msg::WindowSize { width: 80, height: RESERVED_LINES + 20 });
        assert_eq!(m.page, 0);
        assert_eq!(m.highlighted, 9, "highlight survives the resize");
    }

    #[test]
    fn layout_toggle_recomputes_page() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::WindowSize { width: 80, height: RESERVED_LINES + 2 });
        for _ in 0..9 {
            m.update(Msg::KeyDown);
        }
        assert!(m.page > 0);
        m.update(Msg::ToggleLayout);
        assert_eq!(m.layout, LayoutMode::Grid);
        // grid pages hold columns * lines items, so the same highlight lands
        // on an earlier page
        assert!(m.page <= m.highlighted / m.items_per_page());
        assert_eq!(m.page, m.highlighted / m.items_per_page());
    }

    #[test]
    fn activation_on_empty_list_is_a_no_op() {
        let mut m = initial_model(Vec::new());
        m.update(Msg::CycleSelectionMode);
        m.update(Msg::KeyEnter);
        m.update(Msg::KeySpace);
        m.update(Msg::KeyDown);
        m.update(Msg::KeyUp);
        assert_eq!(m.selected_count(), 0);
        assert_eq!(m.highlighted, 0);
    }

    #[test]
    fn clearing_twice_is_harmless() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::ClearList);
        m.update(Msg::ClearList);
        assert!(m.products.is_empty());
        assert_eq!(m.status, "catalog cleared");
    }

    #[test]
    fn refresh_completion_without_request_still_lands() {
        // a completion message is applied even if the flag was already
        // cleared; the list replacement is what matters
        let mut m = initial_model(Vec::new());
        m.update(Msg::RefreshLoaded(Ok(catalog::seed())));
        assert!(!m.refreshing);
        assert_eq!(m.products.len(), 10);
    }

    #[test]
    fn selection_survives_navigation_but_not_replacement() {
        let mut m = initial_model(catalog::seed());
        m.update(Msg::CycleSelectionMode);
        m.update(Msg::CycleSelectionMode); // multiple
        m.update(Msg::KeySpace);
        m.update(Msg::KeyDown);
        m.update(Msg::KeyDown);
        assert_eq!(m.selected_count(), 1);
        m.update(Msg::RefreshLoaded(Ok(catalog::seed())));
        assert_eq!(m.selected_count(), 0);
    }

    #[test]
    fn highlight_clamps_when_replacement_shrinks_list() {
        let mut m = initial_model(catalog::seed());
        for _ in 0..9 {
            m.update(Msg::KeyDown);
        }
        assert_eq!(m.highlighted, 9);
        let short = catalog::seed().into_iter().take(3).collect::<Vec<_>>();
        m.update(Msg::RefreshLoaded(Ok(short)));
        assert_eq!(m.highlighted, 2);
    }
}
