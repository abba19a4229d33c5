use crate::observe::{ListEvent, ObservableList};
use crate::product::Product;
use bubbletea_widgets::Viewport;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// small constants reused by rendering code
pub const HEADER_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = HEADER_BLOCK_LINES + MODELINE_LINES;
pub const DEFAULT_WIDTH: usize = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Linear,
    Grid,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Linear => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::Linear,
        }
    }

    /// Single-character modeline indicator.
    pub fn indicator(self) -> &'static str {
        match self {
            LayoutMode::Linear => "L",
            LayoutMode::Grid => "G",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    None,
    Single,
    Multiple,
}

impl SelectionMode {
    pub fn next(self) -> Self {
        match self {
            SelectionMode::None => SelectionMode::Single,
            SelectionMode::Single => SelectionMode::Multiple,
            SelectionMode::Multiple => SelectionMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SelectionMode::None => "browse",
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multi",
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub products: ObservableList<Product>,
    pub refreshing: bool,
    pub layout: LayoutMode,
    pub selection_mode: SelectionMode,
    pub selected: HashSet<usize>,
    pub highlighted: usize,
    // empty-state switch: false = default placeholder, true = alternate
    pub empty_alt: bool,
    pub err: String,
    pub status: String,
    // pagination
    pub page: usize,
    pub per_page: usize,
    pub screen_width: usize,
    // viewport using bubbletea widgets
    pub vp: Viewport,
    // change notifications buffered by the list subscription, drained by update logic
    changes: Arc<Mutex<Vec<ListEvent>>>,
}

pub fn initial_model(products: Vec<Product>) -> Model {
    let mut m = Model::default();
    let changes: Arc<Mutex<Vec<ListEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let mut list = ObservableList::new(products);
    list.subscribe(move |ev| sink.lock().unwrap().push(ev.clone()));
    m.status = format!("{} products", list.len());
    m.products = list;
    m.changes = changes;
    m
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    /// Modeline mode block text.
    pub fn mode(&self) -> String {
        if self.refreshing {
            return "refreshing".to_string();
        }
        self.selection_mode.label().to_string()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// How far a single up/down step moves the highlight: one item in linear
    /// layout, one full row in grid layout.
    pub fn row_step(&self) -> usize {
        match self.layout {
            LayoutMode::Linear => 1,
            LayoutMode::Grid => crate::ui::render::grid::columns_for_width(self.content_width()),
        }
    }

    pub fn content_width(&self) -> usize {
        if self.screen_width > 0 {
            self.screen_width
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Items shown per page for the current layout.
    pub fn items_per_page(&self) -> usize {
        let per_line = match self.layout {
            LayoutMode::Linear => 1,
            LayoutMode::Grid => crate::ui::render::grid::columns_for_width(self.content_width()),
        };
        let lines = if self.per_page == 0 {
            self.products.len().max(1)
        } else {
            self.per_page
        };
        lines.saturating_mul(per_line).max(1)
    }

    pub fn total_pages(&self) -> usize {
        let total = self.products.len();
        if total == 0 {
            return 1;
        }
        total.div_ceil(self.items_per_page())
    }

    /// Drain buffered list-change notifications.
    pub fn take_changes(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut *self.changes.lock().unwrap())
    }

    /// React to buffered list changes: selection indices are invalidated by
    /// wholesale replacement, the highlight is clamped, the status line
    /// reflects the last notification and the viewport is re-rendered.
    pub fn apply_list_changes(&mut self) {
        let events = self.take_changes();
        if events.is_empty() {
            return;
        }
        for ev in &events {
            match ev {
                ListEvent::Replaced { len } => {
                    self.selected.clear();
                    self.status = format!("catalog replaced ({len} items)");
                }
                ListEvent::Cleared => {
                    self.selected.clear();
                    self.status = "catalog cleared".to_string();
                }
                ListEvent::Inserted { .. } => {
                    self.status = format!("{} products", self.products.len());
                }
                ListEvent::Removed { index } => {
                    self.selected.remove(index);
                    self.status = format!("{} products", self.products.len());
                }
            }
        }
        self.clamp_highlight();
        self.sync_viewport();
    }

    pub fn clamp_highlight(&mut self) {
        let len = self.products.len();
        if len == 0 {
            self.highlighted = 0;
            self.page = 0;
            return;
        }
        if self.highlighted >= len {
            self.highlighted = len - 1;
        }
        self.page = self.highlighted / self.items_per_page();
    }

    /// Re-render the content area into the viewport.
    pub fn sync_viewport(&mut self) {
        let content = crate::ui::render::render_content(self);
        self.vp.set_content(&content);
        self.vp.goto_top();
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_header_block(&self) -> Vec<String> {
        crate::ui::render::render_header_block(self)
    }
    pub fn render_main_content(&self) -> String {
        crate::ui::render::render_main_content(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}
