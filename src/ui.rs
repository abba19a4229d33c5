// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites read as `crate::ui::initial_model`.
pub use model::{initial_model, LayoutMode, Model, SelectionMode};
pub use render::{render_full, render_header_block, render_main_content, render_modeline_padded};
pub use run::{run_once, RunConfig, TeaAdapter};
pub use update::handle_update;

use crate::product::Product;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyUp,
    KeyDown,
    KeyEnter,
    KeySpace,
    ToggleLayout,
    CycleSelectionMode,
    ToggleEmptyView,
    ClearList,
    RefreshRequested,
    RefreshLoaded(Result<Vec<Product>, String>),
}
