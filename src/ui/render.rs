// Render module split into focused submodules to keep each layout concern small.

pub mod empty;
pub mod full;
pub mod grid;
pub mod header;
pub mod item;
pub mod list;
pub mod modeline;
pub mod styles;
pub mod util;

pub use full::render_full;
pub use header::render_header_block;
pub use list::{render_content, render_main_content};
pub use modeline::{render_modeline, render_modeline_padded};
