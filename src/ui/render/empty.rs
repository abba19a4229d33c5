use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_EMPTY, STYLE_TITLE};

/// The two predefined empty-state placeholders. Selection is a pure function
/// of the switch state.
pub fn placeholder(alternate: bool) -> Vec<&'static str> {
    if alternate {
        vec![
            "The catalog returned no products.",
            "",
            "Check the catalog source, then press r to retry.",
        ]
    } else {
        vec![
            "Nothing on the shelf.",
            "",
            "Press r to restock.",
        ]
    }
}

pub fn render_empty_state(m: &Model) -> String {
    let mut b = String::new();
    b.push('\n');
    for line in placeholder(m.empty_alt) {
        if line.is_empty() {
            b.push('\n');
            continue;
        }
        b.push_str(&format!("  {}\n", STYLE_EMPTY.render(line)));
    }
    if m.empty_alt {
        b.push('\n');
        b.push_str(&format!("  {}\n", STYLE_TITLE.render("(alternate placeholder)")));
    }
    b
}
