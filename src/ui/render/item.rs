use crate::product::Product;
use crate::ui::render::styles::{
    STYLE_BADGE, STYLE_DESC, STYLE_HIGHLIGHT, STYLE_NAME, STYLE_PRICE, STYLE_STOCK_OUT,
};
use crate::ui::render::util::{pad_cell, truncate_chars};

/// Which item template a product renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Default,
    Discount,
}

/// Template selection is a pure function of the product itself.
pub fn template_for(p: &Product) -> Template {
    if p.discounted {
        Template::Discount
    } else {
        Template::Default
    }
}

pub const NAME_COL: usize = 12;
const PRICE_COL: usize = 9; // " $9999.99"
const BADGE_COL: usize = 5; // " SALE"
const STOCK_COL: usize = 13; // " 999 in stock" / " out of stock"

fn badge(p: &Product) -> String {
    match template_for(p) {
        Template::Discount => STYLE_BADGE.render(" SALE"),
        Template::Default => "     ".to_string(),
    }
}

fn stock_piece(p: &Product) -> String {
    if p.stock == 0 {
        STYLE_STOCK_OUT.render(" out of stock")
    } else {
        STYLE_DESC.render(&format!(" {:>3} in stock", p.stock.min(999)))
    }
}

/// Render one product as a linear-layout row. Trailing pieces (price, badge,
/// stock, description) are appended only while they fit the width budget, so
/// a narrow terminal drops detail from the right.
pub fn render_row(p: &Product, checkbox: Option<bool>, highlighted: bool, budget: usize) -> String {
    let mut out = String::new();
    let mut plain = 0usize;

    let marker = if highlighted { "> " } else { "  " };
    out.push_str(&STYLE_HIGHLIGHT.render(marker));
    plain += 2;

    if let Some(selected) = checkbox {
        let cb = if selected { "[x] " } else { "[ ] " };
        out.push_str(&STYLE_BADGE.render(cb));
        plain += 4;
    }

    let name_w = usize::min(NAME_COL, budget.saturating_sub(plain)).max(1);
    let name = pad_cell(&p.name, name_w);
    let name_style = if highlighted { &STYLE_HIGHLIGHT } else { &STYLE_NAME };
    out.push_str(&name_style.render(&name));
    plain += name_w;

    if plain + PRICE_COL <= budget {
        out.push_str(&STYLE_PRICE.render(&format!("{:>width$}", p.price_label(), width = PRICE_COL)));
        plain += PRICE_COL;
    }
    if plain + BADGE_COL <= budget {
        out.push_str(&badge(p));
        plain += BADGE_COL;
    }
    if plain + STOCK_COL <= budget {
        out.push_str(&stock_piece(p));
        plain += STOCK_COL;
    }
    if plain + 3 <= budget && !p.description.is_empty() {
        let desc = truncate_chars(&p.description, budget - plain - 2);
        out.push_str(&STYLE_DESC.render(&format!("  {desc}")));
    }
    out
}

/// Render one product as a fixed-width grid cell: marker, optional checkbox,
/// name, price and a one-character discount mark. The plain width of the
/// result is exactly `width`.
pub fn render_cell(p: &Product, width: usize, checkbox: Option<bool>, highlighted: bool) -> String {
    let mut out = String::new();
    let marker = if highlighted { ">" } else { " " };
    out.push_str(&STYLE_HIGHLIGHT.render(marker));
    let mut used = 1usize;

    if let Some(selected) = checkbox {
        let cb = if selected { "[x] " } else { "[ ] " };
        out.push_str(&STYLE_BADGE.render(cb));
        used += 4;
    }

    let mark = if template_for(p) == Template::Discount { "*" } else { " " };
    let name_w = width.saturating_sub(used + PRICE_COL + 1).max(1);
    let name = pad_cell(&p.name, name_w);
    let name_style = if highlighted { &STYLE_HIGHLIGHT } else { &STYLE_NAME };
    out.push_str(&name_style.render(&name));
    out.push_str(&STYLE_PRICE.render(&format!("{:>width$}", p.price_label(), width = PRICE_COL)));
    out.push_str(&STYLE_BADGE.render(mark));
    out
}
