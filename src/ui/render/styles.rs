use lipgloss::{rounded_border, Color, Style};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_TITLE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 238, 238))
        .bold(true)
});
pub static STYLE_NAME: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_HIGHLIGHT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(255, 255, 255))
        .bold(true)
});
pub static STYLE_PRICE: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(0, 238, 238)));
pub static STYLE_BADGE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_DESC: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_STOCK_OUT: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(238, 0, 0)));
pub static STYLE_ERR: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 0))
        .bold(true)
});
pub static STYLE_EMPTY: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_LINENUM: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .padding(0, 1, 0, 1)
});
pub static STYLE_HEADER_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()).padding(0, 1, 0, 1));
