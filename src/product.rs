use serde::Deserialize;

/// A single catalog entry. Products are immutable once constructed; the
/// catalog is replaced wholesale rather than edited in place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Reference to the product image asset (not rendered in the terminal,
    /// kept so catalog files round-trip).
    #[serde(default)]
    pub image: String,
    pub stock: u32,
    #[serde(default)]
    pub discounted: bool,
}

impl Product {
    pub fn new(name: &str, description: &str, price: f64, image: &str, stock: u32, discounted: bool) -> Self {
        Product {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
            stock,
            discounted,
        }
    }

    /// Price formatted for display.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
