use crate::product::Product;
use std::fs;
use std::path::PathBuf;

/// Where refreshed product lists come from. The seed source always returns
/// the built-in sample catalog; the file source re-reads a JSON catalog and
/// can fail.
#[derive(Debug, Clone)]
pub enum Source {
    Seed,
    File(PathBuf),
}

impl Source {
    pub fn fetch(&self) -> Result<Vec<Product>, String> {
        match self {
            Source::Seed => Ok(seed()),
            Source::File(path) => load_file(path),
        }
    }
}

/// The built-in sample catalog. Refreshing the seed source repopulates this
/// exact list.
pub fn seed() -> Vec<Product> {
    vec![
        Product::new("Yogurt", "plain greek yogurt, 1kg tub", 60.0, "img/yogurt.png", 12, true),
        Product::new("Milk", "whole milk, 1l bottle", 3.5, "img/milk.png", 24, false),
        Product::new("Bread", "sourdough loaf, sliced", 4.25, "img/bread.png", 8, false),
        Product::new("Cheese", "aged cheddar, 250g", 7.8, "img/cheese.png", 5, true),
        Product::new("Apples", "royal gala, per kg", 2.95, "img/apples.png", 40, false),
        Product::new("Coffee", "dark roast beans, 500g", 11.4, "img/coffee.png", 9, false),
        Product::new("Butter", "salted butter, 200g", 3.1, "img/butter.png", 0, false),
        Product::new("Honey", "wildflower honey, 340g jar", 6.6, "img/honey.png", 7, true),
        Product::new("Oats", "rolled oats, 750g", 2.2, "img/oats.png", 18, false),
        Product::new("Tea", "loose leaf assam, 100g", 5.35, "img/tea.png", 11, false),
    ]
}

pub fn load_file(path: &PathBuf) -> Result<Vec<Product>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read catalog {}: {e}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .map_err(|e| format!("failed to parse catalog {}: {e}", path.display()))?;
    if products.is_empty() {
        return Err(format!("catalog {} contains no products", path.display()));
    }
    Ok(products)
}
