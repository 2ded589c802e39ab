//! # Wishlist
//!
//! Saved-for-later products, kept as the full product records the catalog
//! handed over. Membership is by product ID only.

use serde::Serialize;

use crate::types::Product;

/// Result of [`Wishlist::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// The product was not saved and now is.
    Added,
    /// The product was saved and no longer is.
    Removed,
}

/// Ordered wishlist, at most one entry per product ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Wishlist {
    entries: Vec<Product>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Adopts a persisted sequence of entries, keeping the first entry for
    /// each product ID.
    pub fn from_entries(entries: Vec<Product>) -> Self {
        let mut wishlist = Wishlist::new();
        for entry in entries {
            if !wishlist.contains(entry.id.as_str()) {
                wishlist.entries.push(entry);
            }
        }
        wishlist
    }

    /// Adds the product if it is not saved yet, removes it otherwise.
    pub fn toggle(&mut self, product: Product) -> Toggle {
        if self.contains(product.id.as_str()) {
            self.entries.retain(|e| e.id != product.id);
            Toggle::Removed
        } else {
            self.entries.push(product);
            Toggle::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == *id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut wishlist = Wishlist::from_entries(vec![Product::new("x")]);
        let before = wishlist.clone();
        let product = Product::new("b").with("name", "Plasma Drill");

        assert_eq!(wishlist.toggle(product.clone()), Toggle::Added);
        assert!(wishlist.contains("b"));
        assert_eq!(wishlist.count(), 2);

        assert_eq!(wishlist.toggle(product), Toggle::Removed);
        assert!(!wishlist.contains("b"));
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_toggle_matches_on_id_only() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(Product::new("b").with("name", "old"));

        // Same id, different payload: still a removal
        assert_eq!(
            wishlist.toggle(Product::new("b").with("name", "new")),
            Toggle::Removed
        );
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_entries_keep_full_payload_and_order() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(Product::new("b").with("category", "INVENT"));
        wishlist.toggle(Product::new("a"));

        let ids: Vec<&str> = wishlist.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(wishlist.entries()[0].text("category"), Some("INVENT"));
    }

    #[test]
    fn test_from_entries_drops_duplicates() {
        let wishlist = Wishlist::from_entries(vec![
            Product::new("a").with("rank", 1),
            Product::new("a").with("rank", 2),
        ]);

        assert_eq!(wishlist.count(), 1);
        assert_eq!(wishlist.entries()[0].attributes["rank"], 1);
    }
}
