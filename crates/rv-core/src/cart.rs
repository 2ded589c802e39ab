//! # Cart
//!
//! The ordered collection of cart lines.
//!
//! ## Invariants
//! - Lines keep insertion order
//! - At most one line per product ID (adding again bumps the quantity)
//! - Every line has `quantity >= 1`
//!
//! ## Operations
//! ```text
//! add(product)   ─► existing id? quantity += 1 : push(line, quantity 1)
//! remove(id)     ─► retain(line.id != id)
//! clear()        ─► lines.clear()
//! count()        ─► Σ quantity   (recomputed on every call)
//! ```

use serde::Serialize;

use crate::types::{CartLine, Product};

/// The shopping cart.
///
/// Serializes as the bare JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adopts a previously persisted sequence of lines.
    ///
    /// The sequence was written by someone else, so the invariants are
    /// re-established here: the first line for an ID wins and lines with a
    /// zero quantity are dropped.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if line.quantity == 0 || cart.contains(line.id.as_str()) {
                continue;
            }
            cart.lines.push(line);
        }
        cart
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1, nothing else changes
    /// - Product not in cart: appended with quantity 1
    ///
    /// Returns the line's quantity after the call.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine::from_product(product));
        1
    }

    /// Removes the line for a product ID.
    ///
    /// Returns `false` when no such line existed (the cart is unchanged).
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != *id);
        self.lines.len() != initial_len
    }

    /// Removes every line. Returns `false` if the cart was already empty.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product ID.
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == *id)
    }

    /// Checks whether a product has a line in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn widget() -> Product {
        Product::new("a")
            .with("name", "Widget")
            .with("price", 10)
            .with("image", "x")
    }

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: 1.0,
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();

        assert_eq!(cart.add(&widget()), 1);
        assert_eq!(cart.add(&widget()), 2);

        assert_eq!(cart.len(), 1); // Still one line
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_again_keeps_snapshot_fields() {
        let mut cart = Cart::new();
        cart.add(&widget());
        cart.add(&Product::new("a").with("name", "Renamed").with("price", 99));

        let line = cart.get("a").unwrap();
        assert_eq!(line.name, "Widget");
        assert_eq!(line.price, 10.0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&Product::new("c"));
        cart.add(&Product::new("a"));
        cart.add(&Product::new("b"));
        cart.add(&Product::new("c"));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&widget());
        let before = cart.clone();

        assert!(!cart.remove("nope"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_count_sums_quantities() {
        let cart = Cart::from_lines(vec![line("a", 2), line("b", 3)]);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        assert!(!cart.clear());

        cart.add(&widget());
        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_from_lines_restores_invariants() {
        let cart = Cart::from_lines(vec![line("a", 2), line("b", 0), line("a", 7)]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("a").unwrap().quantity, 2);
        assert!(!cart.contains("b"));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::from_lines(vec![line("a", u32::MAX)]);
        assert_eq!(cart.add(&Product::new("a")), u32::MAX);
    }
}
