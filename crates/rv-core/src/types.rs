//! # Domain Types
//!
//! Core domain types shared by the cart and the wishlist.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │   ProductId     │   │      Product         │   │    CartLine     │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  String         │◄──│  id (required)       │──►│  id             │  │
//! │  │                 │   │  attributes (open)   │   │  name, price    │  │
//! │  └─────────────────┘   │  name? price? image? │   │  image          │  │
//! │                        └──────────────────────┘   │  quantity ≥ 1   │  │
//! │                                                   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Loosely-Typed Payloads
//! Catalog records arrive with an arbitrary shape. The only field every
//! consumer relies on is `id`, so [`Product`] makes that one field typed and
//! keeps everything else in an open attribute bag. Cart lines snapshot the few
//! fields they need at the moment the product is added.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Attribute preferred when resolving a product's unit price.
pub const PREFERRED_PRICE_FIELD: &str = "priceNum";

/// Attribute used when the preferred price is absent or zero.
pub const FALLBACK_PRICE_FIELD: &str = "price";

// =============================================================================
// Product ID
// =============================================================================

/// Identifier of a catalog product.
///
/// Unique within the cart and within the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record as produced by the catalog.
///
/// Serializes as one flat JSON object: `{"id": "...", ...attributes}`.
/// Wishlist entries are stored in exactly this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The one field every payload is guaranteed to carry.
    pub id: ProductId,

    /// Everything else the catalog attached (name, image, prices, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Creates a product with no attributes.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Product {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Adds an attribute, builder style.
    ///
    /// The `id` key is reserved for [`Product::id`] and is ignored here.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" {
            self.attributes.insert(key, value.into());
        }
        self
    }

    /// Returns a string attribute, if present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Display name, if the payload carries one.
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    /// Image reference, if the payload carries one.
    pub fn image(&self) -> Option<&str> {
        self.text("image")
    }

    /// Resolves the unit price.
    ///
    /// ## Resolution Order
    /// 1. `priceNum` when it resolves to a non-zero price (number or numeric text)
    /// 2. `price`, either a number or a display string such as `"$1,200.50"`
    /// 3. `0.0`
    pub fn unit_price(&self) -> f64 {
        match self
            .attributes
            .get(PREFERRED_PRICE_FIELD)
            .map(price_from_value)
        {
            Some(price) if price != 0.0 => price,
            _ => self
                .attributes
                .get(FALLBACK_PRICE_FIELD)
                .map(price_from_value)
                .unwrap_or(0.0),
        }
    }
}

fn price_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_price_text(s),
        _ => 0.0,
    }
}

/// Reads a display price such as `"$1,200.50"` as a number.
///
/// ASCII digits and `.` are kept, plus a `-` seen before the first digit;
/// text that still does not parse resolves to `0.0`.
pub fn parse_price_text(text: &str) -> f64 {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0'..='9' | '.' => cleaned.push(c),
            '-' if cleaned.is_empty() => cleaned.push(c),
            _ => {}
        }
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product's quantity record within the cart.
///
/// ## Snapshot Pattern
/// Name, price and image are copied from the product when the line is
/// created. Adding the same product again only bumps `quantity`.
///
/// ## Persisted Shape
/// ```json
/// {"id": "a", "name": "Widget", "price": 10.0, "image": "x", "quantity": 2}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product this line refers to.
    pub id: ProductId,

    /// Product name at time of adding.
    #[serde(default)]
    pub name: String,

    /// Unit price at time of adding.
    #[serde(default)]
    pub price: f64,

    /// Image reference at time of adding.
    #[serde(default)]
    pub image: String,

    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line with quantity 1 from a product payload.
    ///
    /// Missing fields are passed through as empty values, never rejected.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            id: product.id.clone(),
            name: product.name().unwrap_or_default().to_string(),
            price: product.unit_price(),
            image: product.image().unwrap_or_default().to_string(),
            quantity: 1,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_keeps_unknown_attributes() {
        let product: Product = serde_json::from_value(json!({
            "id": "p-1",
            "name": "Neural Lace",
            "tagline": "think faster",
            "rating": 4.5
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "p-1");
        assert_eq!(product.name(), Some("Neural Lace"));
        assert_eq!(product.attributes.get("rating"), Some(&json!(4.5)));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["tagline"], json!("think faster"));
        assert_eq!(back["id"], json!("p-1"));
    }

    #[test]
    fn test_product_without_id_is_rejected() {
        let result = serde_json::from_value::<Product>(json!({ "name": "nameless" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_price_prefers_numeric_field() {
        let product = Product::new("a").with("priceNum", 1200.5).with("price", "$9");
        assert_eq!(product.unit_price(), 1200.5);
    }

    #[test]
    fn test_unit_price_falls_back_when_preferred_missing_or_zero() {
        let missing = Product::new("a").with("price", 10);
        assert_eq!(missing.unit_price(), 10.0);

        let zero = Product::new("a").with("priceNum", 0).with("price", 7.25);
        assert_eq!(zero.unit_price(), 7.25);
    }

    #[test]
    fn test_unit_price_reads_display_strings() {
        let product = Product::new("a").with("price", "$1,200.50");
        assert_eq!(product.unit_price(), 1200.5);

        let garbage = Product::new("a").with("price", "call us");
        assert_eq!(garbage.unit_price(), 0.0);
    }

    #[test]
    fn test_unit_price_keeps_leading_minus() {
        let product = Product::new("a").with("price", "-5.00");
        assert_eq!(product.unit_price(), -5.0);

        assert_eq!(parse_price_text("-$1,200.50"), -1200.5);
        assert_eq!(parse_price_text("SKU 12-4"), 124.0);
    }

    #[test]
    fn test_unit_price_reads_numeric_text_in_preferred_field() {
        let product = Product::new("a").with("priceNum", "12").with("price", "$99");
        assert_eq!(product.unit_price(), 12.0);

        let blank = Product::new("a").with("priceNum", "").with("price", "$99");
        assert_eq!(blank.unit_price(), 99.0);
    }

    #[test]
    fn test_with_ignores_reserved_id_key() {
        let product = Product::new("a").with("id", "b");
        assert_eq!(product.id.as_str(), "a");
        assert!(product.attributes.is_empty());
    }

    #[test]
    fn test_cart_line_from_sparse_product() {
        let line = CartLine::from_product(&Product::new("bare"));

        assert_eq!(line.id.as_str(), "bare");
        assert_eq!(line.name, "");
        assert_eq!(line.price, 0.0);
        assert_eq!(line.image, "");
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_cart_line_persisted_field_names() {
        let line = CartLine::from_product(
            &Product::new("a")
                .with("name", "Widget")
                .with("price", 10)
                .with("image", "x"),
        );

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(
            value,
            json!({"id": "a", "name": "Widget", "price": 10.0, "image": "x", "quantity": 1})
        );
    }
}
