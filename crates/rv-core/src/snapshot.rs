//! # Snapshots
//!
//! The persisted layout of the cart and the wishlist, and the outcome of
//! reading it back at session start.
//!
//! ## Layout
//! ```text
//! ┌──────────────┬─────────────────────────────────────────────────────────┐
//! │ key          │ value (JSON string)                                     │
//! ├──────────────┼─────────────────────────────────────────────────────────┤
//! │ rv_cart      │ [{"id","name","price","image","quantity"}, ...]         │
//! │ rv_wishlist  │ [{"id", ...any other product fields}, ...]              │
//! └──────────────┴─────────────────────────────────────────────────────────┘
//! ```
//!
//! The two keys are written independently. A crash between the two writes
//! can leave them out of step with each other; that is accepted.
//!
//! ## Strict Cart Lines
//! Stored cart lines are typed: `name` and `image` must be strings (or
//! missing) and `price` a number (or missing). A single line with
//! `"name": null` or `"price": "$10"` makes the whole `rv_cart` value
//! [`LoadOutcome::Corrupt`], and the cart starts empty.

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{CartLine, Product};
use crate::wishlist::Wishlist;

/// Storage key for the cart lines.
pub const CART_KEY: &str = "rv_cart";

/// Storage key for the wishlist entries.
pub const WISHLIST_KEY: &str = "rv_wishlist";

// =============================================================================
// Load Outcome
// =============================================================================

/// What reading a persisted collection produced.
///
/// ## Policy
/// Only `Loaded` carries state. Every other outcome starts the session with
/// an empty collection; the variants exist so that the degradation is
/// visible in logs instead of hidden.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// A value was stored and parsed.
    Loaded(T),
    /// Nothing was stored under the key.
    Absent,
    /// Something was stored but did not parse.
    Corrupt(String),
    /// The store itself could not be read.
    Unavailable(String),
}

impl<T: Default> LoadOutcome<T> {
    /// Applies the policy: the loaded value, or an empty collection.
    pub fn into_loaded_or_default(self) -> T {
        match self {
            LoadOutcome::Loaded(value) => value,
            _ => T::default(),
        }
    }
}

// =============================================================================
// Encode / Decode
// =============================================================================

/// Serializes the full cart for [`CART_KEY`].
pub fn encode_cart(cart: &Cart) -> CoreResult<String> {
    serde_json::to_string(cart).map_err(|source| CoreError::Encode {
        key: CART_KEY,
        source,
    })
}

/// Serializes the full wishlist for [`WISHLIST_KEY`].
pub fn encode_wishlist(wishlist: &Wishlist) -> CoreResult<String> {
    serde_json::to_string(wishlist).map_err(|source| CoreError::Encode {
        key: WISHLIST_KEY,
        source,
    })
}

/// Parses a stored cart value.
pub fn parse_cart(raw: &str) -> CoreResult<Cart> {
    let lines: Vec<CartLine> = serde_json::from_str(raw).map_err(|source| CoreError::Decode {
        key: CART_KEY,
        source,
    })?;
    Ok(Cart::from_lines(lines))
}

/// Parses a stored wishlist value.
pub fn parse_wishlist(raw: &str) -> CoreResult<Wishlist> {
    let entries: Vec<Product> =
        serde_json::from_str(raw).map_err(|source| CoreError::Decode {
            key: WISHLIST_KEY,
            source,
        })?;
    Ok(Wishlist::from_entries(entries))
}

/// Interprets whatever the store returned for [`CART_KEY`].
pub fn decode_cart(raw: Option<&str>) -> LoadOutcome<Cart> {
    decode_with(raw, parse_cart)
}

/// Interprets whatever the store returned for [`WISHLIST_KEY`].
pub fn decode_wishlist(raw: Option<&str>) -> LoadOutcome<Wishlist> {
    decode_with(raw, parse_wishlist)
}

fn decode_with<T>(raw: Option<&str>, parse: fn(&str) -> CoreResult<T>) -> LoadOutcome<T> {
    match raw {
        None => LoadOutcome::Absent,
        Some(raw) => match parse(raw) {
            Ok(value) => LoadOutcome::Loaded(value),
            Err(err) => LoadOutcome::Corrupt(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    #[test]
    fn test_cart_round_trip() {
        let mut cart = Cart::new();
        cart.add(&Product::new("a").with("name", "Widget").with("price", 10).with("image", "x"));
        cart.add(&Product::new("a"));
        cart.add(&Product::new("b").with("priceNum", 2.5));

        let raw = encode_cart(&cart).unwrap();
        let restored = parse_cart(&raw).unwrap();

        assert_eq!(restored.lines(), cart.lines());
    }

    #[test]
    fn test_decode_cart_written_by_web_front_end() {
        let raw = r#"[{"id":"a","name":"Widget","price":10,"image":"x","quantity":3}]"#;

        match decode_cart(Some(raw)) {
            LoadOutcome::Loaded(cart) => {
                assert_eq!(cart.count(), 3);
                assert_eq!(cart.get("a").unwrap().price, 10.0);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_ill_typed_line_discards_whole_cart() {
        let null_name = r#"[{"id":"a","quantity":1},{"id":"b","name":null,"quantity":1}]"#;
        assert!(matches!(decode_cart(Some(null_name)), LoadOutcome::Corrupt(_)));

        let text_price = r#"[{"id":"a","price":"$10","quantity":1}]"#;
        assert!(matches!(decode_cart(Some(text_price)), LoadOutcome::Corrupt(_)));
    }

    #[test]
    fn test_decode_absent_and_corrupt() {
        assert_eq!(decode_cart(None), LoadOutcome::Absent);
        assert!(matches!(decode_cart(Some("not json")), LoadOutcome::Corrupt(_)));
        assert!(matches!(
            decode_wishlist(Some(r#"[{"name":"no id"}]"#)),
            LoadOutcome::Corrupt(_)
        ));
    }

    #[test]
    fn test_non_loaded_outcomes_become_empty() {
        let corrupt: LoadOutcome<Cart> = LoadOutcome::Corrupt("bad".into());
        assert!(corrupt.into_loaded_or_default().is_empty());

        let unavailable: LoadOutcome<Wishlist> = LoadOutcome::Unavailable("disk".into());
        assert!(unavailable.into_loaded_or_default().is_empty());
    }

    #[test]
    fn test_wishlist_round_trip_keeps_arbitrary_fields() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(Product::new("b").with("pillar", "DESTROY").with("priceNum", 42));

        let raw = encode_wishlist(&wishlist).unwrap();
        assert_eq!(raw, r#"[{"id":"b","pillar":"DESTROY","priceNum":42}]"#);

        let restored = parse_wishlist(&raw).unwrap();
        assert_eq!(restored, wishlist);
    }
}
