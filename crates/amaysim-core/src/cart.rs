//! # Cart
//!
//! Accumulates line items and the promo code, and hands them to the pricing
//! engine.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                  Cart                    State Change           │
//! │  ──────                  ────                    ────────────           │
//! │                                                                         │
//! │  Cart::new(rules) ─────► rules fixed for life                           │
//! │                                                                         │
//! │  add(code, promo) ─────► increment(code) ──────► items[code] += 1       │
//! │                          │                                              │
//! │                          └─► rules.bundled_with(code)                   │
//! │                              Some(extra) ──────► items[extra] += 1      │
//! │                                                                         │
//! │                          promo non-empty ──────► promo_code = promo     │
//! │                                                                         │
//! │  total() / quote() ────► pricing::quote() ─────► (read only)            │
//! │                                                                         │
//! │  items() ──────────────► &LineItems ───────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Stored quantities are always ≥ 1; a code is absent rather than zero
//! - There is no removal, so quantities never decrease
//! - The promo code is replaced, never accumulated, and is priced once
//!   against the aggregate

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::ProductCode;
use crate::error::CoreResult;
use crate::money::currency;
use crate::pricing::{self, Quote};
use crate::rules::{PricingRule, RuleSet};

// =============================================================================
// Line Items
// =============================================================================

/// Product code → quantity, with absent meaning zero.
///
/// Serialized as a JSON object: `{"ult_small": 1, "one_gb": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineItems(BTreeMap<ProductCode, i64>);

impl LineItems {
    pub fn new() -> Self {
        LineItems::default()
    }

    /// Quantity of `code`, 0 when the code has never been added.
    pub fn quantity(&self, code: ProductCode) -> i64 {
        self.0.get(&code).copied().unwrap_or(0)
    }

    pub fn contains(&self, code: ProductCode) -> bool {
        self.0.contains_key(&code)
    }

    /// Adds one unit of `code` and returns the new quantity.
    fn increment(&mut self, code: ProductCode) -> i64 {
        let quantity = self.0.entry(code).or_insert(0);
        *quantity += 1;
        *quantity
    }

    /// Number of distinct product codes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total units across all codes.
    pub fn total_quantity(&self) -> i64 {
        self.0.values().sum()
    }

    /// Iterates `(code, quantity)` in product code order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductCode, i64)> + '_ {
        self.0.iter().map(|(code, qty)| (*code, *qty))
    }
}

impl<const N: usize> From<[(ProductCode, i64); N]> for LineItems {
    /// Builds line items directly, dropping non-positive quantities.
    fn from(entries: [(ProductCode, i64); N]) -> Self {
        LineItems(entries.into_iter().filter(|(_, qty)| *qty > 0).collect())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart priced under a fixed [`RuleSet`].
///
/// ```rust
/// use amaysim_core::{Cart, ProductCode, RuleSet};
///
/// let mut cart = Cart::new(RuleSet::all());
/// cart.add(ProductCode::UltSmall, None);
/// cart.add(ProductCode::UltSmall, None);
/// cart.add(ProductCode::UltSmall, None);
/// cart.add(ProductCode::UltLarge, None);
///
/// assert_eq!(cart.total().unwrap(), "$94.70");
/// assert_eq!(cart.items().quantity(ProductCode::UltSmall), 3);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    rules: RuleSet,
    items: LineItems,
    promo_code: Option<String>,
}

impl Cart {
    /// Creates an empty cart. An empty rule set turns every promotion off.
    pub fn new(rules: RuleSet) -> Self {
        Cart {
            rules,
            items: LineItems::new(),
            promo_code: None,
        }
    }

    /// Adds one unit of `code`, plus any bundled companion, and records the
    /// promo code if one is supplied.
    ///
    /// An empty promo string leaves the stored code untouched.
    pub fn add(&mut self, code: ProductCode, promo_code: Option<&str>) {
        let quantity = self.items.increment(code);
        debug!(%code, quantity, "Added to cart");

        if let Some(extra) = self.rules.bundled_with(code) {
            let quantity = self.items.increment(extra);
            debug!(%code, bundled = %extra, quantity, "Added bundled item");
        }

        if let Some(promo) = promo_code.filter(|p| !p.is_empty()) {
            debug!(promo, "Promo code set");
            self.promo_code = Some(promo.to_string());
        }
    }

    /// Read-only view of the line items.
    pub fn items(&self) -> &LineItems {
        &self.items
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rule_enabled(&self, rule: PricingRule) -> bool {
        self.rules.contains(rule)
    }

    /// The last non-empty promo code supplied to [`Cart::add`].
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Prices the cart and returns the full breakdown.
    pub fn quote(&self) -> CoreResult<Quote> {
        pricing::quote(&self.items, &self.rules, self.promo_code())
    }

    /// Prices the cart and returns the formatted total, e.g. `"$94.70"`.
    pub fn total(&self) -> CoreResult<String> {
        Ok(currency(self.quote()?.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_all(cart: &mut Cart, codes: &[ProductCode], promo: Option<&str>) {
        for code in codes {
            cart.add(*code, promo);
        }
    }

    #[test]
    fn test_line_items_absent_is_zero() {
        let items = LineItems::new();
        assert_eq!(items.quantity(ProductCode::UltLarge), 0);
        assert!(!items.contains(ProductCode::UltLarge));
        assert!(items.is_empty());
    }

    #[test]
    fn test_line_items_from_drops_zero_quantities() {
        let items = LineItems::from([(ProductCode::UltSmall, 2), (ProductCode::OneGb, 0)]);
        assert_eq!(items.len(), 1);
        assert!(!items.contains(ProductCode::OneGb));
    }

    #[test]
    fn test_add_increments_quantity() {
        let mut cart = Cart::new(RuleSet::none());
        cart.add(ProductCode::UltSmall, None);
        cart.add(ProductCode::UltSmall, None);
        cart.add(ProductCode::UltLarge, None);

        assert_eq!(cart.items().quantity(ProductCode::UltSmall), 2);
        assert_eq!(cart.items().quantity(ProductCode::UltLarge), 1);
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items().total_quantity(), 3);
    }

    #[test]
    fn test_medium_bundles_one_gb_when_enabled() {
        let mut cart = Cart::new(RuleSet::from([PricingRule::Unlimited2GbBundle]));
        add_all(&mut cart, &[ProductCode::UltMedium, ProductCode::UltMedium], None);

        assert_eq!(cart.items().quantity(ProductCode::UltMedium), 2);
        assert_eq!(cart.items().quantity(ProductCode::OneGb), 2);
    }

    #[test]
    fn test_no_bundle_without_rule() {
        let mut cart = Cart::new(RuleSet::from([PricingRule::Unlimited5GbBulkDiscount]));
        add_all(&mut cart, &[ProductCode::UltMedium, ProductCode::UltMedium], None);

        assert_eq!(cart.items().quantity(ProductCode::UltMedium), 2);
        assert!(!cart.items().contains(ProductCode::OneGb));
    }

    #[test]
    fn test_manual_one_gb_adds_stack_with_bundled() {
        let mut cart = Cart::new(RuleSet::all());
        cart.add(ProductCode::UltMedium, None);
        cart.add(ProductCode::OneGb, None);

        assert_eq!(cart.items().quantity(ProductCode::OneGb), 2);
    }

    #[test]
    fn test_last_promo_code_wins() {
        let mut cart = Cart::new(RuleSet::all());
        assert_eq!(cart.promo_code(), None);

        cart.add(ProductCode::UltSmall, Some("FIRST"));
        cart.add(ProductCode::UltSmall, Some("SECOND"));
        assert_eq!(cart.promo_code(), Some("SECOND"));

        // Missing or empty promo keeps the stored one
        cart.add(ProductCode::UltSmall, None);
        cart.add(ProductCode::UltSmall, Some(""));
        assert_eq!(cart.promo_code(), Some("SECOND"));
    }

    #[test]
    fn test_rule_enabled() {
        let cart = Cart::new(RuleSet::from([PricingRule::AmaysimPromoCode]));
        assert!(cart.rule_enabled(PricingRule::AmaysimPromoCode));
        assert!(!cart.rule_enabled(PricingRule::Unlimited2GbBundle));
    }

    #[test]
    fn test_items_serialize_as_object() {
        let mut cart = Cart::new(RuleSet::all());
        add_all(&mut cart, &[ProductCode::UltSmall, ProductCode::UltMedium], None);

        let json = serde_json::to_string(cart.items()).unwrap();
        assert_eq!(json, r#"{"ult_small":1,"ult_medium":1,"one_gb":1}"#);
    }

    #[test]
    fn test_same_adds_are_deterministic() {
        let codes = [
            ProductCode::UltMedium,
            ProductCode::UltSmall,
            ProductCode::UltLarge,
            ProductCode::UltSmall,
            ProductCode::OneGb,
        ];

        let run = || {
            let mut cart = Cart::new(RuleSet::all());
            add_all(&mut cart, &codes, Some("I<3AMAYSIM"));
            (cart.total().unwrap(), cart.items().clone())
        };

        assert_eq!(run(), run());
    }
}
