//! # Pricing Engine
//!
//! Turns line items, the enabled rules and the promo code into a [`Quote`].
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing a Cart                                   │
//! │                                                                         │
//! │  for each (code, qty) in items:                                         │
//! │      price_line()  first match wins                                    │
//! │        1. 3-for-2 deal      ult_small, qty ≥ 3                          │
//! │        2. bulk discount     ult_large, qty > 3   → $39.90 each          │
//! │        3. 2GB bundle        one_gb, cart has ult_medium                 │
//! │        4. catalog price     unit price × qty                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  subtotal = Σ line totals                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  promo rule on AND promo == "I<3AMAYSIM"?  → discount = 10% (half-up)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  total = subtotal − discount                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is integer cents. The 3-for-2 deal is priced per
//! complete group rather than at `2/3` of the unit price, which gives the
//! same number without a fractional cent.

use serde::Serialize;
use tracing::{debug, trace};
use ts_rs::TS;

use crate::cart::LineItems;
use crate::catalog::{lookup, Product, ProductCode, ProductName};
use crate::error::CoreResult;
use crate::money::{currency, Money};
use crate::rules::{
    PricingRule, RuleSet, BULK_THRESHOLD, BULK_UNIT_PRICE, DEAL_CHARGED_PER_GROUP,
    DEAL_GROUP_SIZE, PROMO_CODE, PROMO_DISCOUNT_BPS,
};

// =============================================================================
// Quote Types
// =============================================================================

/// The price of one line of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LinePrice {
    pub code: ProductCode,
    pub name: ProductName,
    pub quantity: i64,
    /// Catalog unit price.
    pub unit_price: Money,
    /// The rule that priced this line, `None` for catalog pricing.
    pub rule: Option<PricingRule>,
    pub total: Money,
}

/// A priced cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Quote {
    /// One entry per distinct product, in product code order.
    pub lines: Vec<LinePrice>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Promo code discount, zero when the promo doesn't apply.
    pub discount: Money,
    pub promo_applied: bool,
    pub total: Money,
}

impl Quote {
    /// The total as a currency string.
    pub fn formatted_total(&self) -> String {
        currency(self.total)
    }
}

// =============================================================================
// Line Pricing
// =============================================================================

/// Prices the line for `product` given the whole cart.
///
/// The cart is needed because the 2GB bundle makes the 1 GB Data-pack line
/// depend on the Unlimited 2GB quantity.
pub fn price_line(product: &Product, items: &LineItems, rules: &RuleSet) -> LinePrice {
    let code = product.code;
    let quantity = items.quantity(code);
    let unit_price = product.unit_price;

    let (rule, total) = if rules.contains(PricingRule::Unlimited1GbDeal)
        && code == ProductCode::UltSmall
        && quantity >= DEAL_GROUP_SIZE
    {
        let remainder = quantity % DEAL_GROUP_SIZE;
        let groups = (quantity - remainder) / DEAL_GROUP_SIZE;
        let charged = remainder + groups * DEAL_CHARGED_PER_GROUP;
        (
            Some(PricingRule::Unlimited1GbDeal),
            unit_price.multiply_quantity(charged),
        )
    } else if rules.contains(PricingRule::Unlimited5GbBulkDiscount)
        && code == ProductCode::UltLarge
        && quantity > BULK_THRESHOLD
    {
        (
            Some(PricingRule::Unlimited5GbBulkDiscount),
            BULK_UNIT_PRICE.multiply_quantity(quantity),
        )
    } else if rules.contains(PricingRule::Unlimited2GbBundle)
        && code == ProductCode::OneGb
        && items.contains(ProductCode::UltMedium)
    {
        // Free units follow the current 2GB quantity, not per-unit tags
        let bundled = items.quantity(ProductCode::UltMedium);
        debug_assert!(quantity >= bundled, "fewer data packs than bundled plans");
        (
            Some(PricingRule::Unlimited2GbBundle),
            unit_price.multiply_quantity(quantity - bundled),
        )
    } else {
        (None, unit_price.multiply_quantity(quantity))
    };

    trace!(%code, quantity, rule = ?rule, total = %total, "Priced line");

    LinePrice {
        code,
        name: product.name,
        quantity,
        unit_price,
        rule,
        total,
    }
}

/// Whether the promo code discount applies.
pub fn promo_applies(rules: &RuleSet, promo_code: Option<&str>) -> bool {
    rules.contains(PricingRule::AmaysimPromoCode) && promo_code == Some(PROMO_CODE)
}

/// Prices a whole cart.
///
/// Fails with [`CoreError::UnknownProduct`](crate::CoreError::UnknownProduct)
/// only if a line item has no catalog entry.
pub fn quote(items: &LineItems, rules: &RuleSet, promo_code: Option<&str>) -> CoreResult<Quote> {
    let lines = items
        .iter()
        .map(|(code, _)| Ok(price_line(lookup(code)?, items, rules)))
        .collect::<CoreResult<Vec<_>>>()?;

    let subtotal: Money = lines.iter().map(|line| line.total).sum();

    let promo_applied = promo_applies(rules, promo_code);
    let discount = if promo_applied {
        subtotal.percentage(PROMO_DISCOUNT_BPS)
    } else {
        Money::zero()
    };
    let total = subtotal - discount;

    debug!(
        lines = lines.len(),
        subtotal = %subtotal,
        discount = %discount,
        total = %total,
        "Priced cart"
    );

    Ok(Quote {
        lines,
        subtotal,
        discount,
        promo_applied,
        total,
    })
}
