//! # Pricing Rules
//!
//! The named promotions a cart can be configured with, and the set type that
//! holds the enabled ones.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Rules                                   │
//! │                                                                         │
//! │  unlimited_1gb_deal           3-for-2 on Unlimited 1GB                  │
//! │  unlimited_5gb_bulk_discount  $39.90 each when buying more than 3 5GB   │
//! │  unlimited_2gb_bundle         free 1 GB Data-pack with every 2GB plan   │
//! │  amaysim_promocode            10% off the total with "I<3AMAYSIM"       │
//! │                                                                         │
//! │  RuleSet is chosen when the cart is created and never changes.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::catalog::ProductCode;
use crate::error::CoreError;
use crate::money::Money;

/// The promo code recognized by [`PricingRule::AmaysimPromoCode`].
/// Matched exactly; comparison is case-sensitive.
pub const PROMO_CODE: &str = "I<3AMAYSIM";

/// Promo code discount in basis points (10%).
pub const PROMO_DISCOUNT_BPS: u32 = 1000;

/// Unit price of Unlimited 5GB under the bulk discount.
pub const BULK_UNIT_PRICE: Money = Money::from_cents(3990);

/// Bulk discount applies when the 5GB quantity is strictly greater than this.
pub const BULK_THRESHOLD: i64 = 3;

/// Size of a 3-for-2 group.
pub const DEAL_GROUP_SIZE: i64 = 3;

/// Units charged per complete 3-for-2 group.
pub const DEAL_CHARGED_PER_GROUP: i64 = 2;

// =============================================================================
// Pricing Rule
// =============================================================================

/// A named promotion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum PricingRule {
    /// 3-for-2 deal on Unlimited 1GB.
    #[serde(rename = "unlimited_1gb_deal")]
    Unlimited1GbDeal,

    /// Bulk price on Unlimited 5GB when buying more than three.
    #[serde(rename = "unlimited_5gb_bulk_discount")]
    Unlimited5GbBulkDiscount,

    /// Free 1 GB Data-pack bundled with every Unlimited 2GB.
    #[serde(rename = "unlimited_2gb_bundle")]
    Unlimited2GbBundle,

    /// 10% off the whole cart with the promo code.
    #[serde(rename = "amaysim_promocode")]
    AmaysimPromoCode,
}

impl PricingRule {
    pub const ALL: [PricingRule; 4] = [
        PricingRule::Unlimited1GbDeal,
        PricingRule::Unlimited5GbBulkDiscount,
        PricingRule::Unlimited2GbBundle,
        PricingRule::AmaysimPromoCode,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PricingRule::Unlimited1GbDeal => "unlimited_1gb_deal",
            PricingRule::Unlimited5GbBulkDiscount => "unlimited_5gb_bulk_discount",
            PricingRule::Unlimited2GbBundle => "unlimited_2gb_bundle",
            PricingRule::AmaysimPromoCode => "amaysim_promocode",
        }
    }
}

impl fmt::Display for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingRule {
    type Err = CoreError;

    /// Accepts the canonical names plus the marketing labels the rules were
    /// first published under. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unlimited_1gb_deal" | "3 for 2 deal" => Ok(PricingRule::Unlimited1GbDeal),
            "unlimited_5gb_bulk_discount" | "bulk discount" => {
                Ok(PricingRule::Unlimited5GbBulkDiscount)
            }
            "unlimited_2gb_bundle" | "bundle" => Ok(PricingRule::Unlimited2GbBundle),
            "amaysim_promocode" | PROMO_CODE => Ok(PricingRule::AmaysimPromoCode),
            other => Err(CoreError::UnknownPricingRule(other.to_string())),
        }
    }
}

// =============================================================================
// Rule Set
// =============================================================================

/// The enabled subset of [`PricingRule`]s.
///
/// Serialized as a list of rule names:
/// `["unlimited_1gb_deal", "amaysim_promocode"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(BTreeSet<PricingRule>);

impl RuleSet {
    /// All four rules enabled.
    pub fn all() -> Self {
        PricingRule::ALL.into_iter().collect()
    }

    /// No rules: every line is catalog price × quantity.
    pub fn none() -> Self {
        RuleSet::default()
    }

    #[inline]
    pub fn contains(&self, rule: PricingRule) -> bool {
        self.0.contains(&rule)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PricingRule> + '_ {
        self.0.iter().copied()
    }

    /// Post-add hook: the product that is automatically added alongside
    /// `code`, if any.
    ///
    /// With the 2GB bundle enabled every Unlimited 2GB brings one 1 GB
    /// Data-pack with it.
    ///
    /// ```rust
    /// use amaysim_core::{ProductCode, RuleSet};
    ///
    /// let rules = RuleSet::all();
    /// assert_eq!(rules.bundled_with(ProductCode::UltMedium), Some(ProductCode::OneGb));
    /// assert_eq!(rules.bundled_with(ProductCode::UltSmall), None);
    /// assert_eq!(RuleSet::none().bundled_with(ProductCode::UltMedium), None);
    /// ```
    pub fn bundled_with(&self, code: ProductCode) -> Option<ProductCode> {
        if self.contains(PricingRule::Unlimited2GbBundle) && code == ProductCode::UltMedium {
            Some(ProductCode::OneGb)
        } else {
            None
        }
    }
}

impl FromIterator<PricingRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = PricingRule>>(iter: I) -> Self {
        RuleSet(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[PricingRule; N]> for RuleSet {
    fn from(rules: [PricingRule; N]) -> Self {
        rules.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_parsing() {
        assert_eq!(
            "unlimited_1gb_deal".parse::<PricingRule>().unwrap(),
            PricingRule::Unlimited1GbDeal
        );
        assert_eq!(
            "bulk discount".parse::<PricingRule>().unwrap(),
            PricingRule::Unlimited5GbBulkDiscount
        );
        assert_eq!("bundle".parse::<PricingRule>().unwrap(), PricingRule::Unlimited2GbBundle);
        assert_eq!(
            "I<3AMAYSIM".parse::<PricingRule>().unwrap(),
            PricingRule::AmaysimPromoCode
        );
        assert_eq!(
            "half price".parse::<PricingRule>().unwrap_err(),
            CoreError::UnknownPricingRule("half price".to_string())
        );
    }

    #[test]
    fn test_rule_parsing_is_exact() {
        for name in ["i<3amaysim", "Bundle", "UNLIMITED_1GB_DEAL", " bundle"] {
            assert_eq!(
                name.parse::<PricingRule>().unwrap_err(),
                CoreError::UnknownPricingRule(name.to_string())
            );
        }
    }

    #[test]
    fn test_display_matches_serde_name() {
        for rule in PricingRule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule));
        }
    }

    #[test]
    fn test_rule_set_membership() {
        let rules = RuleSet::from([PricingRule::Unlimited1GbDeal]);
        assert!(rules.contains(PricingRule::Unlimited1GbDeal));
        assert!(!rules.contains(PricingRule::AmaysimPromoCode));
        assert_eq!(rules.len(), 1);

        assert_eq!(RuleSet::all().len(), 4);
        assert!(RuleSet::none().is_empty());
    }

    #[test]
    fn test_bundle_hook_only_for_medium() {
        let rules = RuleSet::from([PricingRule::Unlimited2GbBundle]);
        for code in ProductCode::ALL {
            let expected = (code == ProductCode::UltMedium).then_some(ProductCode::OneGb);
            assert_eq!(rules.bundled_with(code), expected);
        }
    }

    #[test]
    fn test_bundle_hook_requires_rule() {
        let rules = RuleSet::from([
            PricingRule::Unlimited1GbDeal,
            PricingRule::Unlimited5GbBulkDiscount,
            PricingRule::AmaysimPromoCode,
        ]);
        assert_eq!(rules.bundled_with(ProductCode::UltMedium), None);
    }

    #[test]
    fn test_rule_set_serializes_as_list() {
        let rules = RuleSet::from([PricingRule::AmaysimPromoCode, PricingRule::Unlimited1GbDeal]);
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"["unlimited_1gb_deal","amaysim_promocode"]"#);

        let parsed: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rules);
    }
}
