//! # Checkout Runs
//!
//! Drives a cart from untyped input, plus the four reference scenarios used
//! to demo the promotions.

use amaysim_core::ProductCode::{OneGb, UltLarge, UltMedium, UltSmall};
use amaysim_core::{Cart, ProductCode, RuleSet};
use tracing::debug;

use crate::error::CheckoutResult;

/// A named sequence of adds.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub items: &'static [ProductCode],
    /// Promo code supplied with every add.
    pub promo_code: Option<&'static str>,
}

/// The four reference scenarios, one per promotion.
pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        name: "3 for 2 deal on Unlimited 1GB",
        items: &[UltSmall, UltSmall, UltSmall, UltLarge],
        promo_code: None,
    },
    Scenario {
        name: "Bulk discount on Unlimited 5GB",
        items: &[UltSmall, UltSmall, UltLarge, UltLarge, UltLarge, UltLarge],
        promo_code: None,
    },
    Scenario {
        name: "Free 1 GB Data-pack with every Unlimited 2GB",
        items: &[UltSmall, UltMedium, UltMedium],
        promo_code: None,
    },
    Scenario {
        name: "Promo code I<3AMAYSIM",
        items: &[UltSmall, OneGb],
        promo_code: Some("I<3AMAYSIM"),
    },
];

impl Scenario {
    /// Builds the cart for this scenario under `rules`.
    pub fn run(&self, rules: RuleSet) -> Cart {
        debug!(scenario = self.name, "Running scenario");
        let mut cart = Cart::new(rules);
        for code in self.items {
            cart.add(*code, self.promo_code);
        }
        cart
    }
}

/// Builds a cart from product code strings.
///
/// Fails with `UnknownProduct` on the first code that isn't in the catalog;
/// nothing is priced for a cart that names an unknown product.
pub fn checkout<S: AsRef<str>>(
    rules: RuleSet,
    codes: &[S],
    promo_code: Option<&str>,
) -> CheckoutResult<Cart> {
    let codes = codes
        .iter()
        .map(|code| code.as_ref().parse::<ProductCode>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut cart = Cart::new(rules);
    for code in codes {
        cart.add(code, promo_code);
    }
    Ok(cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckoutError;
    use amaysim_core::CoreError;

    #[test]
    fn test_reference_scenarios() {
        let totals: Vec<String> = SCENARIOS
            .iter()
            .map(|s| s.run(RuleSet::all()).total().unwrap())
            .collect();
        assert_eq!(totals, ["$94.70", "$209.40", "$84.70", "$31.32"]);
    }

    #[test]
    fn test_checkout_from_strings() {
        let cart = checkout(RuleSet::all(), &["ult_small", "1gb"], Some("I<3AMAYSIM")).unwrap();
        assert_eq!(cart.total().unwrap(), "$31.32");
        assert_eq!(cart.items().quantity(ProductCode::OneGb), 1);
    }

    #[test]
    fn test_checkout_rejects_unknown_product() {
        let err = checkout(RuleSet::all(), &["ult_small", "ult_xl"], None).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Core(CoreError::UnknownProduct(ref code)) if code == "ult_xl"
        ));
    }
}
