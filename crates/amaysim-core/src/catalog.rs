//! # Product Catalog
//!
//! The four plans and data packs that can be put in a cart.
//!
//! ## Catalog
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Catalog                                 │
//! │                                                                         │
//! │   code          name               unit price                           │
//! │   ──────────    ────────────────   ──────────                           │
//! │   ult_small     Unlimited 1GB         $24.90                            │
//! │   ult_medium    Unlimited 2GB         $29.90                            │
//! │   ult_large     Unlimited 5GB         $44.90                            │
//! │   one_gb        1 GB Data-pack         $9.90                            │
//! │                                                                         │
//! │   Immutable, process-wide, no initialization or teardown.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Typed callers go through [`ProductCode`], so [`lookup`] only fails if the
//! catalog table and the enum drift apart. Untyped callers (CLI arguments,
//! config files, JSON) use [`lookup_str`], which fails with
//! [`CoreError::UnknownProduct`] for anything outside the closed set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product Code
// =============================================================================

/// Business identifier of a catalog product.
///
/// Ordering follows declaration order, which is also the order line items
/// are listed in a quote.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCode {
    UltSmall,
    UltMedium,
    UltLarge,
    OneGb,
}

impl ProductCode {
    /// Every product code, in catalog order.
    pub const ALL: [ProductCode; 4] = [
        ProductCode::UltSmall,
        ProductCode::UltMedium,
        ProductCode::UltLarge,
        ProductCode::OneGb,
    ];

    /// Returns the wire name (`"ult_small"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductCode::UltSmall => "ult_small",
            ProductCode::UltMedium => "ult_medium",
            ProductCode::UltLarge => "ult_large",
            ProductCode::OneGb => "one_gb",
        }
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ult_small" => Ok(ProductCode::UltSmall),
            "ult_medium" => Ok(ProductCode::UltMedium),
            "ult_large" => Ok(ProductCode::UltLarge),
            // "1gb" is the legacy code used by older front-ends
            "one_gb" | "1gb" => Ok(ProductCode::OneGb),
            other => Err(CoreError::UnknownProduct(other.to_string())),
        }
    }
}

// =============================================================================
// Product Name
// =============================================================================

/// Display name shown on the cart and receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductName {
    #[serde(rename = "Unlimited 1GB")]
    Unlimited1Gb,
    #[serde(rename = "Unlimited 2GB")]
    Unlimited2Gb,
    #[serde(rename = "Unlimited 5GB")]
    Unlimited5Gb,
    #[serde(rename = "1 GB Data-pack")]
    OneGbDataPack,
}

impl ProductName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductName::Unlimited1Gb => "Unlimited 1GB",
            ProductName::Unlimited2Gb => "Unlimited 2GB",
            ProductName::Unlimited5Gb => "Unlimited 5GB",
            ProductName::OneGbDataPack => "1 GB Data-pack",
        }
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Product {
    /// Business identifier.
    pub code: ProductCode,

    /// Display name.
    pub name: ProductName,

    /// Catalog price per unit.
    pub unit_price: Money,
}

impl Product {
    const fn new(code: ProductCode, name: ProductName, unit_price_cents: i64) -> Self {
        Product {
            code,
            name,
            unit_price: Money::from_cents(unit_price_cents),
        }
    }
}

static CATALOG: [Product; 4] = [
    Product::new(ProductCode::UltSmall, ProductName::Unlimited1Gb, 2490),
    Product::new(ProductCode::UltMedium, ProductName::Unlimited2Gb, 2990),
    Product::new(ProductCode::UltLarge, ProductName::Unlimited5Gb, 4490),
    Product::new(ProductCode::OneGb, ProductName::OneGbDataPack, 990),
];

/// Returns the full catalog.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Looks up a product by code.
///
/// ```rust
/// use amaysim_core::catalog::{lookup, ProductCode};
///
/// let product = lookup(ProductCode::UltLarge).unwrap();
/// assert_eq!(product.unit_price.cents(), 4490);
/// ```
pub fn lookup(code: ProductCode) -> CoreResult<&'static Product> {
    CATALOG
        .iter()
        .find(|p| p.code == code)
        .ok_or_else(|| CoreError::UnknownProduct(code.to_string()))
}

/// Parses a product code from text and looks it up.
///
/// ```rust
/// use amaysim_core::catalog::lookup_str;
///
/// assert!(lookup_str("ult_medium").is_ok());
/// assert!(lookup_str("ult_xl").is_err());
/// ```
pub fn lookup_str(code: &str) -> CoreResult<&'static Product> {
    lookup(code.parse()?)
}
