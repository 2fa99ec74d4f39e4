//! # amaysim-core: Cart Pricing for Amaysim Plans
//!
//! This crate is the **heart** of Amaysim Cart. It holds the product
//! catalog, the cart, and the rule-driven pricing engine as pure code with
//! zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Amaysim Cart Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Embedding app (checkout CLI, web handler)           │   │
//! │  │    loads RuleSet ──► Cart::add ──► Cart::total / Cart::items     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ amaysim-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   rules   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │PricingRule│  │   Cart    │  │   Quote   │  │   │
//! │  │   │ProductCode│  │  RuleSet  │  │ LineItems │  │ LinePrice │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   money: integer cents + currency formatter                     │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`](mod@catalog) - The four products and their lookup
//! - [`rules`] - Pricing rules and the enabled rule set
//! - [`cart`] - Line items and the cart
//! - [`pricing`] - Line and cart pricing
//! - [`money`] - Money type and currency formatting
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use amaysim_core::{Cart, ProductCode, RuleSet};
//!
//! let mut cart = Cart::new(RuleSet::all());
//! cart.add(ProductCode::UltSmall, Some("I<3AMAYSIM"));
//! cart.add(ProductCode::OneGb, None);
//!
//! // ($24.90 + $9.90) - 10%
//! assert_eq!(cart.total().unwrap(), "$31.32");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod rules;

// These allow users to do `use amaysim_core::Cart` instead of
// `use amaysim_core::cart::Cart`
pub use cart::{Cart, LineItems};
pub use catalog::{catalog, lookup, lookup_str, Product, ProductCode, ProductName};
pub use error::{CoreError, CoreResult};
pub use money::{currency, Money};
pub use pricing::{LinePrice, Quote};
pub use rules::{PricingRule, RuleSet, PROMO_CODE};
