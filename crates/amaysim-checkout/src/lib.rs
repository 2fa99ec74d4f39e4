//! # amaysim-checkout
//!
//! Everything around the pricing engine that touches the outside world:
//! loading the rule configuration, installing the log subscriber, and
//! driving carts from untyped input for the `checkout` binary.
//!
//! ## Startup Sequence
//! ```text
//! init_tracing() ──► PricingConfig::load() ──► config.rule_set()
//!                                                   │
//!                                                   ▼
//!                               checkout(rules, codes, promo) ──► Cart
//! ```

pub mod config;
pub mod error;
pub mod scenarios;

pub use config::PricingConfig;
pub use error::{CheckoutError, CheckoutResult};
pub use scenarios::{checkout, Scenario, SCENARIOS};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=amaysim_core=trace` - Show every priced line
/// - Default: INFO, with DEBUG for the amaysim crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,amaysim_core=debug,amaysim_checkout=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
