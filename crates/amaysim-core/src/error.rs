//! # Error Types
//!
//! Domain-specific error types for amaysim-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  amaysim-core errors (this file)                                       │
//! │  └── CoreError        - Unknown product / unknown pricing rule         │
//! │                                                                         │
//! │  amaysim-checkout errors (separate crate)                              │
//! │  └── CheckoutError    - Config file, env, and I/O failures             │
//! │                                                                         │
//! │  Flow: CoreError → CheckoutError → process exit                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both variants are programmer or operator errors. With a typed
//! [`ProductCode`](crate::ProductCode) neither can be produced by the cart
//! API; they come from parsing text.

use thiserror::Error;

/// Core pricing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product code has no catalog entry.
    ///
    /// ## When This Occurs
    /// - A binding layer passes a string such as `"ult_xl"`
    /// - A config or CLI argument names a product that doesn't exist
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Pricing rule name is not recognized.
    #[error("Unknown pricing rule: {0}")]
    UnknownPricingRule(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownProduct("ult_xl".to_string());
        assert_eq!(err.to_string(), "Unknown product: ult_xl");

        let err = CoreError::UnknownPricingRule("half price".to_string());
        assert_eq!(err.to_string(), "Unknown pricing rule: half price");
    }
}
