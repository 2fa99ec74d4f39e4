//! # Pricing Configuration
//!
//! Chooses which pricing rules a checkout runs with.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     AMAYSIM_PRICING_RULES=unlimited_1gb_deal,amaysim_promocode         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, otherwise                                         │
//! │     ~/.config/cart/pricing.toml (Linux)                                │
//! │     ~/Library/Application Support/com.amaysim.cart/pricing.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     All four rules enabled                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [pricing]
//! rules = [
//!     "unlimited_1gb_deal",
//!     "unlimited_5gb_bulk_discount",
//!     "unlimited_2gb_bundle",
//!     "amaysim_promocode",
//! ]
//! ```

use amaysim_core::{PricingRule, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CheckoutError, CheckoutResult};

/// Environment variable holding a comma-separated rule list.
pub const RULES_ENV_VAR: &str = "AMAYSIM_PRICING_RULES";

/// Default config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pricing.toml";

// =============================================================================
// Pricing Settings
// =============================================================================

/// The `[pricing]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Enabled rules. An empty list turns every promotion off.
    #[serde(default = "default_rules")]
    pub rules: Vec<PricingRule>,
}

fn default_rules() -> Vec<PricingRule> {
    PricingRule::ALL.to_vec()
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            rules: default_rules(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete checkout configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub pricing: PricingSettings,
}

impl PricingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pricing.toml); a missing file is not an error
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CheckoutResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading pricing config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without env overrides or validation.
    pub fn from_file(path: &Path) -> CheckoutResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> CheckoutResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CheckoutResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CheckoutError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CheckoutError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| CheckoutError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Pricing config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CheckoutResult<()> {
        let mut seen = BTreeSet::new();
        for rule in &self.pricing.rules {
            if !seen.insert(*rule) {
                return Err(CheckoutError::InvalidConfig(format!(
                    "pricing rule '{}' is listed more than once",
                    rule
                )));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(rules) = std::env::var(RULES_ENV_VAR) {
            debug!(rules = %rules, "Overriding pricing rules from environment");
            self.apply_rules_override(&rules);
        }
    }

    /// Replaces the rule list with a comma-separated override.
    ///
    /// Unknown names are logged and skipped; an empty string disables every
    /// rule.
    pub fn apply_rules_override(&mut self, value: &str) {
        let mut rules = Vec::new();
        for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.parse::<PricingRule>() {
                Ok(rule) if rules.contains(&rule) => {}
                Ok(rule) => rules.push(rule),
                Err(e) => warn!(rule = %name, "Ignoring pricing rule override: {}", e),
            }
        }
        self.pricing.rules = rules;
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "amaysim", "cart")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// The rule set a new cart should be created with.
    pub fn rule_set(&self) -> RuleSet {
        self.pricing.rules.iter().copied().collect()
    }
}
