//! # Checkout Demo
//!
//! Prices a cart from the command line.
//!
//! ## Usage
//! ```bash
//! # Price a cart with the configured rules
//! cargo run -p amaysim-checkout --bin checkout -- ult_small ult_small ult_small ult_large
//!
//! # With a promo code, as JSON
//! cargo run -p amaysim-checkout --bin checkout -- --promo 'I<3AMAYSIM' --json ult_small one_gb
//!
//! # Run the four reference scenarios
//! cargo run -p amaysim-checkout --bin checkout -- --scenarios
//!
//! # Use a specific config file
//! cargo run -p amaysim-checkout --bin checkout -- --config ./pricing.toml ult_medium
//! ```

use std::env;
use std::path::PathBuf;
use std::process;

use amaysim_checkout::{checkout, init_tracing, PricingConfig, SCENARIOS};
use amaysim_core::Cart;
use tracing::info;

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<PathBuf>,
    promo_code: Option<String>,
    json: bool,
    run_scenarios: bool,
    help: bool,
    codes: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--config" | "-c" | "--promo" | "-p") => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", flag))?;
                if flag == "--config" || flag == "-c" {
                    parsed.config_path = Some(PathBuf::from(value));
                } else {
                    parsed.promo_code = Some(value.clone());
                }
                i += 1;
            }
            "--json" => parsed.json = true,
            "--scenarios" => parsed.run_scenarios = true,
            "--help" | "-h" => parsed.help = true,
            code => parsed.codes.push(code.to_string()),
        }
        i += 1;
    }

    Ok(parsed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            print_help();
            process::exit(2);
        }
    };

    if args.help {
        print_help();
        return Ok(());
    }

    init_tracing();

    let config = PricingConfig::load(args.config_path)?;
    let rules = config.rule_set();
    info!(rules = ?rules, "Pricing rules loaded");

    if args.run_scenarios {
        for scenario in SCENARIOS.iter() {
            println!("{}", scenario.name);
            print_cart(&scenario.run(rules.clone()), args.json)?;
            println!();
        }
        return Ok(());
    }

    if args.codes.is_empty() {
        print_help();
        return Ok(());
    }

    let cart = checkout(rules, args.codes.as_slice(), args.promo_code.as_deref())?;
    print_cart(&cart, args.json)?;

    Ok(())
}

fn print_cart(cart: &Cart, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let quote = cart.quote()?;

    if json {
        let out = serde_json::json!({
            "total": quote.formatted_total(),
            "items": cart.items(),
            "quote": quote,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for line in &quote.lines {
        let rule = line.rule.map(|r| format!("  ({})", r)).unwrap_or_default();
        println!(
            "  {:<16} x{:<3} {:>9}{}",
            line.name.as_str(),
            line.quantity,
            line.total.to_string(),
            rule
        );
    }
    if quote.promo_applied {
        println!("  {:<21} {:>9}", "Promo discount", format!("-{}", quote.discount));
    }
    println!("  {:<21} {:>9}", "Total", quote.formatted_total());

    Ok(())
}

fn print_help() {
    println!("Amaysim Cart Checkout");
    println!();
    println!("Usage: checkout [OPTIONS] <PRODUCT>...");
    println!();
    println!("Products: ult_small, ult_medium, ult_large, one_gb");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>   Pricing config file (default: platform config dir)");
    println!("  -p, --promo <CODE>    Promo code applied with every add");
    println!("      --json            Print the quote as JSON");
    println!("      --scenarios       Run the four reference scenarios");
    println!("  -h, --help            Show this help message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("checkout")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_products_and_flags() {
        let args = parse_args(&argv(&["--promo", "I<3AMAYSIM", "--json", "ult_small", "one_gb"]))
            .unwrap();

        assert_eq!(args.promo_code.as_deref(), Some("I<3AMAYSIM"));
        assert!(args.json);
        assert_eq!(args.codes, vec!["ult_small", "one_gb"]);
    }

    #[test]
    fn test_parse_config_path() {
        let args = parse_args(&argv(&["-c", "./pricing.toml", "--scenarios"])).unwrap();

        assert_eq!(args.config_path, Some(PathBuf::from("./pricing.toml")));
        assert!(args.run_scenarios);
        assert!(args.codes.is_empty());
    }

    #[test]
    fn test_trailing_flag_without_value_fails() {
        assert!(parse_args(&argv(&["ult_small", "--promo"])).is_err());
        assert!(parse_args(&argv(&["ult_small", "-p"])).is_err());
        assert!(parse_args(&argv(&["--config"])).is_err());
    }
}
