use std::env;

use anyhow::anyhow;
use business::domain::product::value_objects::PriceParsePolicy;

/// Catalog behavior switches
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub price_policy: PriceParsePolicy,
    pub seed_demo_products: bool,
}

impl CatalogConfig {
    /// Environment variables:
    /// - PRICE_PARSE_POLICY: "lenient" (default) or "strict"
    /// - SEED_DEMO_PRODUCTS: "true" to seed the demo catalog into an empty store (default: "false")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("PRICE_PARSE_POLICY").ok().as_deref(),
            env::var("SEED_DEMO_PRODUCTS").ok().as_deref(),
        )
    }

    fn from_values(policy: Option<&str>, seed: Option<&str>) -> anyhow::Result<Self> {
        let price_policy = match policy {
            Some(value) => value
                .trim()
                .parse::<PriceParsePolicy>()
                .map_err(|e| anyhow!("PRICE_PARSE_POLICY: {e}"))?,
            None => PriceParsePolicy::default(),
        };

        let seed_demo_products = match seed.map(|s| s.trim().to_ascii_lowercase()) {
            None => false,
            Some(value) => match value.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => return Err(anyhow!("SEED_DEMO_PRODUCTS: invalid boolean {other:?}")),
            },
        };

        Ok(Self {
            price_policy,
            seed_demo_products,
        })
    }
}
