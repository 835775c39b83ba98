use config::builder::DefaultState;
use config::ConfigBuilder;
use pizza_catalog::{BaseVariant, StockLedger, Topping, STARTING_STOCK};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inventory: InventoryConfig,
}

/// Opening stock per item
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub margherita: u32,
    pub pepperoni: u32,
    pub cheese: u32,
    pub olives: u32,
    pub mushrooms: u32,
}

impl InventoryConfig {
    /// Counts keyed by ledger item name
    pub fn stock_items(&self) -> [(&'static str, u32); 5] {
        [
            (BaseVariant::Margherita.stock_item(), self.margherita),
            (BaseVariant::Pepperoni.stock_item(), self.pepperoni),
            (Topping::Cheese.stock_item(), self.cheese),
            (Topping::Olives.stock_item(), self.olives),
            (Topping::Mushrooms.stock_item(), self.mushrooms),
        ]
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/development.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `PIZZA__INVENTORY__CHEESE=3` sets the opening cheese stock
            .add_source(config::Environment::with_prefix("PIZZA").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Builder pre-filled with the standard opening stock
    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        STARTING_STOCK
            .iter()
            .try_fold(config::Config::builder(), |builder, (item, count)| {
                builder.set_default(
                    format!("inventory.{}", item.to_lowercase()),
                    i64::from(*count),
                )
            })
    }
}

/// Build the session's ledger from configuration
pub fn seed_ledger(config: &Config) -> StockLedger {
    let ledger = StockLedger::with_stock(config.inventory.stock_items());
    tracing::debug!(stock = %ledger.snapshot(), "ledger seeded");
    ledger
}
