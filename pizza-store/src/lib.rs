pub mod app_config;

pub use app_config::{seed_ledger, Config, InventoryConfig};
