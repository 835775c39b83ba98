use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Stock every session opens with unless configuration says otherwise
pub const STARTING_STOCK: [(&str, u32); 5] = [
    ("Margherita", 10),
    ("Pepperoni", 10),
    ("Cheese", 15),
    ("Olives", 10),
    ("Mushrooms", 12),
];

/// Remaining units per item for one counter session.
///
/// There is exactly one ledger per running session; the caller owns it and
/// hands out references (or an `Arc`) to everything that consumes stock.
#[derive(Debug, Default)]
pub struct StockLedger {
    stock: Mutex<BTreeMap<String, u32>>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the given counts
    pub fn with_stock<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let stock = items
            .into_iter()
            .map(|(item, count)| (item.into(), count))
            .collect();
        Self {
            stock: Mutex::new(stock),
        }
    }

    /// Ledger with the standard opening counts
    pub fn starting() -> Self {
        Self::with_stock(STARTING_STOCK)
    }

    /// Take one unit of `item` if any is left.
    ///
    /// Check and decrement happen under one lock, so two callers can never
    /// both take the last unit. Unknown items count as zero stock and are
    /// not added to the ledger.
    pub fn check_and_decrement(&self, item: &str) -> bool {
        let mut stock = self.lock();
        match stock.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                tracing::debug!(item, remaining = *count, "stock decremented");
                true
            }
            _ => {
                tracing::debug!(item, "stock unavailable");
                false
            }
        }
    }

    /// Units currently left for `item`
    pub fn available(&self, item: &str) -> u32 {
        self.lock().get(item).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot(self.lock().clone())
    }

    // The map is only ever mutated in single statements, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, u32>> {
        self.stock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Point-in-time copy of the ledger counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockSnapshot(BTreeMap<String, u32>);

impl StockSnapshot {
    pub fn get(&self, item: &str) -> Option<u32> {
        self.0.get(item).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(item, count)| (item.as_str(), *count))
    }
}

impl fmt::Display for StockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(item, count)| format!("{item}: {count}"))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
