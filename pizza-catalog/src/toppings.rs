use pizza_core::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inventory::StockLedger;
use crate::product::Pizza;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topping {
    Cheese,
    Olives,
    Mushrooms,
}

impl Topping {
    pub const ALL: [Topping; 3] = [Topping::Cheese, Topping::Olives, Topping::Mushrooms];

    /// Ledger key, also the suffix appended to the description
    pub fn stock_item(&self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
            Topping::Olives => "Olives",
            Topping::Mushrooms => "Mushrooms",
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Topping::Cheese => Money::from_cents(100),
            Topping::Olives => Money::from_cents(50),
            Topping::Mushrooms => Money::from_cents(70),
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stock_item())
    }
}

/// One topping layer around an inner pizza.
///
/// A layer is either active (adds its suffix and price) or a pass-through
/// that reports the inner pizza unchanged. Building a layer never touches
/// stock; use [`apply_topping`] to consult the ledger first.
#[derive(Debug)]
pub struct ToppingDecorator {
    inner: Box<dyn Pizza>,
    topping: Topping,
    applied: bool,
}

impl ToppingDecorator {
    pub fn active(inner: Box<dyn Pizza>, topping: Topping) -> Self {
        Self {
            inner,
            topping,
            applied: true,
        }
    }

    pub fn pass_through(inner: Box<dyn Pizza>, topping: Topping) -> Self {
        Self {
            inner,
            topping,
            applied: false,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

impl Pizza for ToppingDecorator {
    fn description(&self) -> String {
        let inner = self.inner.description();
        if self.applied {
            format!("{inner} + {}", self.topping)
        } else {
            inner
        }
    }

    fn cost(&self) -> Money {
        if self.applied {
            self.inner.cost() + self.topping.price()
        } else {
            self.inner.cost()
        }
    }
}

/// Take one unit of `topping` and wrap `pizza` in an active layer, or wrap
/// it in a pass-through layer when the topping has run out.
pub fn apply_topping(pizza: Box<dyn Pizza>, topping: Topping, ledger: &StockLedger) -> ToppingDecorator {
    if ledger.check_and_decrement(topping.stock_item()) {
        tracing::info!(%topping, "topping added");
        ToppingDecorator::active(pizza, topping)
    } else {
        tracing::warn!(%topping, "topping out of stock, passing through");
        ToppingDecorator::pass_through(pizza, topping)
    }
}
