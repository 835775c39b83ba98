use pizza_core::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be served as a pizza: a base or a decorated base
pub trait Pizza: fmt::Debug + Send + Sync {
    fn description(&self) -> String;

    fn cost(&self) -> Money;
}

impl<P: Pizza + ?Sized> Pizza for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Money {
        (**self).cost()
    }
}

/// Base pizzas on the menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseVariant {
    Margherita,
    Pepperoni,
}

impl BaseVariant {
    pub const ALL: [BaseVariant; 2] = [BaseVariant::Margherita, BaseVariant::Pepperoni];

    /// Ledger key for this variant
    pub fn stock_item(&self) -> &'static str {
        match self {
            BaseVariant::Margherita => "Margherita",
            BaseVariant::Pepperoni => "Pepperoni",
        }
    }

    pub fn price(&self) -> Money {
        match self {
            BaseVariant::Margherita => MargheritaPizza::PRICE,
            BaseVariant::Pepperoni => PepperoniPizza::PRICE,
        }
    }
}

impl fmt::Display for BaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stock_item())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MargheritaPizza;

impl MargheritaPizza {
    pub const PRICE: Money = Money::from_cents(500);
}

impl Pizza for MargheritaPizza {
    fn description(&self) -> String {
        "Margherita pizza".to_string()
    }

    fn cost(&self) -> Money {
        Self::PRICE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PepperoniPizza;

impl PepperoniPizza {
    pub const PRICE: Money = Money::from_cents(600);
}

impl Pizza for PepperoniPizza {
    fn description(&self) -> String {
        "Pepperoni pizza".to_string()
    }

    fn cost(&self) -> Money {
        Self::PRICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pizzas() {
        assert_eq!(MargheritaPizza.description(), "Margherita pizza");
        assert_eq!(MargheritaPizza.cost().as_f64(), 5.0);
        assert_eq!(PepperoniPizza.description(), "Pepperoni pizza");
        assert_eq!(PepperoniPizza.cost().as_f64(), 6.0);
    }

    #[test]
    fn test_boxed_pizza_delegates() {
        let pizza: Box<dyn Pizza> = Box::new(PepperoniPizza);
        assert_eq!(pizza.description(), "Pepperoni pizza");
        assert_eq!(pizza.cost(), BaseVariant::Pepperoni.price());
    }
}
