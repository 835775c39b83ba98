use crate::inventory::StockLedger;
use crate::product::{BaseVariant, MargheritaPizza, PepperoniPizza, Pizza};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} pizza is out of stock")]
    OutOfStock(BaseVariant),
}

/// Creates one base variant, taking a unit from the ledger first
pub trait PizzaFactory {
    fn variant(&self) -> BaseVariant;

    fn create_pizza(&self, ledger: &StockLedger) -> Result<Box<dyn Pizza>, CatalogError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MargheritaFactory;

impl PizzaFactory for MargheritaFactory {
    fn variant(&self) -> BaseVariant {
        BaseVariant::Margherita
    }

    fn create_pizza(&self, ledger: &StockLedger) -> Result<Box<dyn Pizza>, CatalogError> {
        take_base(ledger, self.variant())?;
        Ok(Box::new(MargheritaPizza))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PepperoniFactory;

impl PizzaFactory for PepperoniFactory {
    fn variant(&self) -> BaseVariant {
        BaseVariant::Pepperoni
    }

    fn create_pizza(&self, ledger: &StockLedger) -> Result<Box<dyn Pizza>, CatalogError> {
        take_base(ledger, self.variant())?;
        Ok(Box::new(PepperoniPizza))
    }
}

/// Creator for the selected variant
pub fn factory_for(variant: BaseVariant) -> Box<dyn PizzaFactory> {
    match variant {
        BaseVariant::Margherita => Box::new(MargheritaFactory),
        BaseVariant::Pepperoni => Box::new(PepperoniFactory),
    }
}

fn take_base(ledger: &StockLedger, variant: BaseVariant) -> Result<(), CatalogError> {
    if ledger.check_and_decrement(variant.stock_item()) {
        tracing::info!(%variant, "base pizza created");
        Ok(())
    } else {
        tracing::warn!(%variant, "base pizza out of stock");
        Err(CatalogError::OutOfStock(variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_takes_one_unit() {
        let ledger = StockLedger::starting();

        let pizza = MargheritaFactory.create_pizza(&ledger).unwrap();

        assert_eq!(pizza.description(), "Margherita pizza");
        assert_eq!(ledger.available("Margherita"), 9);
        assert_eq!(ledger.available("Pepperoni"), 10);
    }

    #[test]
    fn test_out_of_stock_leaves_ledger_untouched() {
        let ledger = StockLedger::with_stock([("Pepperoni", 0), ("Cheese", 4)]);
        let before = ledger.snapshot();

        let err = PepperoniFactory.create_pizza(&ledger).unwrap_err();

        assert_eq!(err, CatalogError::OutOfStock(BaseVariant::Pepperoni));
        assert_eq!(err.to_string(), "Pepperoni pizza is out of stock");
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn test_factory_for_selects_variant() {
        let ledger = StockLedger::starting();

        for variant in BaseVariant::ALL {
            let factory = factory_for(variant);
            assert_eq!(factory.variant(), variant);
            let pizza = factory.create_pizza(&ledger).unwrap();
            assert_eq!(pizza.cost(), variant.price());
        }
        assert_eq!(ledger.available("Margherita"), 9);
        assert_eq!(ledger.available("Pepperoni"), 9);
    }
}
