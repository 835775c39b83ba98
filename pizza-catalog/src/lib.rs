pub mod inventory;
pub mod product;
pub mod factory;
pub mod toppings;

pub use inventory::{StockLedger, StockSnapshot, STARTING_STOCK};
pub use product::{BaseVariant, MargheritaPizza, PepperoniPizza, Pizza};
pub use factory::{factory_for, CatalogError, MargheritaFactory, PepperoniFactory, PizzaFactory};
pub use toppings::{apply_topping, Topping, ToppingDecorator};
