pub mod models;
pub mod manager;
pub mod orchestrator;

pub use models::{Order, OrderStatus, Tender};
pub use manager::{OrderError, OrderManager};
pub use orchestrator::{CreditCardAdapter, PayPalAdapter, PaymentOrchestrator, PaymentReceipt};
