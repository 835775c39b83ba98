pub mod money;
pub mod payment;

pub use money::Money;
pub use payment::{PaymentAdapter, PaymentError, PaymentMethod, PaymentStatus};
