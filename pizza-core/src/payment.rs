use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Money;

/// Ways a customer can settle an order at the counter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    PayPal,
    CreditCard,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Succeeded,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment declined by {method}: {reason}")]
    Declined {
        method: PaymentMethod,
        reason: String,
    },
}

/// A payment channel. Implementations only simulate the charge.
#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// The method this adapter settles
    fn method(&self) -> PaymentMethod;

    /// Charge `amount`, returning a human readable confirmation
    async fn charge(&self, amount: Money) -> Result<String, PaymentError>;
}
