use chrono::{DateTime, Utc};
use pizza_catalog::Pizza;
use pizza_core::{Money, PaymentMethod};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Proposed,
    Paid,
}

/// How the order was settled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tender {
    Dispatched(PaymentMethod),
    /// No valid method was picked; treated as paid in cash
    CashFallback,
}

/// One finished pizza and how it was paid for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub description: String,
    pub total: Money,
    pub tender: Option<Tender>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Freeze the composed pizza into an order
    pub fn new(pizza: &dyn Pizza) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: pizza.description(),
            total: pizza.cost(),
            tender: None,
            status: OrderStatus::Proposed,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }
}
