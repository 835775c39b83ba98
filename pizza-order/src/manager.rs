use crate::models::{Order, OrderStatus, Tender};
use pizza_core::Money;
use uuid::Uuid;

/// Keeps the orders served during one counter session
pub struct OrderManager {
    orders: Vec<Order>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Record a new order, returning its id
    pub fn place(&mut self, order: Order) -> Uuid {
        let id = order.id;
        tracing::info!(order_id = %id, total = %order.total, "order placed");
        self.orders.push(order);
        id
    }

    pub fn get_order(&self, order_id: &Uuid) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == *order_id)
    }

    /// Transition: Proposed → Paid
    pub fn mark_paid(&mut self, order_id: &Uuid, tender: Tender) -> Result<(), OrderError> {
        let order = self.get_order_mut(order_id)?;

        if order.status != OrderStatus::Proposed {
            return Err(OrderError::InvalidTransition {
                from: format!("{:?}", order.status),
                to: "PAID".to_string(),
            });
        }

        order.tender = Some(tender);
        order.update_status(OrderStatus::Paid);
        tracing::info!(order_id = %order_id, ?tender, "order paid");
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn paid_count(&self) -> usize {
        self.orders.iter().filter(|o| o.is_paid()).count()
    }

    /// Sum of all paid orders
    pub fn revenue(&self) -> Money {
        self.orders
            .iter()
            .filter(|o| o.is_paid())
            .map(|o| o.total)
            .sum()
    }

    fn get_order_mut(&mut self, order_id: &Uuid) -> Result<&mut Order, OrderError> {
        self.orders
            .iter_mut()
            .find(|o| o.id == *order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: String,
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_catalog::{MargheritaPizza, PepperoniPizza};
    use pizza_core::PaymentMethod;

    #[test]
    fn test_order_lifecycle() {
        let mut manager = OrderManager::new();

        let order_id = manager.place(Order::new(&MargheritaPizza));
        assert_eq!(manager.get_order(&order_id).unwrap().status, OrderStatus::Proposed);

        manager
            .mark_paid(&order_id, Tender::Dispatched(PaymentMethod::PayPal))
            .unwrap();

        let order = manager.get_order(&order_id).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.tender, Some(Tender::Dispatched(PaymentMethod::PayPal)));
    }

    #[test]
    fn test_cannot_pay_twice() {
        let mut manager = OrderManager::new();
        let order_id = manager.place(Order::new(&PepperoniPizza));

        manager.mark_paid(&order_id, Tender::CashFallback).unwrap();
        let result = manager.mark_paid(&order_id, Tender::CashFallback);

        assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
    }

    #[test]
    fn test_unknown_order() {
        let mut manager = OrderManager::new();
        let result = manager.mark_paid(&Uuid::new_v4(), Tender::CashFallback);
        assert!(matches!(result, Err(OrderError::NotFound(_))));
    }

    #[test]
    fn test_revenue_counts_paid_orders_only() {
        let mut manager = OrderManager::new();
        let paid = manager.place(Order::new(&MargheritaPizza));
        manager.place(Order::new(&PepperoniPizza));
        manager.mark_paid(&paid, Tender::CashFallback).unwrap();

        assert_eq!(manager.orders().len(), 2);
        assert_eq!(manager.paid_count(), 1);
        assert_eq!(manager.revenue(), Money::from_cents(500));
    }
}
