use async_trait::async_trait;
use pizza_core::payment::{PaymentAdapter, PaymentError, PaymentMethod, PaymentStatus};
use pizza_core::Money;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of one dispatched payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Money,
    pub status: PaymentStatus,
    pub confirmation: String,
}

impl PaymentReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }
}

/// Routes a payment to the adapter registered for its method
pub struct PaymentOrchestrator {
    adapters: HashMap<PaymentMethod, Arc<dyn PaymentAdapter>>,
}

impl PaymentOrchestrator {
    /// Orchestrator without any adapters
    pub fn empty() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Register (or replace) the adapter for its method
    pub fn with_adapter(mut self, adapter: Arc<dyn PaymentAdapter>) -> Self {
        self.adapters.insert(adapter.method(), adapter);
        self
    }

    pub async fn pay(&self, method: PaymentMethod, amount: Money) -> PaymentReceipt {
        let result = match self.adapters.get(&method) {
            Some(adapter) => adapter.charge(amount).await,
            None => Err(PaymentError::Declined {
                method,
                reason: "no adapter registered".to_string(),
            }),
        };

        match result {
            Ok(confirmation) => {
                tracing::info!(%method, %amount, "payment succeeded");
                PaymentReceipt {
                    method,
                    amount,
                    status: PaymentStatus::Succeeded,
                    confirmation,
                }
            }
            Err(e) => {
                tracing::error!(%method, %amount, "payment failed: {}", e);
                PaymentReceipt {
                    method,
                    amount,
                    status: PaymentStatus::Failed,
                    confirmation: e.to_string(),
                }
            }
        }
    }
}

impl Default for PaymentOrchestrator {
    fn default() -> Self {
        Self::empty()
            .with_adapter(Arc::new(PayPalAdapter))
            .with_adapter(Arc::new(CreditCardAdapter))
    }
}

fn confirmation(method: PaymentMethod, amount: Money) -> String {
    format!("Paid {amount} using {method}")
}

/// Simulated PayPal checkout
pub struct PayPalAdapter;

#[async_trait]
impl PaymentAdapter for PayPalAdapter {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    async fn charge(&self, amount: Money) -> Result<String, PaymentError> {
        Ok(confirmation(self.method(), amount))
    }
}

/// Simulated card terminal
pub struct CreditCardAdapter;

#[async_trait]
impl PaymentAdapter for CreditCardAdapter {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    async fn charge(&self, amount: Money) -> Result<String, PaymentError> {
        Ok(confirmation(self.method(), amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DecliningAdapter;

    #[async_trait]
    impl PaymentAdapter for DecliningAdapter {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::CreditCard
        }

        async fn charge(&self, _amount: Money) -> Result<String, PaymentError> {
            Err(PaymentError::Declined {
                method: PaymentMethod::CreditCard,
                reason: "card expired".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_paypal_payment_succeeds() {
        let orchestrator = PaymentOrchestrator::default();

        let receipt = orchestrator
            .pay(PaymentMethod::PayPal, Money::from_cents(670))
            .await;

        assert!(receipt.succeeded());
        assert_eq!(receipt.confirmation, "Paid $6.70 using PayPal");
    }

    #[tokio::test]
    async fn test_credit_card_payment_succeeds() {
        let orchestrator = PaymentOrchestrator::default();

        let receipt = orchestrator
            .pay(PaymentMethod::CreditCard, Money::from_cents(500))
            .await;

        assert!(receipt.succeeded());
        assert_eq!(receipt.confirmation, "Paid $5.00 using Credit Card");
    }

    #[tokio::test]
    async fn test_declined_payment_reports_failure() {
        let orchestrator = PaymentOrchestrator::default().with_adapter(Arc::new(DecliningAdapter));

        let receipt = orchestrator
            .pay(PaymentMethod::CreditCard, Money::from_cents(600))
            .await;

        assert_eq!(receipt.status, PaymentStatus::Failed);
        assert!(receipt.confirmation.contains("card expired"));
    }

    #[tokio::test]
    async fn test_missing_adapter_fails() {
        let receipt = PaymentOrchestrator::empty()
            .pay(PaymentMethod::PayPal, Money::from_cents(100))
            .await;

        assert!(!receipt.succeeded());
    }
}
