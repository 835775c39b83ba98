use std::sync::Arc;

use anyhow::Result;
use pizza_catalog::{apply_topping, factory_for, BaseVariant, Pizza, StockLedger};
use pizza_order::{Order, OrderManager, PaymentOrchestrator, Tender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::menu::{self, BaseChoice, PaymentChoice, ToppingChoice, CHOICE_PROMPT};

/// Whether the session keeps taking orders
enum Flow {
    Continue,
    Exit,
}

/// Interactive ordering loop over a line-based reader and a writer
pub struct CounterSession<R, W> {
    input: R,
    output: W,
    ledger: Arc<StockLedger>,
    payments: PaymentOrchestrator,
    orders: OrderManager,
}

impl<R, W> CounterSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, ledger: Arc<StockLedger>, payments: PaymentOrchestrator) -> Self {
        Self {
            input,
            output,
            ledger,
            payments,
            orders: OrderManager::new(),
        }
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    pub fn orders(&self) -> &OrderManager {
        &self.orders
    }

    /// Take orders until the customer exits or input runs out
    pub async fn run(&mut self) -> Result<()> {
        self.say("Welcome to the Pizza Restaurant!\n").await?;

        loop {
            self.say(&menu::base_menu()).await?;
            let Some(line) = self.ask().await? else { break };

            let variant = match BaseChoice::parse(&line) {
                BaseChoice::Exit => break,
                BaseChoice::Pizza(variant) => variant,
                BaseChoice::Invalid => {
                    self.say("\nInvalid choice!\n").await?;
                    continue;
                }
            };

            if let Flow::Exit = self.take_order(variant).await? {
                break;
            }
        }

        let summary = format!(
            "\nServed {} order(s), revenue {}\nGoodbye!\n",
            self.orders.paid_count(),
            self.orders.revenue()
        );
        self.say(&summary).await?;
        tracing::info!(orders = self.orders.paid_count(), "counter closed");
        Ok(())
    }

    async fn take_order(&mut self, variant: BaseVariant) -> Result<Flow> {
        let mut pizza = match factory_for(variant).create_pizza(&self.ledger) {
            Ok(pizza) => pizza,
            Err(e) => {
                self.say(&format!("{e}\n")).await?;
                return Ok(Flow::Continue);
            }
        };

        loop {
            self.say(&menu::topping_menu()).await?;
            let Some(line) = self.ask().await? else {
                tracing::warn!("input closed mid-order, order abandoned");
                return Ok(Flow::Exit);
            };

            match ToppingChoice::parse(&line) {
                ToppingChoice::Add(topping) => {
                    let layer = apply_topping(pizza, topping, &self.ledger);
                    if !layer.is_applied() {
                        self.say(&format!("{topping} topping is out of stock!\n")).await?;
                    }
                    pizza = Box::new(layer);
                }
                ToppingChoice::Finish => break,
                ToppingChoice::Invalid => {
                    self.say("Topping unavailable or out of stock!\n").await?;
                }
            }
        }

        self.checkout(pizza.as_ref()).await
    }

    async fn checkout(&mut self, pizza: &dyn Pizza) -> Result<Flow> {
        let order = Order::new(pizza);
        let total = order.total;
        self.say(&format!(
            "\nYour order:\nDescription: {}\nTotal cost: {}\n",
            order.description, total
        ))
        .await?;

        self.say(&menu::payment_menu()).await?;
        let Some(line) = self.ask().await? else {
            tracing::warn!("input closed before payment, order abandoned");
            return Ok(Flow::Exit);
        };

        let order_id = self.orders.place(order);
        let tender = match PaymentChoice::parse(&line) {
            PaymentChoice::Method(method) => {
                let receipt = self.payments.pay(method, total).await;
                self.say(&format!("{}\n", receipt.confirmation)).await?;
                receipt.succeeded().then_some(Tender::Dispatched(method))
            }
            PaymentChoice::Cash => {
                self.say("Invalid payment method! Pay cash.\n").await?;
                Some(Tender::CashFallback)
            }
        };

        match tender {
            Some(tender) => {
                self.orders.mark_paid(&order_id, tender)?;
                self.say("Payment processed successfully\n").await?;
            }
            None => {
                // Stock stays taken; the order is left unpaid
                tracing::warn!(order_id = %order_id, "payment failed, order left unpaid");
                self.say("Payment failed\n").await?;
            }
        }

        let snapshot = self.ledger.snapshot();
        self.say(&format!("\nRemaining Inventory:\n{snapshot}\n")).await?;
        Ok(Flow::Continue)
    }

    /// Prompt for a choice; `None` once the input is exhausted
    async fn ask(&mut self) -> Result<Option<String>> {
        self.say(CHOICE_PROMPT).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
