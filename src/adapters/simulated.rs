use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Order, OrderId, PaymentMethod};
use crate::ports::{Kitchen, KitchenError, PaymentGateway, PaymentGatewayError};

// ============================================================================
// Simulated collaborators
// ============================================================================
//
// Approve everything by default. Queued failures are returned one per call,
// in order. Every call is counted, including failed ones.
//
// ============================================================================

/// Scripted outcomes for one kind of call.
struct Script<E> {
    failures: Mutex<VecDeque<E>>,
    calls: AtomicU32,
}

impl<E> Default for Script<E> {
    fn default() -> Self {
        Self {
            failures: Mutex::new(VecDeque::new()),
            calls: AtomicU32::new(0),
        }
    }
}

impl<E> Script<E> {
    async fn push(&self, failure: E) {
        self.failures.lock().await.push_back(failure);
    }

    async fn next(&self, latency: Duration) -> Result<(), E> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        match self.failures.lock().await.pop_front() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct SimulatedPaymentGateway {
    latency: Duration,
    charges: Script<PaymentGatewayError>,
    refunds: Script<PaymentGatewayError>,
}

impl SimulatedPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn fail_next_pay(&self, error: PaymentGatewayError) {
        self.charges.push(error).await;
    }

    pub async fn fail_next_reverse(&self, error: PaymentGatewayError) {
        self.refunds.push(error).await;
    }

    pub fn pay_calls(&self) -> u32 {
        self.charges.calls()
    }

    pub fn reverse_calls(&self) -> u32 {
        self.refunds.calls()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn pay(&self, order: &Order, method: PaymentMethod) -> Result<(), PaymentGatewayError> {
        tracing::debug!(order_id = order.id, amount = %order.amount(), method = %method, "Simulated charge");
        self.charges.next(self.latency).await
    }

    async fn reverse(&self, order: &Order) -> Result<(), PaymentGatewayError> {
        tracing::debug!(order_id = order.id, amount = %order.payment.value, "Simulated refund");
        self.refunds.next(self.latency).await
    }
}

#[derive(Default)]
pub struct SimulatedKitchen {
    latency: Duration,
    preparations: Script<KitchenError>,
    pickups: Script<KitchenError>,
}

impl SimulatedKitchen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn fail_next_preparation(&self, error: KitchenError) {
        self.preparations.push(error).await;
    }

    pub async fn fail_next_ready(&self, error: KitchenError) {
        self.pickups.push(error).await;
    }

    pub fn preparation_calls(&self) -> u32 {
        self.preparations.calls()
    }

    pub fn ready_calls(&self) -> u32 {
        self.pickups.calls()
    }
}

#[async_trait]
impl Kitchen for SimulatedKitchen {
    async fn preparation(&self, order: &Order) -> Result<(), KitchenError> {
        tracing::debug!(order_id = order.id, items = order.items_quantity(), "Simulated kitchen ticket");
        self.preparations.next(self.latency).await
    }

    async fn ready_delivery(&self, order_id: OrderId) -> Result<(), KitchenError> {
        tracing::debug!(order_id, "Simulated pickup call");
        self.pickups.next(self.latency).await
    }
}
