use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tracing::{field, Instrument, Span};
use uuid::Uuid;

use crate::domain::{
    AttendantId, Cpf, CustomerId, Delivery, DeliveryStatus, ItemId, Order, OrderCommand, OrderId, Payment,
    PaymentMethod, PaymentStatus, ProductId,
};
use crate::metrics::OrchestratorMetrics;
use crate::ports::{
    AttendantRepository, CustomerRepository, DeliveryRepository, Kitchen, OrderRepository,
    PaymentGateway, PaymentRepository, ProductRepository, RepositoryError,
};
use crate::utils::{retry_on_transient, RetryConfig};

use super::errors::{OrchestratorError, SideEffect};
use super::locks::OrderLocks;

type Result<T> = std::result::Result<T, OrchestratorError>;

// ============================================================================
// Order Orchestrator
// ============================================================================
//
// Orchestrates: Lock → Load → Validate → Ports → Persist
//
// Side effects run strictly in sequence. A failed step stops the operation
// and the error carries the order as it is stored at that point.
//
// ============================================================================

/// Everything the orchestrator talks to.
#[derive(Clone)]
pub struct OrchestratorPorts {
    pub orders: Arc<dyn OrderRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub deliveries: Arc<dyn DeliveryRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub attendants: Arc<dyn AttendantRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub kitchen: Arc<dyn Kitchen>,
}

#[derive(Clone)]
pub struct OrderOrchestrator {
    ports: OrchestratorPorts,
    locks: OrderLocks,
    load_retry: RetryConfig,
    metrics: Option<Arc<OrchestratorMetrics>>,
}

fn command_span(command: &'static str) -> Span {
    tracing::info_span!(
        "order_command",
        command,
        order_id = field::Empty,
        correlation_id = %Uuid::new_v4()
    )
}

impl OrderOrchestrator {
    pub fn new(ports: OrchestratorPorts) -> Self {
        Self {
            ports,
            locks: OrderLocks::new(),
            load_retry: RetryConfig::default(),
            metrics: None,
        }
    }

    pub fn with_load_retry(mut self, load_retry: RetryConfig) -> Self {
        self.load_retry = load_retry;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<OrchestratorMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Open an empty order with a pending payment.
    pub async fn start_order(
        &self,
        customer_id: CustomerId,
        attendant_id: AttendantId,
    ) -> Result<Order> {
        let work = async {
            let customer = self
                .ports
                .customers
                .get_by_id(customer_id)
                .await
                .map_err(OrchestratorError::lookup)?;
            self.open_order(customer.id, attendant_id).await
        };

        self.observe("start_order", work.instrument(command_span("start_order")))
            .await
    }

    /// Same as [`start_order`](Self::start_order), resolving the customer by CPF.
    pub async fn start_order_for_cpf(&self, cpf: &Cpf, attendant_id: AttendantId) -> Result<Order> {
        let work = async {
            let customer = self
                .ports
                .customers
                .get_by_cpf(cpf)
                .await
                .map_err(OrchestratorError::lookup)?;
            self.open_order(customer.id, attendant_id).await
        };

        self.observe("start_order", work.instrument(command_span("start_order")))
            .await
    }

    pub async fn add_item(
        &self,
        order_id: OrderId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<Order> {
        self.handle(order_id, OrderCommand::AddItem { product_id, quantity })
            .await
    }

    pub async fn remove_item(&self, order_id: OrderId, item_id: ItemId) -> Result<Order> {
        self.handle(order_id, OrderCommand::RemoveItem { item_id }).await
    }

    /// Charge the order, then hand it to the kitchen.
    ///
    /// A kitchen failure after a successful charge leaves the order `PAID`
    /// and flagged for [`retry_preparation`](Self::retry_preparation).
    pub async fn pay(&self, order_id: OrderId, method: PaymentMethod) -> Result<Order> {
        self.handle(order_id, OrderCommand::Pay { method }).await
    }

    pub async fn retry_preparation(&self, order_id: OrderId) -> Result<Order> {
        self.handle(order_id, OrderCommand::RetryPreparation).await
    }

    pub async fn mark_ready(&self, order_id: OrderId) -> Result<Order> {
        self.handle(order_id, OrderCommand::MarkReady).await
    }

    pub async fn deliver(&self, order_id: OrderId) -> Result<Order> {
        self.handle(order_id, OrderCommand::Deliver).await
    }

    /// Cancel the order, refunding first when it was paid.
    pub async fn cancel(&self, order_id: OrderId) -> Result<Order> {
        self.handle(order_id, OrderCommand::Cancel).await
    }

    /// Run one lifecycle command against an existing order.
    pub async fn handle(&self, order_id: OrderId, command: OrderCommand) -> Result<Order> {
        let name = command.name();
        let span = command_span(name);
        span.record("order_id", order_id);

        self.observe(name, self.execute(order_id, command).instrument(span))
            .await
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub async fn get_order(&self, order_id: OrderId) -> Result<Order> {
        self.load(order_id).await
    }

    /// Orders not yet delivered or canceled, newest first.
    pub async fn list_active_orders(&self) -> Result<Vec<Order>> {
        let orders = Arc::clone(&self.ports.orders);
        retry_on_transient(&self.load_retry, "list_orders", move |_| {
            let orders = Arc::clone(&orders);
            async move { orders.list().await }
        })
        .await
        .map_err(OrchestratorError::lookup)
    }

    /// Paid orders the kitchen never acknowledged.
    pub async fn orders_awaiting_kitchen(&self) -> Result<Vec<Order>> {
        let orders = self.list_active_orders().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.needs_kitchen_retry)
            .collect())
    }

    // ========================================================================
    // Command execution
    // ========================================================================

    async fn execute(&self, order_id: OrderId, command: OrderCommand) -> Result<Order> {
        let _lock = self.locks.acquire(order_id).await;

        let order = self.load(order_id).await?;
        if let Err(source) = order.validate(&command) {
            tracing::warn!(status = %order.status, error = %source, "Command rejected");
            return Err(OrchestratorError::InvalidStateTransition {
                order: Box::new(order),
                source,
            });
        }

        tracing::debug!(status = %order.status, version = order.version, "Applying command");

        let result = match command {
            OrderCommand::AddItem {
                product_id,
                quantity,
            } => self.add_item_to(order, product_id, quantity).await,
            OrderCommand::RemoveItem { item_id } => self.remove_item_from(order, item_id).await,
            OrderCommand::Pay { method } => self.charge(order, method).await,
            OrderCommand::RetryPreparation => self.request_preparation(order).await,
            OrderCommand::MarkReady => self.notify_pickup(order).await,
            OrderCommand::Deliver => self.hand_over(order).await,
            OrderCommand::Cancel => self.cancel_order(order).await,
        };

        match &result {
            Ok(order) => tracing::info!(
                status = %order.status,
                amount = %order.amount(),
                version = order.version,
                "Command applied"
            ),
            Err(e) => tracing::warn!(kind = e.kind(), error = %e, "Command failed"),
        }

        result
    }

    async fn open_order(&self, customer_id: CustomerId, attendant_id: AttendantId) -> Result<Order> {
        let attendant = self
            .ports
            .attendants
            .get_by_id(attendant_id)
            .await
            .map_err(OrchestratorError::lookup)?;

        let mut order = self
            .ports
            .orders
            .create(&Order::start(customer_id, attendant.id))
            .await
            .map_err(OrchestratorError::lookup)?;
        Span::current().record("order_id", order.id);

        let payment = self.ports.payments.create(&Payment::pending(order.id)).await;
        order.payment = match payment {
            Ok(payment) => payment,
            Err(source) => return Err(self.persistence_failure(order, None, source)),
        };

        let order = self.save_order(order, None).await?;
        tracing::info!(
            customer_id,
            attendant_id,
            payment_id = order.payment.id,
            "Order started"
        );
        Ok(order)
    }

    async fn add_item_to(&self, mut order: Order, product_id: ProductId, quantity: i32) -> Result<Order> {
        let product = self
            .ports
            .products
            .get_by_id(product_id)
            .await
            .map_err(OrchestratorError::lookup)?;

        if let Err(source) = order.add_item(&product, quantity) {
            return Err(OrchestratorError::InvalidStateTransition {
                order: Box::new(order),
                source,
            });
        }

        self.save_order(order, None).await
    }

    async fn remove_item_from(&self, order: Order, item_id: ItemId) -> Result<Order> {
        let removed = self.ports.orders.remove_item(item_id).await;
        if let Err(source) = removed {
            return Err(self.persistence_failure(order, None, source));
        }

        self.load(order.id).await
    }

    async fn charge(&self, mut order: Order, method: PaymentMethod) -> Result<Order> {
        if order.payment.status == PaymentStatus::Error {
            // The failed attempt stays on record; a new one takes its place.
            let previous_payment_id = order.payment.id;
            let attempt = self.ports.payments.create(&Payment::pending(order.id)).await;
            order.payment = match attempt {
                Ok(payment) => payment,
                Err(source) => return Err(self.persistence_failure(order, None, source)),
            };
            tracing::info!(
                previous_payment_id,
                payment_id = order.payment.id,
                "Opened new payment attempt"
            );
        }

        let amount = order.amount();
        tracing::info!(amount = %amount, method = %method, "Charging order");

        if let Err(source) = self.ports.gateway.pay(&order, method).await {
            tracing::warn!(error = %source, "Payment refused");
            if let Some(metrics) = &self.metrics {
                metrics.payment_failures.inc();
            }

            if let Err(e) = order.payment.mark_failed(method, amount, source.to_string()) {
                return Err(OrchestratorError::rule(&order, e));
            }
            let order = self.save_payment(order, None).await?;
            let order = self.save_order(order, None).await?;
            return Err(OrchestratorError::PaymentFailure {
                order: Box::new(order),
                source,
            });
        }

        if let Err(e) = order.payment.mark_paid(method, amount) {
            return Err(OrchestratorError::rule(&order, e));
        }
        if let Err(e) = order.mark_paid() {
            return Err(OrchestratorError::rule(&order, e));
        }

        // Checkpoint the charge before talking to the kitchen.
        let order = self.save_payment(order, Some(SideEffect::Charged)).await?;
        let order = self.save_order(order, Some(SideEffect::Charged)).await?;
        tracing::info!(payment_id = order.payment.id, "Payment captured");

        self.request_preparation(order).await
    }

    async fn request_preparation(&self, mut order: Order) -> Result<Order> {
        match self.ports.kitchen.preparation(&order).await {
            Ok(()) => {
                if let Err(e) = order.mark_preparing() {
                    return Err(OrchestratorError::rule(&order, e));
                }
                self.save_order(order, Some(SideEffect::KitchenNotified))
                    .await
            }
            Err(source) => {
                tracing::warn!(error = %source, "Kitchen did not accept the order");
                if let Some(metrics) = &self.metrics {
                    metrics.kitchen_failures.inc();
                }

                if !order.needs_kitchen_retry {
                    order.needs_kitchen_retry = true;
                    order = self.save_order(order, None).await?;
                }
                Err(OrchestratorError::KitchenFailure {
                    order: Box::new(order),
                    source,
                })
            }
        }
    }

    async fn notify_pickup(&self, mut order: Order) -> Result<Order> {
        if let Err(source) = self.ports.kitchen.ready_delivery(order.id).await {
            if let Some(metrics) = &self.metrics {
                metrics.kitchen_failures.inc();
            }
            return Err(OrchestratorError::KitchenFailure {
                order: Box::new(order),
                source,
            });
        }

        if let Err(e) = order.mark_ready() {
            return Err(OrchestratorError::rule(&order, e));
        }
        self.save_order(order, Some(SideEffect::PickupNotified)).await
    }

    async fn hand_over(&self, mut order: Order) -> Result<Order> {
        let created = self
            .ports
            .deliveries
            .create(&Delivery::handed_over(order.id))
            .await;
        let delivery = match created {
            Ok(delivery) => delivery,
            Err(source) => return Err(self.persistence_failure(order, None, source)),
        };
        tracing::debug!(delivery_id = delivery.id, "Delivery recorded");

        if let Err(e) = order.mark_delivered(delivery.clone()) {
            self.void_delivery(delivery).await;
            return Err(OrchestratorError::rule(&order, e));
        }

        match self.save_order(order, None).await {
            Ok(order) => Ok(order),
            Err(err) => {
                // The order is still READY; its delivery must not stay live.
                self.void_delivery(delivery).await;
                Err(err)
            }
        }
    }

    async fn void_delivery(&self, mut delivery: Delivery) {
        delivery.set_status(DeliveryStatus::Canceled);
        if let Err(e) = self.ports.deliveries.update(&delivery).await {
            tracing::error!(
                delivery_id = delivery.id,
                error = %e,
                "Failed to cancel delivery of an undelivered order"
            );
        }
    }

    async fn cancel_order(&self, mut order: Order) -> Result<Order> {
        let mut after = None;
        let payment_changed = match order.payment.status {
            PaymentStatus::Paid => {
                tracing::info!(payment_id = order.payment.id, "Reversing payment");

                if let Err(source) = self.ports.gateway.reverse(&order).await {
                    tracing::error!(error = %source, "Refund refused, order needs attention");
                    if let Some(metrics) = &self.metrics {
                        metrics.payment_failures.inc();
                    }

                    if let Err(e) = order.mark_error() {
                        return Err(OrchestratorError::rule(&order, e));
                    }
                    let order = self.save_order(order, None).await?;
                    return Err(OrchestratorError::PaymentFailure {
                        order: Box::new(order),
                        source,
                    });
                }

                after = Some(SideEffect::Refunded);
                order.payment.mark_reversed().map(|_| true)
            }
            PaymentStatus::Pending => order.payment.mark_canceled().map(|_| true),
            // Failed attempts keep their recorded outcome.
            _ => Ok(false),
        };

        let payment_changed = match payment_changed {
            Ok(changed) => changed,
            Err(e) => return Err(OrchestratorError::rule(&order, e)),
        };
        if let Err(e) = order.mark_canceled() {
            return Err(OrchestratorError::rule(&order, e));
        }

        let order = if payment_changed {
            self.save_payment(order, after).await?
        } else {
            order
        };
        self.save_order(order, after).await
    }

    // ========================================================================
    // Persistence helpers
    // ========================================================================

    async fn load(&self, order_id: OrderId) -> Result<Order> {
        let orders = Arc::clone(&self.ports.orders);
        retry_on_transient(&self.load_retry, "load_order", move |_| {
            let orders = Arc::clone(&orders);
            async move { orders.get_by_id(order_id).await }
        })
        .await
        .map_err(OrchestratorError::lookup)
    }

    async fn save_order(&self, order: Order, after: Option<SideEffect>) -> Result<Order> {
        let saved = self.ports.orders.update(&order).await;
        saved.map_err(|source| self.persistence_failure(order, after, source))
    }

    async fn save_payment(&self, mut order: Order, after: Option<SideEffect>) -> Result<Order> {
        let saved = self.ports.payments.update(&order.payment).await;
        match saved {
            Ok(payment) => {
                order.payment = payment;
                Ok(order)
            }
            Err(source) => Err(self.persistence_failure(order, after, source)),
        }
    }

    fn persistence_failure(
        &self,
        order: Order,
        after: Option<SideEffect>,
        source: RepositoryError,
    ) -> OrchestratorError {
        let after_label = after.map_or("none", SideEffect::as_str);
        tracing::error!(
            after = after_label,
            status = %order.status,
            error = %source,
            "Failed to persist order state"
        );
        if let Some(metrics) = &self.metrics {
            metrics
                .persistence_failures
                .with_label_values(&[after_label])
                .inc();
        }

        OrchestratorError::PersistenceError {
            order: Some(Box::new(order)),
            after,
            source,
        }
    }

    async fn observe<T>(
        &self,
        command: &'static str,
        work: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let started = Instant::now();
        let result = work.await;

        if let Some(metrics) = &self.metrics {
            let outcome = match &result {
                Ok(_) => "ok",
                Err(e) => e.kind(),
            };
            metrics.record_command(command, outcome, started.elapsed().as_secs_f64());
        }

        result
    }
}
