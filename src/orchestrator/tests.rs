use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use crate::adapters::memory::{
    InMemoryAttendantRepository, InMemoryCustomerRepository, InMemoryDeliveryRepository,
    InMemoryOrderRepository, InMemoryPaymentRepository, InMemoryProductRepository,
};
use crate::adapters::{SimulatedKitchen, SimulatedPaymentGateway};
use crate::domain::{
    Attendant, Category, Cpf, Customer, DeliveryStatus, Email, Order, OrderCommand, OrderError,
    OrderStatus, PaymentMethod, PaymentStatus, Product,
};
use crate::metrics::OrchestratorMetrics;
use crate::ports::{
    AttendantRepository, CustomerRepository, KitchenError, OrderRepository, PaymentGatewayError,
    PaymentRepository, ProductRepository, RepositoryError,
};
use crate::utils::RetryConfig;

use super::*;

struct Fixture {
    orchestrator: OrderOrchestrator,
    orders: Arc<InMemoryOrderRepository>,
    payments: Arc<InMemoryPaymentRepository>,
    deliveries: Arc<InMemoryDeliveryRepository>,
    gateway: Arc<SimulatedPaymentGateway>,
    kitchen: Arc<SimulatedKitchen>,
    metrics: Arc<OrchestratorMetrics>,
    customer: Customer,
    attendant: Attendant,
    burger: Product,
    soda: Product,
}

async fn fixture() -> Fixture {
    fixture_with(SimulatedPaymentGateway::new()).await
}

async fn fixture_with(gateway: SimulatedPaymentGateway) -> Fixture {
    let orders = Arc::new(InMemoryOrderRepository::new());
    let payments = Arc::new(InMemoryPaymentRepository::new());
    let deliveries = Arc::new(InMemoryDeliveryRepository::new());
    let customers = Arc::new(InMemoryCustomerRepository::new());
    let attendants = Arc::new(InMemoryAttendantRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let gateway = Arc::new(gateway);
    let kitchen = Arc::new(SimulatedKitchen::new());
    let metrics = Arc::new(OrchestratorMetrics::new().unwrap());

    let customer = customers
        .create(&Customer::new(
            "Maria",
            Email::new("maria@example.com"),
            Cpf::new("123.456.789-09"),
        ))
        .await
        .unwrap();
    let attendant = attendants.create(&Attendant::new("Ana")).await.unwrap();
    let burger = products
        .create(&Product::new("X-Burger", dec!(10.00), Category::new(1, "Lanche")))
        .await
        .unwrap();
    let soda = products
        .create(&Product::new("Soda", dec!(5.00), Category::new(2, "Bebida")))
        .await
        .unwrap();

    let orchestrator = OrderOrchestrator::new(OrchestratorPorts {
        orders: orders.clone(),
        payments: payments.clone(),
        deliveries: deliveries.clone(),
        customers,
        attendants,
        products,
        gateway: gateway.clone(),
        kitchen: kitchen.clone(),
    })
    .with_load_retry(RetryConfig {
        max_attempts: 2,
        initial_delay: Duration::from_millis(1),
        ..RetryConfig::default()
    })
    .with_metrics(metrics.clone());

    Fixture {
        orchestrator,
        orders,
        payments,
        deliveries,
        gateway,
        kitchen,
        metrics,
        customer,
        attendant,
        burger,
        soda,
    }
}

impl Fixture {
    async fn filled_order(&self) -> Order {
        let order = self
            .orchestrator
            .start_order(self.customer.id, self.attendant.id)
            .await
            .unwrap();
        self.orchestrator
            .add_item(order.id, self.burger.id, 2)
            .await
            .unwrap();
        self.orchestrator
            .add_item(order.id, self.soda.id, 1)
            .await
            .unwrap()
    }

    async fn paid_order(&self) -> Order {
        let order = self.filled_order().await;
        self.orchestrator
            .pay(order.id, PaymentMethod::Pix)
            .await
            .unwrap()
    }

    async fn stored(&self, order: &Order) -> Order {
        self.orders.get_by_id(order.id).await.unwrap()
    }
}

// ============================================================================
// Start and items
// ============================================================================

#[tokio::test]
async fn test_start_order_persists_pending_payment() {
    let fx = fixture().await;

    let order = fx
        .orchestrator
        .start_order(fx.customer.id, fx.attendant.id)
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.items.is_empty());
    assert_eq!(order.payment.order_id, order.id);

    let payment = fx.payments.get_by_id(order.payment.id).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(fx.stored(&order).await, order);
}

#[tokio::test]
async fn test_start_order_for_cpf() {
    let fx = fixture().await;

    let order = fx
        .orchestrator
        .start_order_for_cpf(&Cpf::new("12345678909"), fx.attendant.id)
        .await
        .unwrap();

    assert_eq!(order.customer_id, fx.customer.id);
}

#[tokio::test]
async fn test_start_order_unknown_references() {
    let fx = fixture().await;

    let err = fx
        .orchestrator
        .start_order(99, fx.attendant.id)
        .await
        .unwrap_err();
    assert!(matches!(err, OrchestratorError::NotFound { entity: "customer", .. }));

    let err = fx
        .orchestrator
        .start_order(fx.customer.id, 99)
        .await
        .unwrap_err();
    assert!(matches!(err, OrchestratorError::NotFound { entity: "attendant", .. }));
    assert!(fx.orders.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_items_amount_and_quantity() {
    let fx = fixture().await;

    let order = fx.filled_order().await;

    assert_eq!(order.amount(), dec!(25.00));
    assert_eq!(order.items_quantity(), 3);
    assert!(order.items.iter().all(|item| item.id != 0));
    assert_eq!(fx.stored(&order).await.amount(), dec!(25.00));
}

#[tokio::test]
async fn test_add_item_rejects_bad_quantity_without_writing() {
    let fx = fixture().await;
    let order = fx.filled_order().await;

    let err = fx
        .orchestrator
        .add_item(order.id, fx.burger.id, 0)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::InvalidStateTransition {
            source: OrderError::InvalidQuantity(0),
            ..
        }
    ));
    assert_eq!(fx.stored(&order).await, order);
}

#[tokio::test]
async fn test_add_unknown_product() {
    let fx = fixture().await;
    let order = fx
        .orchestrator
        .start_order(fx.customer.id, fx.attendant.id)
        .await
        .unwrap();

    let err = fx.orchestrator.add_item(order.id, 404, 1).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::NotFound { entity: "product", .. }));
}

#[tokio::test]
async fn test_remove_item_recomputes_amount() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    let soda_line = order
        .items
        .iter()
        .find(|item| item.product_id == fx.soda.id)
        .unwrap()
        .id;

    let order = fx
        .orchestrator
        .remove_item(order.id, soda_line)
        .await
        .unwrap();

    assert_eq!(order.amount(), dec!(20.00));
    assert_eq!(order.items_quantity(), 2);

    let err = fx
        .orchestrator
        .remove_item(order.id, soda_line)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrchestratorError::InvalidStateTransition {
            source: OrderError::ItemNotFound(_),
            ..
        }
    ));
}

// ============================================================================
// Payment
// ============================================================================

#[tokio::test]
async fn test_pay_sends_order_to_kitchen() {
    let fx = fixture().await;

    let order = fx.paid_order().await;

    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order.payment.status, PaymentStatus::Paid);
    assert_eq!(order.payment.method, PaymentMethod::Pix);
    assert_eq!(order.payment.value, dec!(25.00));
    assert!(!order.needs_kitchen_retry);
    assert_eq!(fx.gateway.pay_calls(), 1);
    assert_eq!(fx.kitchen.preparation_calls(), 1);

    let payment = fx.payments.get_by_id(order.payment.id).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Paid);
    assert_eq!(fx.stored(&order).await, order);
}

#[tokio::test]
async fn test_pay_empty_order_never_reaches_gateway() {
    let fx = fixture().await;
    let order = fx
        .orchestrator
        .start_order(fx.customer.id, fx.attendant.id)
        .await
        .unwrap();

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::Money)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::InvalidStateTransition {
            source: OrderError::EmptyItems,
            ..
        }
    ));
    assert_eq!(fx.gateway.pay_calls(), 0);
    assert_eq!(fx.stored(&order).await.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_declined_payment_then_new_attempt() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    fx.gateway
        .fail_next_pay(PaymentGatewayError::Declined("insufficient funds".into()))
        .await;

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::CreditCard)
        .await
        .unwrap_err();

    let failed = err.order().unwrap().clone();
    assert!(matches!(err, OrchestratorError::PaymentFailure { .. }));
    assert_eq!(failed.status, OrderStatus::Pending);
    assert_eq!(failed.payment.status, PaymentStatus::Error);
    assert_eq!(
        failed.payment.error_reason.as_deref(),
        Some("payment declined: insufficient funds")
    );
    assert_eq!(fx.kitchen.preparation_calls(), 0);
    assert_eq!(fx.stored(&order).await, failed);

    let paid = fx
        .orchestrator
        .pay(order.id, PaymentMethod::DebitCard)
        .await
        .unwrap();

    assert_eq!(paid.status, OrderStatus::Preparing);
    assert_ne!(paid.payment.id, failed.payment.id);
    let previous = fx.payments.get_by_id(failed.payment.id).await.unwrap();
    assert_eq!(previous.status, PaymentStatus::Error);
    assert_eq!(fx.payments.all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_pay_twice_is_rejected() {
    let fx = fixture().await;
    let order = fx.paid_order().await;

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::Pix)
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::InvalidStateTransition { .. }));
    assert_eq!(fx.gateway.pay_calls(), 1);
}

#[tokio::test]
async fn test_pay_unsettled_payment_never_reaches_gateway() {
    let fx = fixture().await;
    let mut order = fx.filled_order().await;
    order.payment.status = PaymentStatus::Unknown;
    fx.orders.update(&order).await.unwrap();

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::Pix)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::InvalidStateTransition {
            source: OrderError::PaymentNotChargeable(PaymentStatus::Unknown),
            ..
        }
    ));
    assert_eq!(fx.gateway.pay_calls(), 0);
    let stored = fx.stored(&order).await;
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.payment.status, PaymentStatus::Unknown);
}

#[tokio::test]
async fn test_kitchen_failure_after_charge_keeps_order_paid() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    fx.kitchen
        .fail_next_preparation(KitchenError::Unavailable("printer offline".into()))
        .await;

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::Pix)
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestratorError::KitchenFailure { .. }));
    let stored = fx.stored(&order).await;
    assert_eq!(stored.status, OrderStatus::Paid);
    assert_eq!(stored.payment.status, PaymentStatus::Paid);
    assert!(stored.needs_kitchen_retry);
    assert_eq!(err.order(), Some(&stored));

    let waiting = fx.orchestrator.orders_awaiting_kitchen().await.unwrap();
    assert_eq!(waiting.len(), 1);
    assert_eq!(waiting[0].id, order.id);

    let retried = fx.orchestrator.retry_preparation(order.id).await.unwrap();
    assert_eq!(retried.status, OrderStatus::Preparing);
    assert!(!retried.needs_kitchen_retry);
    assert!(fx.orchestrator.orders_awaiting_kitchen().await.unwrap().is_empty());
    assert_eq!(fx.gateway.pay_calls(), 1);
    assert_eq!(fx.kitchen.preparation_calls(), 2);
}

#[tokio::test]
async fn test_persistence_failure_after_charge_is_tagged() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    fx.orders.fail_next_writes(1);

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::Pix)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::PersistenceError {
            after: Some(SideEffect::Charged),
            source: RepositoryError::Storage(_),
            ..
        }
    ));
    assert_eq!(err.side_effect(), Some(SideEffect::Charged));
    assert_eq!(fx.gateway.pay_calls(), 1);
    assert_eq!(fx.kitchen.preparation_calls(), 0);
    assert_eq!(
        fx.metrics
            .persistence_failures
            .with_label_values(&["charged"])
            .get(),
        1
    );
}

// ============================================================================
// Ready and delivery
// ============================================================================

#[tokio::test]
async fn test_ready_then_deliver() {
    let fx = fixture().await;
    let order = fx.paid_order().await;

    let ready = fx.orchestrator.mark_ready(order.id).await.unwrap();
    assert_eq!(ready.status, OrderStatus::Ready);
    assert_eq!(fx.kitchen.ready_calls(), 1);

    let delivered = fx.orchestrator.deliver(order.id).await.unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    let delivery = delivered.delivery.as_ref().unwrap();
    assert_eq!(delivery.order_id, order.id);
    assert_eq!(delivery.status, DeliveryStatus::Delivered);

    assert!(fx.orchestrator.list_active_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ready_kitchen_failure_stays_preparing() {
    let fx = fixture().await;
    let order = fx.paid_order().await;
    fx.kitchen
        .fail_next_ready(KitchenError::Rejected("no runner".into()))
        .await;

    let err = fx.orchestrator.mark_ready(order.id).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::KitchenFailure { .. }));
    assert_eq!(fx.stored(&order).await.status, OrderStatus::Preparing);
}

#[tokio::test]
async fn test_failed_deliver_write_cancels_delivery_record() {
    let fx = fixture().await;
    let order = fx.paid_order().await;
    fx.orchestrator.mark_ready(order.id).await.unwrap();
    fx.orders.fail_next_writes(1);

    let err = fx.orchestrator.deliver(order.id).await.unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::PersistenceError {
            source: RepositoryError::Storage(_),
            ..
        }
    ));
    assert_eq!(fx.stored(&order).await.status, OrderStatus::Ready);
    let recorded = fx.deliveries.all().await.unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].status, DeliveryStatus::Canceled);

    let delivered = fx.orchestrator.deliver(order.id).await.unwrap();

    assert_eq!(delivered.status, OrderStatus::Delivered);
    let recorded = fx.deliveries.all().await.unwrap();
    assert_eq!(recorded.len(), 2);
    let live: Vec<_> = recorded
        .iter()
        .filter(|delivery| delivery.status == DeliveryStatus::Delivered)
        .collect();
    assert_eq!(live.len(), 1);
    assert_eq!(delivered.delivery.as_ref(), Some(live[0]));
}

#[tokio::test]
async fn test_deliver_requires_ready() {
    let fx = fixture().await;
    let order = fx.filled_order().await;

    let err = fx.orchestrator.deliver(order.id).await.unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::InvalidStateTransition {
            source: OrderError::InvalidStatusTransition {
                status: OrderStatus::Pending,
                ..
            },
            ..
        }
    ));
    assert_eq!(fx.stored(&order).await, order);
}

// ============================================================================
// Cancel
// ============================================================================

#[tokio::test]
async fn test_cancel_paid_order_reverses_once() {
    let fx = fixture().await;
    let order = fx.paid_order().await;

    let canceled = fx.orchestrator.cancel(order.id).await.unwrap();

    assert_eq!(canceled.status, OrderStatus::Canceled);
    assert_eq!(canceled.payment.status, PaymentStatus::Reversed);
    assert_eq!(fx.gateway.reverse_calls(), 1);
    assert_eq!(
        fx.payments.get_by_id(order.payment.id).await.unwrap().status,
        PaymentStatus::Reversed
    );

    let err = fx.orchestrator.cancel(order.id).await.unwrap_err();
    assert!(matches!(err, OrchestratorError::InvalidStateTransition { .. }));
    assert_eq!(fx.gateway.reverse_calls(), 1);
}

#[tokio::test]
async fn test_cancel_paid_order_awaiting_kitchen_reverses_once() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    fx.kitchen
        .fail_next_preparation(KitchenError::Rejected("kitchen closed".into()))
        .await;
    let _ = fx.orchestrator.pay(order.id, PaymentMethod::Pix).await;
    assert_eq!(fx.stored(&order).await.status, OrderStatus::Paid);

    let canceled = fx.orchestrator.cancel(order.id).await.unwrap();

    assert_eq!(canceled.status, OrderStatus::Canceled);
    assert_eq!(canceled.payment.status, PaymentStatus::Reversed);
    assert_eq!(fx.gateway.reverse_calls(), 1);
    assert_eq!(fx.stored(&order).await, canceled);
}

#[tokio::test]
async fn test_cancel_ready_order_reverses_once() {
    let fx = fixture().await;
    let order = fx.paid_order().await;
    fx.orchestrator.mark_ready(order.id).await.unwrap();

    let canceled = fx.orchestrator.cancel(order.id).await.unwrap();

    assert_eq!(canceled.status, OrderStatus::Canceled);
    assert_eq!(canceled.payment.status, PaymentStatus::Reversed);
    assert_eq!(fx.gateway.reverse_calls(), 1);
    assert_eq!(
        fx.payments.get_by_id(order.payment.id).await.unwrap().status,
        PaymentStatus::Reversed
    );
}

#[tokio::test]
async fn test_cancel_pending_order_never_reverses() {
    let fx = fixture().await;
    let order = fx.filled_order().await;

    let canceled = fx.orchestrator.cancel(order.id).await.unwrap();

    assert_eq!(canceled.status, OrderStatus::Canceled);
    assert_eq!(canceled.payment.status, PaymentStatus::Canceled);
    assert_eq!(fx.gateway.reverse_calls(), 0);
}

#[tokio::test]
async fn test_cancel_after_declined_payment_keeps_error_record() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    fx.gateway
        .fail_next_pay(PaymentGatewayError::Declined("blocked".into()))
        .await;
    let _ = fx.orchestrator.pay(order.id, PaymentMethod::Pix).await;

    let canceled = fx.orchestrator.cancel(order.id).await.unwrap();

    assert_eq!(canceled.status, OrderStatus::Canceled);
    assert_eq!(canceled.payment.status, PaymentStatus::Error);
    assert_eq!(fx.gateway.reverse_calls(), 0);
}

#[tokio::test]
async fn test_failed_refund_flags_order() {
    let fx = fixture().await;
    let order = fx.paid_order().await;
    fx.gateway
        .fail_next_reverse(PaymentGatewayError::Unavailable("acquirer down".into()))
        .await;

    let err = fx.orchestrator.cancel(order.id).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::PaymentFailure { .. }));
    let stored = fx.stored(&order).await;
    assert_eq!(stored.status, OrderStatus::Error);
    assert_eq!(stored.payment.status, PaymentStatus::Paid);
    assert_eq!(
        fx.metrics.payment_failures.get(),
        1,
        "refund failure should be counted"
    );
}

// ============================================================================
// Loading, dispatch, metrics
// ============================================================================

#[tokio::test]
async fn test_unknown_order() {
    let fx = fixture().await;

    let err = fx.orchestrator.get_order(42).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::NotFound { entity: "order", .. }));
}

#[tokio::test]
async fn test_store_outage_surfaces_after_retries() {
    let fx = fixture().await;
    let order = fx.filled_order().await;
    fx.orders.set_unavailable(true);

    let err = fx
        .orchestrator
        .pay(order.id, PaymentMethod::Pix)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrchestratorError::PersistenceError {
            order: None,
            after: None,
            source: RepositoryError::Unavailable(_),
        }
    ));
    assert_eq!(fx.gateway.pay_calls(), 0);

    fx.orders.set_unavailable(false);
    assert_eq!(fx.orchestrator.get_order(order.id).await.unwrap(), order);
}

#[tokio::test]
async fn test_handle_dispatches_commands_and_records_metrics() {
    let fx = fixture().await;
    let order = fx.filled_order().await;

    fx.orchestrator
        .handle(order.id, OrderCommand::Pay { method: PaymentMethod::Money })
        .await
        .unwrap();
    let _ = fx.orchestrator.handle(order.id, OrderCommand::Deliver).await;

    let commands = &fx.metrics.commands_total;
    assert_eq!(commands.with_label_values(&["start_order", "ok"]).get(), 1);
    assert_eq!(commands.with_label_values(&["add_item", "ok"]).get(), 2);
    assert_eq!(commands.with_label_values(&["pay", "ok"]).get(), 1);
    assert_eq!(
        commands
            .with_label_values(&["deliver", "invalid_state_transition"])
            .get(),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_pay_and_cancel_serialize() {
    let fx = fixture_with(SimulatedPaymentGateway::new().with_latency(Duration::from_millis(20))).await;
    let order = fx.filled_order().await;

    let pay = {
        let orchestrator = fx.orchestrator.clone();
        tokio::spawn(async move { orchestrator.pay(order.id, PaymentMethod::Pix).await })
    };
    let cancel = {
        let orchestrator = fx.orchestrator.clone();
        tokio::spawn(async move { orchestrator.cancel(order.id).await })
    };

    let paid = pay.await.unwrap();
    let canceled = cancel.await.unwrap();

    let stored = fx.stored(&order).await;
    assert_eq!(stored.status, OrderStatus::Canceled);

    match paid {
        // Pay ran first: cancel refunded it.
        Ok(_) => {
            assert!(canceled.is_ok());
            assert_eq!(fx.gateway.pay_calls(), 1);
            assert_eq!(fx.gateway.reverse_calls(), 1);
            assert_eq!(stored.payment.status, PaymentStatus::Reversed);
        }
        // Cancel ran first: pay saw a canceled order.
        Err(err) => {
            assert!(matches!(err, OrchestratorError::InvalidStateTransition { .. }));
            assert_eq!(fx.gateway.pay_calls(), 0);
            assert_eq!(fx.gateway.reverse_calls(), 0);
            assert_eq!(stored.payment.status, PaymentStatus::Canceled);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_adds_keep_every_item() {
    let fx = fixture().await;
    let order = fx
        .orchestrator
        .start_order(fx.customer.id, fx.attendant.id)
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let orchestrator = fx.orchestrator.clone();
        let product_id = fx.soda.id;
        tasks.push(tokio::spawn(async move {
            orchestrator.add_item(order.id, product_id, 1).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stored = fx.stored(&order).await;
    assert_eq!(stored.items.len(), 10);
    assert_eq!(stored.amount(), dec!(50.00));
}
