use std::sync::Arc;

use anyhow::Context;
use futures_util::future;
use rust_decimal_macros::dec;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use food_order_lifecycle::adapters::memory::{
    InMemoryAttendantRepository, InMemoryCustomerRepository, InMemoryDeliveryRepository,
    InMemoryOrderRepository, InMemoryPaymentRepository, InMemoryProductRepository,
};
use food_order_lifecycle::adapters::{
    ResilientKitchen, ResilientPaymentGateway, SimulatedKitchen, SimulatedPaymentGateway,
};
use food_order_lifecycle::config::AppConfig;
use food_order_lifecycle::domain::{
    Attendant, AttendantId, Category, Cpf, Customer, Email, Order, OrderId, PaymentMethod,
    Product, ProductId,
};
use food_order_lifecycle::metrics::{self, OrchestratorMetrics};
use food_order_lifecycle::orchestrator::{OrchestratorPorts, OrderOrchestrator};
use food_order_lifecycle::ports::{AttendantRepository, CustomerRepository, ProductRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;

    // RUST_LOG wins over the configured default filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting food order lifecycle demo");

    // === 1. Metrics ===
    let metrics = Arc::new(OrchestratorMetrics::new()?);
    tracing::info!(
        families = metrics.registry().gather().len(),
        "Metrics registry created"
    );

    let metrics_registry = Arc::new(metrics.registry().clone());
    let metrics_port = config.metrics_port;
    std::thread::spawn(move || {
        let served = actix_web::rt::System::new()
            .block_on(metrics::start_metrics_server(metrics_registry, metrics_port));
        if let Err(e) = served {
            tracing::error!(error = %e, "Metrics server error");
        }
    });

    // === 2. Stores and collaborators ===
    let customers = Arc::new(InMemoryCustomerRepository::new());
    let attendants = Arc::new(InMemoryAttendantRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());

    let gateway = ResilientPaymentGateway::new(
        Arc::new(SimulatedPaymentGateway::new().with_latency(config.simulated_latency)),
        config.breaker.clone(),
    );
    let kitchen = ResilientKitchen::new(
        Arc::new(SimulatedKitchen::new().with_latency(config.simulated_latency)),
        config.breaker.clone(),
    );

    let orchestrator = OrderOrchestrator::new(OrchestratorPorts {
        orders: Arc::new(InMemoryOrderRepository::new()),
        payments: Arc::new(InMemoryPaymentRepository::new()),
        deliveries: Arc::new(InMemoryDeliveryRepository::new()),
        customers: customers.clone(),
        attendants: attendants.clone(),
        products: products.clone(),
        gateway: Arc::new(gateway),
        kitchen: Arc::new(kitchen),
    })
    .with_load_retry(config.load_retry.clone())
    .with_metrics(metrics.clone());

    // === 3. Reference data ===
    let customer = customers
        .create(&Customer::new(
            "Maria Silva",
            Email::new("maria@example.com"),
            Cpf::new("123.456.789-09"),
        ))
        .await?;
    let attendant = attendants.create(&Attendant::new("Ana")).await?;
    let burger = products
        .create(&Product::new("X-Burger", dec!(10.00), Category::new(1, "Lanche")))
        .await?;
    let soda = products
        .create(&Product::new("Soda", dec!(5.00), Category::new(2, "Bebida")))
        .await?;
    tracing::info!(customer_id = customer.id, attendant_id = attendant.id, "Reference data seeded");

    // === 4. Two orders, run side by side ===
    let combo = [(burger.id, 2), (soda.id, 1)];
    let drinks = [(soda.id, 3)];
    let first = open_order(&orchestrator, &customer.cpf, attendant.id, &combo);
    let second = open_order(&orchestrator, &customer.cpf, attendant.id, &drinks);
    let (first, second) = future::try_join(first, second).await?;

    let (delivered, canceled) = future::try_join(
        serve(&orchestrator, first.id),
        refund(&orchestrator, second.id),
    )
    .await?;

    tracing::info!(
        order_id = delivered.id,
        status = %delivered.status,
        amount = %delivered.amount(),
        "First order finished"
    );
    tracing::info!(
        order_id = canceled.id,
        status = %canceled.status,
        payment = %canceled.payment.status,
        "Second order finished"
    );

    let active = orchestrator.list_active_orders().await?;
    tracing::info!(active = active.len(), "Demo complete");

    Ok(())
}

async fn open_order(
    orchestrator: &OrderOrchestrator,
    cpf: &Cpf,
    attendant_id: AttendantId,
    items: &[(ProductId, i32)],
) -> anyhow::Result<Order> {
    let mut order = orchestrator.start_order_for_cpf(cpf, attendant_id).await?;
    for (product_id, quantity) in items {
        order = orchestrator.add_item(order.id, *product_id, *quantity).await?;
    }
    tracing::info!(order_id = order.id, amount = %order.amount(), "Order ready for payment");
    Ok(order)
}

/// pay → ready → deliver
async fn serve(orchestrator: &OrderOrchestrator, order_id: OrderId) -> anyhow::Result<Order> {
    orchestrator.pay(order_id, PaymentMethod::Pix).await?;
    orchestrator.mark_ready(order_id).await?;
    Ok(orchestrator.deliver(order_id).await?)
}

/// pay → cancel, which refunds the charge
async fn refund(orchestrator: &OrderOrchestrator, order_id: OrderId) -> anyhow::Result<Order> {
    orchestrator.pay(order_id, PaymentMethod::CreditCard).await?;
    Ok(orchestrator.cancel(order_id).await?)
}
