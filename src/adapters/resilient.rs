use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Order, OrderId, PaymentMethod};
use crate::ports::{Kitchen, KitchenError, PaymentGateway, PaymentGatewayError};
use crate::utils::{CircuitBreaker, CircuitBreakerConfig, CircuitBreakerError};

// ============================================================================
// Circuit-breaker wrappers
// ============================================================================
//
// Only `Unavailable` answers count against the breaker. A declined charge or
// a rejected ticket means the collaborator is healthy. While the circuit is
// open, calls fail with `Unavailable` and are never dispatched.
//
// ============================================================================

pub struct ResilientPaymentGateway {
    inner: Arc<dyn PaymentGateway>,
    breaker: CircuitBreaker,
}

impl ResilientPaymentGateway {
    pub fn new(inner: Arc<dyn PaymentGateway>, config: CircuitBreakerConfig) -> Self {
        Self {
            inner,
            breaker: CircuitBreaker::new("payment_gateway", config),
        }
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    async fn guarded<F>(&self, call: F) -> Result<(), PaymentGatewayError>
    where
        F: std::future::Future<Output = Result<(), PaymentGatewayError>>,
    {
        let outcome = self
            .breaker
            .call(async {
                match call.await {
                    Err(PaymentGatewayError::Unavailable(reason)) => Err(reason),
                    answered => Ok(answered),
                }
            })
            .await;

        match outcome {
            Ok(answered) => answered,
            Err(CircuitBreakerError::OperationFailed(reason)) => {
                Err(PaymentGatewayError::Unavailable(reason))
            }
            Err(CircuitBreakerError::CircuitOpen) => Err(PaymentGatewayError::Unavailable(
                format!("{} circuit open", self.breaker.name()),
            )),
        }
    }
}

#[async_trait]
impl PaymentGateway for ResilientPaymentGateway {
    async fn pay(&self, order: &Order, method: PaymentMethod) -> Result<(), PaymentGatewayError> {
        self.guarded(self.inner.pay(order, method)).await
    }

    async fn reverse(&self, order: &Order) -> Result<(), PaymentGatewayError> {
        self.guarded(self.inner.reverse(order)).await
    }
}

pub struct ResilientKitchen {
    inner: Arc<dyn Kitchen>,
    breaker: CircuitBreaker,
}

impl ResilientKitchen {
    pub fn new(inner: Arc<dyn Kitchen>, config: CircuitBreakerConfig) -> Self {
        Self {
            inner,
            breaker: CircuitBreaker::new("kitchen", config),
        }
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    async fn guarded<F>(&self, call: F) -> Result<(), KitchenError>
    where
        F: std::future::Future<Output = Result<(), KitchenError>>,
    {
        let outcome = self
            .breaker
            .call(async {
                match call.await {
                    Err(KitchenError::Unavailable(reason)) => Err(reason),
                    answered => Ok(answered),
                }
            })
            .await;

        match outcome {
            Ok(answered) => answered,
            Err(CircuitBreakerError::OperationFailed(reason)) => {
                Err(KitchenError::Unavailable(reason))
            }
            Err(CircuitBreakerError::CircuitOpen) => Err(KitchenError::Unavailable(format!(
                "{} circuit open",
                self.breaker.name()
            ))),
        }
    }
}

#[async_trait]
impl Kitchen for ResilientKitchen {
    async fn preparation(&self, order: &Order) -> Result<(), KitchenError> {
        self.guarded(self.inner.preparation(order)).await
    }

    async fn ready_delivery(&self, order_id: OrderId) -> Result<(), KitchenError> {
        self.guarded(self.inner.ready_delivery(order_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::simulated::{SimulatedKitchen, SimulatedPaymentGateway};
    use crate::utils::CircuitState;
    use std::time::Duration;

    fn config() -> CircuitBreakerConfig {
        CircuitBreakerConfig {
            failure_threshold: 2,
            timeout: Duration::from_secs(60),
            success_threshold: 1,
        }
    }

    #[tokio::test]
    async fn test_open_gateway_circuit_skips_dispatch() {
        let simulated = Arc::new(SimulatedPaymentGateway::new());
        for _ in 0..2 {
            simulated
                .fail_next_pay(PaymentGatewayError::Unavailable("timeout".into()))
                .await;
        }
        let gateway = ResilientPaymentGateway::new(simulated.clone(), config());
        let order = Order::start(1, 1);

        assert!(gateway.pay(&order, PaymentMethod::Pix).await.is_err());
        assert!(gateway.pay(&order, PaymentMethod::Pix).await.is_err());
        assert_eq!(gateway.breaker().get_state().await, CircuitState::Open);

        let err = gateway.pay(&order, PaymentMethod::Pix).await.unwrap_err();
        assert_eq!(
            err,
            PaymentGatewayError::Unavailable("payment_gateway circuit open".into())
        );
        assert_eq!(simulated.pay_calls(), 2);
    }

    #[tokio::test]
    async fn test_declines_do_not_trip_breaker() {
        let simulated = Arc::new(SimulatedPaymentGateway::new());
        for _ in 0..3 {
            simulated
                .fail_next_pay(PaymentGatewayError::Declined("card expired".into()))
                .await;
        }
        let gateway = ResilientPaymentGateway::new(simulated.clone(), config());
        let order = Order::start(1, 1);

        for _ in 0..3 {
            assert!(matches!(
                gateway.pay(&order, PaymentMethod::CreditCard).await,
                Err(PaymentGatewayError::Declined(_))
            ));
        }

        assert_eq!(gateway.breaker().get_state().await, CircuitState::Closed);
        assert_eq!(simulated.pay_calls(), 3);
    }

    #[tokio::test]
    async fn test_kitchen_outage_opens_circuit() {
        let simulated = Arc::new(SimulatedKitchen::new());
        for _ in 0..2 {
            simulated
                .fail_next_preparation(KitchenError::Unavailable("printer offline".into()))
                .await;
        }
        let kitchen = ResilientKitchen::new(simulated.clone(), config());
        let order = Order::start(1, 1);

        assert!(kitchen.preparation(&order).await.is_err());
        assert!(kitchen.preparation(&order).await.is_err());
        assert!(matches!(
            kitchen.ready_delivery(1).await,
            Err(KitchenError::Unavailable(_))
        ));

        assert_eq!(simulated.preparation_calls(), 2);
        assert_eq!(simulated.ready_calls(), 0);
    }
}
