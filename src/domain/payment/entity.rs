use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::OrderId;
use super::errors::PaymentError;
use super::value_objects::{PaymentMethod, PaymentStatus};

/// Storage identity of a payment record. `0` means "not yet persisted".
pub type PaymentId = u64;

// ============================================================================
// Payment Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub date: DateTime<Utc>,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    /// Only populated while `status` is `ERROR`.
    pub error_reason: Option<String>,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Fresh, unsettled payment for an order.
    pub fn pending(order_id: OrderId) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            order_id,
            date: now,
            method: PaymentMethod::None,
            status: PaymentStatus::Pending,
            error_reason: None,
            value: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    fn transition(&mut self, next: PaymentStatus) -> Result<(), PaymentError> {
        if !self.status.can_transition_to(next) {
            return Err(PaymentError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// `PENDING -> PAID` once the gateway accepted the charge.
    pub fn mark_paid(&mut self, method: PaymentMethod, value: Decimal) -> Result<(), PaymentError> {
        self.transition(PaymentStatus::Paid)?;
        self.method = method;
        self.value = value;
        self.date = self.updated_at;
        self.error_reason = None;
        Ok(())
    }

    /// `PENDING -> ERROR`, keeping the gateway's reason.
    pub fn mark_failed(
        &mut self,
        method: PaymentMethod,
        value: Decimal,
        reason: impl Into<String>,
    ) -> Result<(), PaymentError> {
        self.transition(PaymentStatus::Error)?;
        self.method = method;
        self.value = value;
        self.date = self.updated_at;
        self.error_reason = Some(reason.into());
        Ok(())
    }

    /// `PAID -> REVERSED`
    pub fn mark_reversed(&mut self) -> Result<(), PaymentError> {
        self.transition(PaymentStatus::Reversed)
    }

    /// `PENDING -> CANCELED`
    pub fn mark_canceled(&mut self) -> Result<(), PaymentError> {
        self.transition(PaymentStatus::Canceled)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
