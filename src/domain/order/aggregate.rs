use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::attendant::AttendantId;
use crate::domain::customer::CustomerId;
use crate::domain::delivery::Delivery;
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::product::Product;
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::value_objects::{ItemId, OrderId, OrderItem, OrderStatus};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    // Identity
    pub id: OrderId,
    /// Bumped by the order store on every successful write.
    pub version: u64,

    // References
    pub customer_id: CustomerId,
    pub attendant_id: AttendantId,

    // Current State
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub payment: Payment,
    pub delivery: Option<Delivery>,
    /// Charged, but the kitchen never acknowledged the preparation request.
    pub needs_kitchen_retry: bool,

    // Audit Trail
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// New, unsaved order with no items and a pending payment.
    pub fn start(customer_id: CustomerId, attendant_id: AttendantId) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            version: 0,
            customer_id,
            attendant_id,
            status: OrderStatus::Pending,
            items: Vec::new(),
            payment: Payment::pending(0),
            delivery: None,
            needs_kitchen_retry: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sum of `quantity × unit_price` over the current items.
    pub fn amount(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Sum of item quantities.
    pub fn items_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    pub fn item(&self, item_id: ItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Check the precondition of `command` against the current state.
    ///
    /// Nothing is mutated; the orchestrator calls this before any port.
    pub fn validate(&self, command: &OrderCommand) -> Result<(), OrderError> {
        match command {
            OrderCommand::AddItem { quantity, .. } => {
                self.ensure_status(OrderStatus::Pending, "add items to")?;
                if *quantity <= 0 {
                    return Err(OrderError::InvalidQuantity(*quantity));
                }
                Ok(())
            }

            OrderCommand::RemoveItem { item_id } => {
                self.ensure_status(OrderStatus::Pending, "remove items from")?;
                if self.item(*item_id).is_none() {
                    return Err(OrderError::ItemNotFound(*item_id));
                }
                Ok(())
            }

            OrderCommand::Pay { .. } => {
                self.ensure_status(OrderStatus::Pending, "pay")?;
                if self.payment.is_paid() {
                    return Err(OrderError::AlreadyPaid);
                }
                // Only a pending or failed attempt can record a new charge.
                if !matches!(self.payment.status, PaymentStatus::Pending | PaymentStatus::Error) {
                    return Err(OrderError::PaymentNotChargeable(self.payment.status));
                }
                if self.items.is_empty() {
                    return Err(OrderError::EmptyItems);
                }
                if self.amount() <= Decimal::ZERO {
                    return Err(OrderError::ZeroAmount);
                }
                Ok(())
            }

            OrderCommand::RetryPreparation => {
                self.ensure_status(OrderStatus::Paid, "send to the kitchen")
            }

            OrderCommand::MarkReady => self.ensure_status(OrderStatus::Preparing, "mark ready"),

            OrderCommand::Deliver => self.ensure_status(OrderStatus::Ready, "deliver"),

            OrderCommand::Cancel => {
                if self.status.is_cancelable() {
                    Ok(())
                } else {
                    Err(OrderError::InvalidStatusTransition {
                        status: self.status,
                        action: "cancel",
                    })
                }
            }
        }
    }

    /// Append a line priced from the product's current price.
    pub fn add_item(&mut self, product: &Product, quantity: i32) -> Result<(), OrderError> {
        self.validate(&OrderCommand::AddItem {
            product_id: product.id,
            quantity,
        })?;

        self.items.push(OrderItem::new(product.id, quantity, product.price));
        self.touch();
        Ok(())
    }

    pub fn remove_item(&mut self, item_id: ItemId) -> Result<OrderItem, OrderError> {
        self.validate(&OrderCommand::RemoveItem { item_id })?;

        let index = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(OrderError::ItemNotFound(item_id))?;
        let removed = self.items.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn mark_paid(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Paid, "mark paid")
    }

    pub fn mark_preparing(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Preparing, "start preparing")?;
        self.needs_kitchen_retry = false;
        Ok(())
    }

    pub fn mark_ready(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Ready, "mark ready")
    }

    pub fn mark_delivered(&mut self, delivery: Delivery) -> Result<(), OrderError> {
        self.transition(OrderStatus::Delivered, "deliver")?;
        self.delivery = Some(delivery);
        Ok(())
    }

    pub fn mark_canceled(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Canceled, "cancel")?;
        self.needs_kitchen_retry = false;
        Ok(())
    }

    /// Irrecoverable step failed; needs a human.
    pub fn mark_error(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Error, "flag as failed")
    }

    fn ensure_status(&self, expected: OrderStatus, action: &'static str) -> Result<(), OrderError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(OrderError::InvalidStatusTransition {
                status: self.status,
                action,
            })
        }
    }

    fn transition(&mut self, next: OrderStatus, action: &'static str) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition {
                status: self.status,
                action,
            });
        }

        self.status = next;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
