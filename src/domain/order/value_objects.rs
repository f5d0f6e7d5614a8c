use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Storage identity of an order. `0` means "not yet persisted".
pub type OrderId = u64;

/// Storage identity of an order item. `0` means "not yet persisted".
pub type ItemId = u64;

/// One line of an order.
///
/// `unit_price` is a snapshot of the product price taken when the item was
/// added; later price changes on the product never reach existing orders.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    pub id: ItemId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn new(product_id: ProductId, quantity: i32, unit_price: Decimal) -> Self {
        Self {
            id: 0,
            product_id,
            quantity,
            unit_price,
        }
    }

    /// `quantity × unit_price`
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Lifecycle status of an order.
///
/// Variant order is the ordinal used when sorting active orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum OrderStatus {
    Pending,
    Paid,
    Preparing,
    Ready,
    Delivered,
    Canceled,
    Error,
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
        OrderStatus::Error,
        OrderStatus::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Error => "ERROR",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }

    /// Never fails: unrecognized tokens map to [`OrderStatus::Unknown`].
    pub fn parse(token: &str) -> Self {
        match token {
            "PENDING" => OrderStatus::Pending,
            "PAID" => OrderStatus::Paid,
            "PREPARING" => OrderStatus::Preparing,
            "READY" => OrderStatus::Ready,
            "DELIVERED" => OrderStatus::Delivered,
            "CANCELED" => OrderStatus::Canceled,
            "ERROR" => OrderStatus::Error,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Paid => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Ready => 3,
            OrderStatus::Delivered => 4,
            OrderStatus::Canceled => 5,
            OrderStatus::Error => 6,
            OrderStatus::Unknown => 7,
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Canceled | OrderStatus::Error | OrderStatus::Unknown
        )
    }

    /// Statuses from which a cancel request is accepted.
    pub fn is_cancelable(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Paid | OrderStatus::Preparing | OrderStatus::Ready
        )
    }

    /// Edges of the order state machine.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        match (self, next) {
            (Pending, Paid) | (Paid, Preparing) | (Preparing, Ready) | (Ready, Delivered) => true,
            (from, Canceled) | (from, Error) => from.is_cancelable(),
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for OrderStatus {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
