use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::OrderId;

// ============================================================================
// Delivery
// ============================================================================
//
// The orchestrator creates the record and sets its status; address and
// tracking data belong to whoever runs the delivery.
//
// ============================================================================

/// Storage identity of a delivery record. `0` means "not yet persisted".
pub type DeliveryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Delivered,
    Canceled,
    Unknown,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::Sent => "SENT",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Canceled => "CANCELED",
            DeliveryStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(token: &str) -> Self {
        match token {
            "PENDING" => DeliveryStatus::Pending,
            "SENT" => DeliveryStatus::Sent,
            "DELIVERED" => DeliveryStatus::Delivered,
            "CANCELED" => DeliveryStatus::Canceled,
            _ => DeliveryStatus::Unknown,
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for DeliveryStatus {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub order_id: OrderId,
    pub status: DeliveryStatus,
    pub address: Option<String>,
    pub tracking_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Delivery {
    pub fn new(order_id: OrderId, status: DeliveryStatus) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            order_id,
            status,
            address: None,
            tracking_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record for an order handed over at the counter.
    pub fn handed_over(order_id: OrderId) -> Self {
        Self::new(order_id, DeliveryStatus::Delivered)
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn set_status(&mut self, status: DeliveryStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
