use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Payment Value Objects
// ============================================================================

/// Status of a single payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Reversed,
    Canceled,
    Error,
    None,
    Unknown,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 7] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Reversed,
        PaymentStatus::Canceled,
        PaymentStatus::Error,
        PaymentStatus::None,
        PaymentStatus::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Reversed => "REVERSED",
            PaymentStatus::Canceled => "CANCELED",
            PaymentStatus::Error => "ERROR",
            PaymentStatus::None => "NONE",
            PaymentStatus::Unknown => "UNKNOWN",
        }
    }

    /// Never fails: unrecognized tokens map to [`PaymentStatus::Unknown`].
    pub fn parse(token: &str) -> Self {
        match token {
            "PENDING" => PaymentStatus::Pending,
            "PAID" => PaymentStatus::Paid,
            "REVERSED" => PaymentStatus::Reversed,
            "CANCELED" => PaymentStatus::Canceled,
            "ERROR" => PaymentStatus::Error,
            "NONE" => PaymentStatus::None,
            _ => PaymentStatus::Unknown,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, PaymentStatus::Pending | PaymentStatus::Paid)
    }

    /// Monotonic edges: `PENDING -> {PAID, ERROR, CANCELED}`, `PAID -> REVERSED`.
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (PaymentStatus::Pending, PaymentStatus::Paid)
                | (PaymentStatus::Pending, PaymentStatus::Error)
                | (PaymentStatus::Pending, PaymentStatus::Canceled)
                | (PaymentStatus::Paid, PaymentStatus::Reversed)
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for PaymentStatus {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// How the customer pays. `Money` is cash at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Money,
    Pix,
    None,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Money,
        PaymentMethod::Pix,
        PaymentMethod::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::Money => "MONEY",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::None => "NONE",
        }
    }

    /// Never fails: unrecognized tokens map to [`PaymentMethod::None`].
    pub fn parse(token: &str) -> Self {
        match token {
            "CREDIT_CARD" => PaymentMethod::CreditCard,
            "DEBIT_CARD" => PaymentMethod::DebitCard,
            "MONEY" => PaymentMethod::Money,
            "PIX" => PaymentMethod::Pix,
            _ => PaymentMethod::None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for PaymentMethod {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.as_str().to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
