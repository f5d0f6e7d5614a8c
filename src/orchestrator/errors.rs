use std::fmt;

use crate::domain::{Order, OrderError};
use crate::ports::{KitchenError, PaymentGatewayError, RepositoryError};

// ============================================================================
// Orchestrator Errors
// ============================================================================
//
// Every variant that concerns an existing order carries the order as it is
// now, so the caller can see how far the operation got.
//
// ============================================================================

/// External effect that had already happened when a later step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    Charged,
    Refunded,
    KitchenNotified,
    PickupNotified,
}

impl SideEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            SideEffect::Charged => "charged",
            SideEffect::Refunded => "refunded",
            SideEffect::KitchenNotified => "kitchen_notified",
            SideEffect::PickupNotified => "pickup_notified",
        }
    }
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid state transition: {source}")]
    InvalidStateTransition {
        order: Box<Order>,
        #[source]
        source: OrderError,
    },

    /// The gateway refused a charge or a refund. Recorded on the order.
    #[error("payment failure: {source}")]
    PaymentFailure {
        order: Box<Order>,
        #[source]
        source: PaymentGatewayError,
    },

    /// A kitchen call failed; the order keeps its last successful status.
    #[error("kitchen failure: {source}")]
    KitchenFailure {
        order: Box<Order>,
        #[source]
        source: KitchenError,
    },

    /// A write failed. When `after` is set, that effect already happened
    /// outside this process and must not be repeated blindly.
    #[error("persistence error: {source}")]
    PersistenceError {
        order: Option<Box<Order>>,
        after: Option<SideEffect>,
        #[source]
        source: RepositoryError,
    },
}

impl OrchestratorError {
    /// Order state at the time of failure, when one was loaded.
    pub fn order(&self) -> Option<&Order> {
        match self {
            OrchestratorError::InvalidStateTransition { order, .. }
            | OrchestratorError::PaymentFailure { order, .. }
            | OrchestratorError::KitchenFailure { order, .. } => Some(order),
            OrchestratorError::PersistenceError { order, .. } => order.as_deref(),
            OrchestratorError::NotFound { .. } => None,
        }
    }

    /// Side effect that happened before a failed write.
    pub fn side_effect(&self) -> Option<SideEffect> {
        match self {
            OrchestratorError::PersistenceError { after, .. } => *after,
            _ => None,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            OrchestratorError::NotFound { .. } => "not_found",
            OrchestratorError::InvalidStateTransition { .. } => "invalid_state_transition",
            OrchestratorError::PaymentFailure { .. } => "payment_failure",
            OrchestratorError::KitchenFailure { .. } => "kitchen_failure",
            OrchestratorError::PersistenceError { .. } => "persistence_error",
        }
    }

    pub(crate) fn rule(order: &Order, source: impl Into<OrderError>) -> Self {
        OrchestratorError::InvalidStateTransition {
            order: Box::new(order.clone()),
            source: source.into(),
        }
    }

    /// Failed lookup of a record that is not the order being worked on.
    pub(crate) fn lookup(source: RepositoryError) -> Self {
        match source {
            RepositoryError::NotFound { entity, id } => OrchestratorError::NotFound { entity, id },
            other => OrchestratorError::PersistenceError {
                order: None,
                after: None,
                source: other,
            },
        }
    }
}
