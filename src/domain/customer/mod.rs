// ============================================================================
// Customer - reference data read by the orchestrator when an order starts
// ============================================================================

pub mod value_objects;

pub use value_objects::{Cpf, Email};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CustomerId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub cpf: Cpf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: Email, cpf: Cpf) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            email,
            cpf,
            created_at: now,
            updated_at: now,
        }
    }
}
