use crate::domain::payment::PaymentMethod;
use crate::domain::product::ProductId;
use super::value_objects::ItemId;

// ============================================================================
// Order Commands - Represent caller intent on an existing order
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    AddItem {
        product_id: ProductId,
        quantity: i32,
    },
    RemoveItem {
        item_id: ItemId,
    },
    Pay {
        method: PaymentMethod,
    },
    RetryPreparation,
    MarkReady,
    Deliver,
    Cancel,
}

impl OrderCommand {
    /// Stable label used for spans and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            OrderCommand::AddItem { .. } => "add_item",
            OrderCommand::RemoveItem { .. } => "remove_item",
            OrderCommand::Pay { .. } => "pay",
            OrderCommand::RetryPreparation => "retry_preparation",
            OrderCommand::MarkReady => "mark_ready",
            OrderCommand::Deliver => "deliver",
            OrderCommand::Cancel => "cancel",
        }
    }
}
