use crate::{errors::RepositoryError, model::Order};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

/// Write half of the durable order store. The aggregate is persisted as one
/// unit: a save covers the order and all of its items, a delete removes them
/// with it.
#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the aggregate. On first save (order_id == 0) the store assigns
    /// order/item identifiers and `created_at`; `updated_at` is refreshed on
    /// every save and `created_at` is never rewritten afterwards.
    async fn save(&self, order: Order) -> Result<Order, RepositoryError>;

    async fn delete_by_id(&self, order_id: i64) -> Result<(), RepositoryError>;
}
