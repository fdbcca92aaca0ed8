use crate::{
    errors::RepositoryError,
    model::{Order, OrderStatus},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

/// Read half of the durable order store. Listing operations return whatever
/// order the store defines and an empty Vec when nothing matches.
#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_customer_email(&self, email: &str) -> Result<Vec<Order>, RepositoryError>;
    async fn exists_by_id(&self, order_id: i64) -> Result<bool, RepositoryError>;
}
