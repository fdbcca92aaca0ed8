use crate::{errors::RepositoryError, model::Product};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Catalog store seam. The core only ever reads products; catalog mutation
/// belongs to whoever owns the store.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_by_id(&self, product_id: i64) -> Result<Option<Product>, RepositoryError>;
}
