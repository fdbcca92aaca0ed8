use crate::{
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
    model::OrderStatus,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, order_id: i64) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_customer_email(
        &self,
        email: &str,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}
