use async_trait::async_trait;
use shared::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
    model::OrderStatus,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("📦 Fetching all orders");

        let orders = self.query.find_all().await.map_err(ServiceError::Repo)?;

        info!("✅ Fetched {} orders", orders.len());

        Ok(ApiResponse {
            status: "success".into(),
            message: "Orders fetched successfully".into(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, order_id: i64) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔍 Fetching order with ID: {order_id}");

        let order = self
            .query
            .find_by_id(order_id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| {
                error!("❌ Order not found: id={order_id}");
                ServiceError::NotFound(format!("Order not found with id: {order_id}"))
            })?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order fetched successfully".into(),
            data: OrderResponse::from(order),
        })
    }

    async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Fetching orders with status: {status}");

        let orders = self
            .query
            .find_by_status(status)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Orders fetched successfully".into(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }

    async fn find_by_customer_email(
        &self,
        email: &str,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Fetching orders for customer: {email}");

        let orders = self
            .query
            .find_by_customer_email(email)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Orders fetched successfully".into(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }
}
