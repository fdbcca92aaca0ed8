use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Customer name is required"))]
    #[schema(example = "Jane Doe")]
    pub customer_name: String,

    #[validate(email(message = "Customer email must be valid"))]
    #[schema(example = "jane@example.com")]
    pub customer_email: String,

    #[validate(length(min = 1, message = "Customer phone is required"))]
    #[schema(example = "555-0100")]
    pub customer_phone: String,

    #[validate(length(min = 1, message = "Shipping address is required"))]
    #[schema(example = "1 Main St, Springfield")]
    pub shipping_address: String,

    /// Ignored on creation; new orders always start out PENDING.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub order_items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(range(min = 1, message = "Order ID is required"))]
    #[schema(example = 1)]
    pub order_id: i64,

    pub status: OrderStatus,
}
