use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::ServiceError,
    model::{Order, OrderItem, OrderStatus},
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    catalog: DynProductQueryRepository,
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

pub struct OrderCommandServiceDeps {
    pub catalog: DynProductQueryRepository,
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            catalog,
            command,
            query,
        } = deps;

        Self {
            catalog,
            command,
            query,
        }
    }
}

fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| flatten_errors(field, kind))
        .collect()
}

fn flatten_errors(field: &str, kind: &validator::ValidationErrorsKind) -> Vec<String> {
    use validator::ValidationErrorsKind;

    match kind {
        ValidationErrorsKind::Field(errs) => errs
            .iter()
            .map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                format!("{field}: {message}")
            })
            .collect(),
        ValidationErrorsKind::Struct(nested) => validation_messages(nested),
        ValidationErrorsKind::List(map) => map
            .iter()
            .flat_map(|(idx, nested)| {
                validation_messages(nested)
                    .into_iter()
                    .map(move |msg| format!("{field}[{idx}].{msg}"))
            })
            .collect(),
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🏗️ Creating new order for customer={}",
            req.customer_email
        );

        // All input checks run before any store call; a rejected request must
        // leave nothing behind.
        req.validate()
            .map_err(|errs| ServiceError::Validation(validation_messages(&errs)))?;

        let mut order_items = Vec::with_capacity(req.order_items.len());
        let mut total_amount = Decimal::ZERO;

        for line in &req.order_items {
            let product = self
                .catalog
                .find_by_id(line.product_id)
                .await
                .map_err(ServiceError::Repo)?
                .ok_or_else(|| {
                    error!("❌ Product not found: id={}", line.product_id);
                    ServiceError::NotFound(format!(
                        "Product not found with id: {}",
                        line.product_id
                    ))
                })?;

            // Price snapshot: the catalog price at composition time sticks to
            // the item even if the catalog changes later.
            let unit_price = product.price;
            let total_price = unit_price * Decimal::from(line.quantity);
            total_amount += total_price;

            order_items.push(OrderItem {
                order_item_id: 0,
                product_id: product.product_id,
                product_name: product.name,
                quantity: line.quantity,
                unit_price,
                total_price,
            });
        }

        // Caller-supplied status is deliberately ignored; orders are always
        // born PENDING.
        let order = Order {
            order_id: 0,
            customer_name: req.customer_name.clone(),
            customer_email: req.customer_email.clone(),
            customer_phone: req.customer_phone.clone(),
            shipping_address: req.shipping_address.clone(),
            status: OrderStatus::Pending,
            total_amount,
            order_items,
            created_at: None,
            updated_at: None,
        };

        let saved = self.command.save(order).await.map_err(ServiceError::Repo)?;

        info!(
            "✅ Order created: id={} total={}",
            saved.order_id, saved.total_amount
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order created successfully".into(),
            data: OrderResponse::from(saved),
        })
    }

    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "✏️ Updating order ID={} to status={}",
            req.order_id, req.status
        );

        let mut order = self
            .query
            .find_by_id(req.order_id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| {
                error!("❌ Order not found: id={}", req.order_id);
                ServiceError::NotFound(format!("Order not found with id: {}", req.order_id))
            })?;

        // Any status may move to any other; the store refreshes updated_at on
        // save and leaves created_at alone.
        order.status = req.status;

        let saved = self.command.save(order).await.map_err(ServiceError::Repo)?;

        info!("✅ Order {} now {}", saved.order_id, saved.status);

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order status updated successfully".into(),
            data: OrderResponse::from(saved),
        })
    }

    async fn delete_order(&self, order_id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting order with ID: {order_id}");

        let exists = self
            .query
            .exists_by_id(order_id)
            .await
            .map_err(ServiceError::Repo)?;

        if !exists {
            error!("❌ Order not found: id={order_id}");
            return Err(ServiceError::NotFound(format!(
                "Order not found with id: {order_id}"
            )));
        }

        self.command
            .delete_by_id(order_id)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ Order deleted: id={order_id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order deleted successfully".into(),
            data: (),
        })
    }
}
