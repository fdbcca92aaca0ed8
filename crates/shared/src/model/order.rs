use crate::model::order_item::OrderItem;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Order aggregate. `total_amount` always equals the sum of the item line
/// totals; both sides are exact decimals so the invariant survives any
/// quantity the store can hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub order_items: Vec<OrderItem>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Order {
    pub fn items_total(&self) -> Decimal {
        self.order_items.iter().map(|item| item.total_price).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("REFUNDED".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!("pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
    }

    #[test]
    fn terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn items_total_sums_line_totals() {
        let order = Order {
            order_id: 1,
            customer_name: "Jane Doe".into(),
            customer_email: "jane@example.com".into(),
            customer_phone: "555-0100".into(),
            shipping_address: "1 Main St".into(),
            status: OrderStatus::Pending,
            total_amount: Decimal::new(5498, 2),
            order_items: vec![
                OrderItem {
                    order_item_id: 1,
                    product_id: 1,
                    product_name: "Widget".into(),
                    quantity: 2,
                    unit_price: Decimal::new(1999, 2),
                    total_price: Decimal::new(3998, 2),
                },
                OrderItem {
                    order_item_id: 2,
                    product_id: 2,
                    product_name: "Gadget".into(),
                    quantity: 3,
                    unit_price: Decimal::new(500, 2),
                    total_price: Decimal::new(1500, 2),
                },
            ],
            created_at: None,
            updated_at: None,
        };

        assert_eq!(order.items_total(), order.total_amount);
    }
}
