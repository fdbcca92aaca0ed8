use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line of an order. Owned exclusively by its `Order`; removing the
/// order removes its items with it. `unit_price` is the catalog price captured
/// at creation time and is never recomputed from the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}
