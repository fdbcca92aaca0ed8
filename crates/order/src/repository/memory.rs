use async_trait::async_trait;
use chrono::Utc;
use shared::{
    abstract_trait::{
        OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, ProductQueryRepositoryTrait,
    },
    errors::RepositoryError,
    model::{Order, OrderStatus, Product},
};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Catalog store backed by a map. Seeded up front; the composer only reads
/// from it.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<i64, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let map = products
            .into_iter()
            .map(|product| (product.product_id, product))
            .collect();

        Self {
            products: Mutex::new(map),
        }
    }

    pub async fn insert(&self, product: Product) {
        self.products
            .lock()
            .await
            .insert(product.product_id, product);
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_by_id(&self, product_id: i64) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.lock().await.get(&product_id).cloned())
    }
}

#[derive(Default)]
struct OrderStoreState {
    orders: HashMap<i64, Order>,
    next_order_id: i64,
    next_item_id: i64,
}

/// Durable order store stand-in. Assigns sequential identifiers and
/// timestamps the way the real store would: `created_at` once, `updated_at`
/// on every save. The whole aggregate lives under one key, so deleting an
/// order takes its items with it.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    state: Mutex<OrderStoreState>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.state.lock().await.orders.len()
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrderRepository {
    async fn save(&self, mut order: Order) -> Result<Order, RepositoryError> {
        let mut state = self.state.lock().await;
        let now = Utc::now().naive_utc();

        if order.order_id == 0 {
            state.next_order_id += 1;
            order.order_id = state.next_order_id;
            order.created_at = Some(now);
        } else if !state.orders.contains_key(&order.order_id) {
            return Err(RepositoryError::NotFound);
        }

        for item in &mut order.order_items {
            if item.order_item_id == 0 {
                state.next_item_id += 1;
                item.order_item_id = state.next_item_id;
            }
        }

        order.updated_at = Some(now);

        state.orders.insert(order.order_id, order.clone());
        Ok(order)
    }

    async fn delete_by_id(&self, order_id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        match state.orders.remove(&order_id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let state = self.state.lock().await;
        let mut orders: Vec<Order> = state.orders.values().cloned().collect();
        orders.sort_by_key(|order| order.order_id);
        Ok(orders)
    }

    async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, RepositoryError> {
        Ok(self.state.lock().await.orders.get(&order_id).cloned())
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepositoryError> {
        let state = self.state.lock().await;
        let mut orders: Vec<Order> = state
            .orders
            .values()
            .filter(|order| order.status == status)
            .cloned()
            .collect();
        orders.sort_by_key(|order| order.order_id);
        Ok(orders)
    }

    async fn find_by_customer_email(&self, email: &str) -> Result<Vec<Order>, RepositoryError> {
        let state = self.state.lock().await;
        let mut orders: Vec<Order> = state
            .orders
            .values()
            .filter(|order| order.customer_email == email)
            .cloned()
            .collect();
        orders.sort_by_key(|order| order.order_id);
        Ok(orders)
    }

    async fn exists_by_id(&self, order_id: i64) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().await.orders.contains_key(&order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::model::OrderItem;

    fn pending_order(email: &str) -> Order {
        Order {
            order_id: 0,
            customer_name: "Jane Doe".into(),
            customer_email: email.into(),
            customer_phone: "555-0100".into(),
            shipping_address: "1 Main St".into(),
            status: OrderStatus::Pending,
            total_amount: Decimal::new(1999, 2),
            order_items: vec![OrderItem {
                order_item_id: 0,
                product_id: 1,
                product_name: "Widget".into(),
                quantity: 1,
                unit_price: Decimal::new(1999, 2),
                total_price: Decimal::new(1999, 2),
            }],
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn first_save_assigns_ids_and_timestamps() {
        let repo = InMemoryOrderRepository::new();

        let saved = repo.save(pending_order("a@example.com")).await.unwrap();

        assert_eq!(saved.order_id, 1);
        assert_eq!(saved.order_items[0].order_item_id, 1);
        assert!(saved.created_at.is_some());
        assert_eq!(saved.created_at, saved.updated_at);
    }

    #[tokio::test]
    async fn resave_keeps_created_at() {
        let repo = InMemoryOrderRepository::new();

        let mut saved = repo.save(pending_order("a@example.com")).await.unwrap();
        let created_at = saved.created_at;

        saved.status = OrderStatus::Confirmed;
        let resaved = repo.save(saved).await.unwrap();

        assert_eq!(resaved.created_at, created_at);
        assert_eq!(resaved.order_id, 1);
    }

    #[tokio::test]
    async fn save_of_unknown_id_is_not_found() {
        let repo = InMemoryOrderRepository::new();

        let mut order = pending_order("a@example.com");
        order.order_id = 42;

        assert!(matches!(
            repo.save(order).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_whole_aggregate() {
        let repo = InMemoryOrderRepository::new();

        let saved = repo.save(pending_order("a@example.com")).await.unwrap();
        repo.delete_by_id(saved.order_id).await.unwrap();

        assert_eq!(repo.count().await, 0);
        assert!(repo.find_by_id(saved.order_id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete_by_id(saved.order_id).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn filters_match_status_and_email() {
        let repo = InMemoryOrderRepository::new();

        let first = repo.save(pending_order("a@example.com")).await.unwrap();
        repo.save(pending_order("b@example.com")).await.unwrap();

        let mut shipped = first.clone();
        shipped.status = OrderStatus::Shipped;
        repo.save(shipped).await.unwrap();

        let by_status = repo.find_by_status(OrderStatus::Shipped).await.unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].order_id, first.order_id);

        let by_email = repo.find_by_customer_email("b@example.com").await.unwrap();
        assert_eq!(by_email.len(), 1);

        let none = repo.find_by_customer_email("c@example.com").await.unwrap();
        assert!(none.is_empty());
    }
}
