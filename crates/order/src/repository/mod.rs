mod memory;

pub use self::memory::{InMemoryOrderRepository, InMemoryProductRepository};
