mod claims;
mod order;
mod order_item;
mod product;
mod role;

pub use self::claims::{ClaimMap, VerifiedToken};
pub use self::order::{Order, OrderStatus};
pub use self::order_item::OrderItem;
pub use self::product::Product;
pub use self::role::{ROLE_ADMIN, ROLE_CUSTOMER, ROLE_EMPLOYEE, ROLE_MANAGER, RoleSet};
