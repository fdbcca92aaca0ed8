mod api;
mod identity;
mod order;
mod product;

pub use self::api::ApiResponse;
pub use self::identity::UserInfoResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::product::ProductResponse;
