pub mod identity;
pub mod order;
pub mod product;

pub use self::identity::{DynIdentityService, IdentityServiceTrait};
pub use self::order::repository::{
    DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandRepositoryTrait,
    OrderQueryRepositoryTrait,
};
pub use self::order::service::{
    DynOrderCommandService, DynOrderQueryService, OrderCommandServiceTrait, OrderQueryServiceTrait,
};
pub use self::product::{DynProductQueryRepository, ProductQueryRepositoryTrait};
