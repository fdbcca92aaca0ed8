use crate::service::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
use shared::abstract_trait::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynProductQueryRepository,
};
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_command: OrderCommandService,
    pub order_query: OrderQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub catalog: DynProductQueryRepository,
    pub order_command_repo: DynOrderCommandRepository,
    pub order_query_repo: DynOrderQueryRepository,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            catalog,
            order_command_repo,
            order_query_repo,
        } = deps;

        let order_command = OrderCommandService::new(OrderCommandServiceDeps {
            catalog,
            command: order_command_repo,
            query: order_query_repo.clone(),
        });

        let order_query = OrderQueryService::new(order_query_repo);

        Self {
            order_command,
            order_query,
        }
    }
}
