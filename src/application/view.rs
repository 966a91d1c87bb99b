use crate::domain::OrderId;
use crate::domain::action_set::ActionSet;
use crate::domain::state::OrderState;
use crate::domain::tenant::Tenant;
use crate::domain::tenanted::TenantedOrder;
use serde::Serialize;

/// What a presentation layer shows for one order: where it is, who is
/// looking, and what that tenant may do next.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct OrderView {
    pub order: OrderId,
    pub tenant: Tenant,
    pub state: OrderState,
    pub possible_actions: ActionSet,
}

impl OrderView {
    pub fn new(order: OrderId, instance: &TenantedOrder) -> Self {
        Self {
            order,
            tenant: instance.tenant(),
            state: instance.state(),
            possible_actions: instance.possible_actions(),
        }
    }
}
