use crate::domain::OrderId;
use crate::domain::action::OrderAction;
use crate::domain::tenant::Tenant;
use serde::Deserialize;

/// One entry of an action log: `tenant` attempts `action` on `order`.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct OrderCommand {
    pub order: OrderId,
    pub tenant: Tenant,
    pub action: OrderAction,
}
