use crate::domain::OrderId;
use crate::domain::action::OrderAction;
use crate::domain::state::OrderState;
use crate::domain::tenant::Tenant;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderError>;

#[derive(Error, Debug)]
pub enum OrderError {
    /// The action is not in the possible-actions set of the order it was
    /// attempted on. `tenant` is `None` for the un-tenanted machine.
    #[error("illegal action {action} in state {state}{}", for_tenant(.tenant))]
    IllegalAction {
        action: OrderAction,
        state: OrderState,
        tenant: Option<Tenant>,
    },
    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),
    #[error("duplicate order: {0}")]
    DuplicateOrder(OrderId),
    #[error("order {0} changed while the command was applied")]
    Conflict(OrderId),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn for_tenant(tenant: &Option<Tenant>) -> String {
    tenant
        .map(|tenant| format!(" for tenant {tenant}"))
        .unwrap_or_default()
}
