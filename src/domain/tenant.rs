use crate::domain::action::OrderAction;
use crate::domain::action_set::ActionSet;
use crate::domain::state::{OrderState, possible_actions_for_state};
use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role an actor plays when acting on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tenant {
    Customer,
    Deliverer,
    Moderator,
    System,
}

impl Tenant {
    pub const ALL: [Self; 4] = [Self::Customer, Self::Deliverer, Self::Moderator, Self::System];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Deliverer => "DELIVERER",
            Self::Moderator => "MODERATOR",
            Self::System => "SYSTEM",
        }
    }

    pub const fn allowed_actions(self) -> ActionSet {
        actions_for_tenant(self)
    }

    /// Every tenant except `self`, i.e. the roles one can switch to.
    pub fn others(self) -> impl Iterator<Item = Tenant> {
        Self::ALL.into_iter().filter(move |tenant| *tenant != self)
    }
}

/// The tenant authorization table.
///
/// `DisputeDelivery` belongs to the customer only and `DisputePayment` to the
/// deliverer only.
pub const fn actions_for_tenant(tenant: Tenant) -> ActionSet {
    use OrderAction::*;

    match tenant {
        Tenant::Customer => ActionSet::of(&[
            Place,
            Cancel,
            Uncancel,
            Pay,
            DisputeDelivery,
            UndisputeDelivery,
        ]),
        Tenant::Deliverer => ActionSet::of(&[
            Accept,
            Unaccept,
            Deliver,
            Undeliver,
            AcceptPayment,
            DisputePayment,
            UndisputePayment,
        ]),
        Tenant::Moderator => ActionSet::of(&[Resolve]),
        Tenant::System => ActionSet::of(&[Expire]),
    }
}

pub const fn possible_actions_for_state_and_tenant(state: OrderState, tenant: Tenant) -> ActionSet {
    possible_actions_for_state(state).intersection(actions_for_tenant(tenant))
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tenant {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tenant| tenant.as_str() == s)
            .ok_or_else(|| OrderError::Parse(format!("unknown tenant: {s}")))
    }
}
