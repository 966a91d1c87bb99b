use crate::domain::state::OrderState;
use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Something an actor can do to an order.
///
/// Declared in the order the actions appear in the state table, so every
/// state's legal actions list in table order.
///
/// Whether an action is legal depends on the current state (and, for the
/// tenanted machine, on the actor). Where it leads does not: see
/// [`next_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    Place,
    Cancel,
    Uncancel,
    Expire,
    Accept,
    Deliver,
    Unaccept,
    Pay,
    Undeliver,
    DisputeDelivery,
    UndisputeDelivery,
    AcceptPayment,
    DisputePayment,
    UndisputePayment,
    Resolve,
}

impl OrderAction {
    pub const ALL: [Self; 15] = [
        Self::Place,
        Self::Cancel,
        Self::Uncancel,
        Self::Expire,
        Self::Accept,
        Self::Deliver,
        Self::Unaccept,
        Self::Pay,
        Self::Undeliver,
        Self::DisputeDelivery,
        Self::UndisputeDelivery,
        Self::AcceptPayment,
        Self::DisputePayment,
        Self::UndisputePayment,
        Self::Resolve,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Cancel => "CANCEL",
            Self::Uncancel => "UNCANCEL",
            Self::Expire => "EXPIRE",
            Self::Accept => "ACCEPT",
            Self::Deliver => "DELIVER",
            Self::Unaccept => "UNACCEPT",
            Self::Pay => "PAY",
            Self::Undeliver => "UNDELIVER",
            Self::DisputeDelivery => "DISPUTE_DELIVERY",
            Self::UndisputeDelivery => "UNDISPUTE_DELIVERY",
            Self::AcceptPayment => "ACCEPT_PAYMENT",
            Self::DisputePayment => "DISPUTE_PAYMENT",
            Self::UndisputePayment => "UNDISPUTE_PAYMENT",
            Self::Resolve => "RESOLVE",
        }
    }

    pub const fn next_state(self) -> OrderState {
        next_state(self)
    }

    /// Bit position of this action inside an [`ActionSet`](crate::domain::action_set::ActionSet).
    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// The action/destination table. Independent of the state the action is
/// invoked from.
pub const fn next_state(action: OrderAction) -> OrderState {
    match action {
        OrderAction::Place => OrderState::Placed,
        OrderAction::Cancel => OrderState::Cancelled,
        OrderAction::Uncancel => OrderState::Placed,
        OrderAction::Expire => OrderState::Expired,
        OrderAction::Accept => OrderState::Fulfilling,
        OrderAction::Deliver => OrderState::Delivered,
        OrderAction::Unaccept => OrderState::Placed,
        OrderAction::Pay => OrderState::Paid,
        OrderAction::Undeliver => OrderState::Fulfilling,
        OrderAction::DisputeDelivery => OrderState::DisputedDelivery,
        OrderAction::UndisputeDelivery => OrderState::Delivered,
        OrderAction::AcceptPayment => OrderState::Done,
        OrderAction::DisputePayment => OrderState::DisputedPayment,
        OrderAction::UndisputePayment => OrderState::Paid,
        OrderAction::Resolve => OrderState::Done,
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderAction {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| OrderError::Parse(format!("unknown action: {s}")))
    }
}
