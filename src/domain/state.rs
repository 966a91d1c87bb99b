use crate::domain::action::OrderAction;
use crate::domain::action_set::ActionSet;
use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The lifecycle state of an order.
///
/// `NotPlaced` is the only initial state. `Expired` and `Done` are terminal:
/// no action is legal from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    NotPlaced,
    Placed,
    Cancelled,
    Expired,
    Fulfilling,
    Delivered,
    Paid,
    Done,
    DisputedDelivery,
    DisputedPayment,
}

impl OrderState {
    pub const ALL: [Self; 10] = [
        Self::NotPlaced,
        Self::Placed,
        Self::Cancelled,
        Self::Expired,
        Self::Fulfilling,
        Self::Delivered,
        Self::Paid,
        Self::Done,
        Self::DisputedDelivery,
        Self::DisputedPayment,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotPlaced => "NOT_PLACED",
            Self::Placed => "PLACED",
            Self::Cancelled => "CANCELLED",
            Self::Expired => "EXPIRED",
            Self::Fulfilling => "FULFILLING",
            Self::Delivered => "DELIVERED",
            Self::Paid => "PAID",
            Self::Done => "DONE",
            Self::DisputedDelivery => "DISPUTED_DELIVERY",
            Self::DisputedPayment => "DISPUTED_PAYMENT",
        }
    }

    /// Actions legal from this state, regardless of who performs them.
    pub const fn possible_actions(self) -> ActionSet {
        possible_actions_for_state(self)
    }

    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotPlaced)
    }

    pub const fn is_terminal(self) -> bool {
        possible_actions_for_state(self).is_empty()
    }
}

/// The state/action legality table.
pub const fn possible_actions_for_state(state: OrderState) -> ActionSet {
    use OrderAction::*;

    match state {
        OrderState::NotPlaced => ActionSet::of(&[Place]),
        OrderState::Placed => ActionSet::of(&[Cancel, Expire, Accept]),
        OrderState::Cancelled => ActionSet::of(&[Uncancel]),
        OrderState::Expired => ActionSet::EMPTY,
        OrderState::Fulfilling => ActionSet::of(&[Deliver, Unaccept]),
        OrderState::Delivered => ActionSet::of(&[Pay, Undeliver, DisputeDelivery, DisputePayment]),
        OrderState::Paid => ActionSet::of(&[AcceptPayment, DisputePayment]),
        OrderState::DisputedDelivery => ActionSet::of(&[UndisputeDelivery, Resolve]),
        OrderState::DisputedPayment => ActionSet::of(&[UndisputePayment, Resolve]),
        OrderState::Done => ActionSet::EMPTY,
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| OrderError::Parse(format!("unknown state: {s}")))
    }
}
