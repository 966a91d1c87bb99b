use crate::domain::action::OrderAction;
use crate::domain::action_set::ActionSet;
use crate::domain::state::{OrderState, possible_actions_for_state};
use crate::domain::tenant::Tenant;
use crate::domain::tenanted::TenantedOrder;
use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};

/// Read/act surface shared by the base and the tenanted order machines.
///
/// Implementations are immutable values: `act` never touches the receiver and
/// returns the successor instead.
pub trait OrderMachine: Copy {
    fn state(&self) -> OrderState;

    fn possible_actions(&self) -> ActionSet;

    fn act(&self, action: OrderAction) -> Result<Self>;

    fn can(&self, action: OrderAction) -> bool {
        self.possible_actions().contains(action)
    }

    fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }
}

/// The base order state machine, with no notion of who is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    state: OrderState,
}

impl Order {
    /// Creates an order that has not been placed yet.
    pub const fn new() -> Self {
        Self::from_state(OrderState::NotPlaced)
    }

    /// Resumes an order in an arbitrary state.
    pub const fn from_state(state: OrderState) -> Self {
        Self { state }
    }

    pub const fn state(&self) -> OrderState {
        self.state
    }

    pub const fn possible_actions(&self) -> ActionSet {
        possible_actions_for_state(self.state)
    }

    /// Applies `action`, returning the order in its successor state.
    ///
    /// Fails with [`OrderError::IllegalAction`] if the action is not legal in
    /// the current state.
    pub fn act(&self, action: OrderAction) -> Result<Self> {
        let state = transition(self.state, self.possible_actions(), action, None)?;
        Ok(Self { state })
    }

    /// Applies `actions` in sequence, stopping at the first rejection.
    pub fn replay<I>(self, actions: I) -> Result<Self>
    where
        I: IntoIterator<Item = OrderAction>,
    {
        actions
            .into_iter()
            .try_fold(self, |order, action| order.act(action))
    }

    pub const fn with_tenant(self, tenant: Tenant) -> TenantedOrder {
        TenantedOrder::from_parts(self.state, tenant)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderMachine for Order {
    fn state(&self) -> OrderState {
        Order::state(self)
    }

    fn possible_actions(&self) -> ActionSet {
        Order::possible_actions(self)
    }

    fn act(&self, action: OrderAction) -> Result<Self> {
        Order::act(self, action)
    }
}

/// Resolves the successor of `state` under `action`, given the set of actions
/// currently open to the caller.
pub(crate) fn transition(
    state: OrderState,
    possible: ActionSet,
    action: OrderAction,
    tenant: Option<Tenant>,
) -> Result<OrderState> {
    if possible.contains(action) {
        Ok(action.next_state())
    } else {
        Err(OrderError::IllegalAction {
            action,
            state,
            tenant,
        })
    }
}
