use crate::domain::action::OrderAction;
use crate::domain::action_set::ActionSet;
use crate::domain::order::{Order, OrderMachine, transition};
use crate::domain::state::OrderState;
use crate::domain::tenant::{Tenant, possible_actions_for_state_and_tenant};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An order seen through the eyes of one tenant.
///
/// Holds the same state as [`Order`] plus the acting tenant, and only offers
/// the actions that are both legal in the current state and granted to that
/// tenant. Acting keeps the tenant; switching tenant keeps the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantedOrder {
    state: OrderState,
    tenant: Tenant,
}

impl TenantedOrder {
    /// Creates an unplaced order acted on by `tenant`.
    pub const fn new(tenant: Tenant) -> Self {
        Self::from_parts(OrderState::NotPlaced, tenant)
    }

    pub const fn from_parts(state: OrderState, tenant: Tenant) -> Self {
        Self { state, tenant }
    }

    pub const fn state(&self) -> OrderState {
        self.state
    }

    pub const fn tenant(&self) -> Tenant {
        self.tenant
    }

    /// The order without its tenant.
    pub const fn base(&self) -> Order {
        Order::from_state(self.state)
    }

    pub const fn possible_actions(&self) -> ActionSet {
        possible_actions_for_state_and_tenant(self.state, self.tenant)
    }

    pub fn act(&self, action: OrderAction) -> Result<Self> {
        let state = transition(
            self.state,
            self.possible_actions(),
            action,
            Some(self.tenant),
        )?;
        Ok(Self {
            state,
            tenant: self.tenant,
        })
    }

    pub const fn set_tenant(&self, tenant: Tenant) -> Self {
        Self {
            state: self.state,
            tenant,
        }
    }

    /// Applies each `(tenant, action)` step in turn, switching to the step's
    /// tenant first. Stops at the first rejection.
    pub fn replay<I>(self, steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Tenant, OrderAction)>,
    {
        steps
            .into_iter()
            .try_fold(self, |order, (tenant, action)| {
                order.set_tenant(tenant).act(action)
            })
    }
}

impl OrderMachine for TenantedOrder {
    fn state(&self) -> OrderState {
        TenantedOrder::state(self)
    }

    fn possible_actions(&self) -> ActionSet {
        TenantedOrder::possible_actions(self)
    }

    fn act(&self, action: OrderAction) -> Result<Self> {
        TenantedOrder::act(self, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;

    #[test]
    fn test_customer_can_only_place_new_order() {
        let order = TenantedOrder::new(Tenant::Customer);
        assert_eq!(order.possible_actions(), ActionSet::of(&[OrderAction::Place]));
    }

    #[test]
    fn test_customer_on_placed_order_can_only_cancel() {
        let order = TenantedOrder::from_parts(OrderState::Placed, Tenant::Customer);
        assert_eq!(order.possible_actions(), ActionSet::of(&[OrderAction::Cancel]));
    }

    #[test]
    fn test_deliverer_on_delivered_order() {
        let order = TenantedOrder::from_parts(OrderState::Delivered, Tenant::Deliverer);
        assert_eq!(
            order.possible_actions(),
            ActionSet::of(&[OrderAction::Undeliver, OrderAction::DisputePayment])
        );
        assert!(!order.can(OrderAction::DisputeDelivery));
        assert!(!order.can(OrderAction::Pay));
    }

    #[test]
    fn test_set_tenant_never_changes_state() {
        let order = TenantedOrder::from_parts(OrderState::Placed, Tenant::Customer);
        let moderated = order.set_tenant(Tenant::Moderator);

        assert_eq!(moderated.state(), OrderState::Placed);
        assert_eq!(moderated.tenant(), Tenant::Moderator);
        assert!(moderated.possible_actions().is_empty());

        assert_eq!(order.tenant(), Tenant::Customer);
    }

    #[test]
    fn test_customer_may_pay_but_not_undeliver() {
        let order = TenantedOrder::from_parts(OrderState::Delivered, Tenant::Customer);

        let paid = order.act(OrderAction::Pay).unwrap();
        assert_eq!(paid.state(), OrderState::Paid);
        assert_eq!(paid.tenant(), Tenant::Customer);

        let result = order.act(OrderAction::Undeliver);
        assert!(matches!(
            result,
            Err(OrderError::IllegalAction {
                action: OrderAction::Undeliver,
                state: OrderState::Delivered,
                tenant: Some(Tenant::Customer),
            })
        ));
        assert_eq!(order.state(), OrderState::Delivered);
    }

    #[test]
    fn test_replay_switches_tenants() {
        let done = TenantedOrder::new(Tenant::Customer)
            .replay([
                (Tenant::Customer, OrderAction::Place),
                (Tenant::Deliverer, OrderAction::Accept),
                (Tenant::Deliverer, OrderAction::Deliver),
                (Tenant::Customer, OrderAction::DisputeDelivery),
                (Tenant::Moderator, OrderAction::Resolve),
            ])
            .unwrap();
        assert_eq!(done.state(), OrderState::Done);
        assert_eq!(done.tenant(), Tenant::Moderator);
        assert!(done.possible_actions().is_empty());
    }

    #[test]
    fn test_base_drops_tenant_filter() {
        let order = TenantedOrder::from_parts(OrderState::Placed, Tenant::System);
        assert_eq!(order.possible_actions(), ActionSet::of(&[OrderAction::Expire]));
        assert_eq!(order.base().possible_actions().len(), 3);
    }
}
