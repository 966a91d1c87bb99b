use crate::application::view::OrderView;
use crate::domain::OrderId;
use crate::domain::command::OrderCommand;
use crate::domain::ports::OrderStoreBox;
use crate::domain::tenant::Tenant;
use crate::domain::tenanted::TenantedOrder;
use crate::error::{OrderError, Result};
use tracing::{debug, info};

/// The entry point for acting on tracked orders.
///
/// `OrderDesk` owns the order store. Each command is evaluated against the
/// order's current instance and written back only if nobody else replaced
/// that instance in the meantime.
pub struct OrderDesk {
    store: OrderStoreBox,
}

impl OrderDesk {
    /// Creates a new `OrderDesk` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The registry holding the current instance of each order.
    pub fn new(store: OrderStoreBox) -> Self {
        Self { store }
    }

    /// Registers a new unplaced order acted on by `tenant`.
    pub async fn open(&self, id: OrderId, tenant: Tenant) -> Result<TenantedOrder> {
        let order = TenantedOrder::new(tenant);
        self.store.insert(id, order).await?;
        info!(order = id, %tenant, "opened order");
        Ok(order)
    }

    pub async fn get(&self, id: OrderId) -> Result<TenantedOrder> {
        self.store.get(id).await?.ok_or(OrderError::UnknownOrder(id))
    }

    /// Applies one command and returns the order's new instance.
    ///
    /// An order not seen before starts from `NotPlaced` and is only
    /// registered once a command on it is accepted. A rejected command
    /// stores nothing, neither a new order nor a tenant switch.
    pub async fn apply(&self, command: OrderCommand) -> Result<TenantedOrder> {
        let stored = self.store.get(command.order).await?;
        let current = stored.unwrap_or_else(|| TenantedOrder::new(command.tenant));

        let next = current.set_tenant(command.tenant).act(command.action)?;

        match stored {
            Some(expected) => self.store.replace(command.order, expected, next).await?,
            None => match self.store.insert(command.order, next).await {
                // Someone else opened the order since it was read
                Err(OrderError::DuplicateOrder(id)) => return Err(OrderError::Conflict(id)),
                other => other?,
            },
        }
        debug!(
            order = command.order,
            tenant = %command.tenant,
            action = %command.action,
            from = %current.state(),
            to = %next.state(),
            "applied command"
        );
        Ok(next)
    }

    /// Views of every tracked order, sorted by id.
    pub async fn snapshot(&self) -> Result<Vec<OrderView>> {
        let orders = self.store.all_orders().await?;
        Ok(orders
            .iter()
            .map(|(id, order)| OrderView::new(*id, order))
            .collect())
    }

    /// Consumes the desk and returns the final view of all orders.
    pub async fn into_results(self) -> Result<Vec<OrderView>> {
        self.snapshot().await
    }
}
