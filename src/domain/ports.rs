use super::OrderId;
use super::tenanted::TenantedOrder;
use crate::error::Result;
use async_trait::async_trait;

/// Registry of the current instance of every tracked order.
///
/// Writes are compare-and-swap so that concurrent actors on the same order
/// cannot silently overwrite each other.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Registers a new order. Fails with `DuplicateOrder` if `id` is taken.
    async fn insert(&self, id: OrderId, order: TenantedOrder) -> Result<()>;

    async fn get(&self, id: OrderId) -> Result<Option<TenantedOrder>>;

    /// Replaces the order only if it still equals `expected`.
    ///
    /// Fails with `UnknownOrder` if `id` is absent and `Conflict` if the
    /// stored value moved on.
    async fn replace(
        &self,
        id: OrderId,
        expected: TenantedOrder,
        next: TenantedOrder,
    ) -> Result<()>;

    /// All orders, sorted by id.
    async fn all_orders(&self) -> Result<Vec<(OrderId, TenantedOrder)>>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
