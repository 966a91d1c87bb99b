use crate::domain::OrderId;
use crate::domain::ports::OrderStore;
use crate::domain::tenanted::TenantedOrder;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order registry.
///
/// Uses `Arc<RwLock<BTreeMap<OrderId, TenantedOrder>>>` so clones share the
/// same orders and listings come out sorted by id. Nothing survives the
/// process.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<OrderId, TenantedOrder>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, id: OrderId, order: TenantedOrder) -> Result<()> {
        let mut orders = self.orders.write().await;
        match orders.entry(id) {
            Entry::Occupied(_) => Err(OrderError::DuplicateOrder(id)),
            Entry::Vacant(slot) => {
                slot.insert(order);
                Ok(())
            }
        }
    }

    async fn get(&self, id: OrderId) -> Result<Option<TenantedOrder>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).copied())
    }

    async fn replace(
        &self,
        id: OrderId,
        expected: TenantedOrder,
        next: TenantedOrder,
    ) -> Result<()> {
        let mut orders = self.orders.write().await;
        let current = orders.get_mut(&id).ok_or(OrderError::UnknownOrder(id))?;
        if *current != expected {
            return Err(OrderError::Conflict(id));
        }
        *current = next;
        Ok(())
    }

    async fn all_orders(&self) -> Result<Vec<(OrderId, TenantedOrder)>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().map(|(id, order)| (*id, *order)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::OrderAction;
    use crate::domain::tenant::Tenant;

    #[tokio::test]
    async fn test_in_memory_order_store() {
        let store = InMemoryOrderStore::new();
        let order = TenantedOrder::new(Tenant::Customer);

        store.insert(1, order).await.unwrap();
        let retrieved = store.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved, order);

        assert!(store.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = InMemoryOrderStore::new();
        store.insert(1, TenantedOrder::new(Tenant::Customer)).await.unwrap();

        let result = store.insert(1, TenantedOrder::new(Tenant::System)).await;
        assert!(matches!(result, Err(OrderError::DuplicateOrder(1))));
        assert_eq!(store.get(1).await.unwrap().unwrap().tenant(), Tenant::Customer);
    }

    #[tokio::test]
    async fn test_replace_is_compare_and_swap() {
        let store = InMemoryOrderStore::new();
        let order = TenantedOrder::new(Tenant::Customer);
        store.insert(1, order).await.unwrap();

        let placed = order.act(OrderAction::Place).unwrap();
        store.replace(1, order, placed).await.unwrap();

        // A second writer still holding the stale value loses
        let result = store.replace(1, order, placed).await;
        assert!(matches!(result, Err(OrderError::Conflict(1))));

        let result = store.replace(9, order, placed).await;
        assert!(matches!(result, Err(OrderError::UnknownOrder(9))));
    }

    #[tokio::test]
    async fn test_all_orders_sorted_by_id() {
        let store = InMemoryOrderStore::new();
        for id in [5, 1, 3] {
            store.insert(id, TenantedOrder::new(Tenant::Customer)).await.unwrap();
        }
        let ids: Vec<_> = store
            .all_orders()
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
