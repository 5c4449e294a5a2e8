use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Bill, MenuCatalog, Order, OrderStatus, OrderSummary, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Outcome of handing an assembled order to the book.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// The order joined the active sequence.
    Placed { order_id: String, total: f64 },
    /// The order had no items and was discarded.
    Cancelled,
}

/// Client for the order book: the insertion-ordered sequence of active orders
/// owned by the Order actor.
///
/// Orders are addressed by their 1-based position in the sequence at call
/// time. Each call resolves the position against a fresh listing and then
/// talks to the actor by order id.
#[derive(Clone)]
pub struct OrderBookClient {
    inner: ResourceClient<Order>,
    catalog: Arc<MenuCatalog>,
    tax_rate: f64,
}

impl OrderBookClient {
    pub fn new(inner: ResourceClient<Order>, catalog: Arc<MenuCatalog>, tax_rate: f64) -> Self {
        Self { inner, catalog, tax_rate }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Appends `order` to the active sequence and prices it.
    ///
    /// An order without items is discarded and reported as
    /// [`Placement::Cancelled`]; that is not an error.
    #[instrument(skip(self, order), fields(order_id = %order.id, table = order.table_number))]
    pub async fn place(&self, order: Order) -> Result<Placement, OrderError> {
        debug!(?order, "place called");
        if order.is_empty() {
            info!("Order has no items, discarding");
            return Ok(Placement::Cancelled);
        }

        let order_id = self.inner.create(order).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => OrderError::Rejected(msg),
            other => Self::map_error(other),
        })?;

        let total = match self
            .inner
            .perform_action(order_id.clone(), OrderAction::Total)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Total(total) => total,
        };
        info!(%order_id, total, "Order placed");
        Ok(Placement::Placed { order_id, total })
    }

    /// Summaries of every active order, in creation order.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<OrderSummary>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .iter()
            .enumerate()
            .map(|(index, order)| OrderSummary::of(index + 1, order, &self.catalog))
            .collect())
    }

    /// Sets the status of the order at `position`.
    ///
    /// Nothing changes when the position is invalid or the order cannot move
    /// to `status`.
    #[instrument(skip(self))]
    pub async fn update_status(&self, position: i64, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self.resolve(position).await?;

        let updated = self
            .inner
            .update(order.id.clone(), OrderUpdate { status })
            .await
            .map_err(|e| match e {
                FrameworkError::Custom(msg) => OrderError::InvalidStatus(msg),
                other => Self::map_error(other),
            })?;
        info!(order_id = %updated.id, status = %updated.status, "Status updated");
        Ok(updated)
    }

    /// Removes the order at `position` from the active sequence and bills it.
    ///
    /// The order is dropped once the bill is built. On an invalid position the
    /// sequence is left untouched.
    #[instrument(skip(self))]
    pub async fn close_and_bill(&self, position: i64) -> Result<Bill, OrderError> {
        let order = self.resolve(position).await?;
        let closed = self.inner.delete(order.id).await.map_err(Self::map_error)?;

        let bill = Bill::for_order(&closed, &self.catalog, self.tax_rate);
        info!(order_id = %bill.order_id, total = bill.total, "Order closed");
        Ok(bill)
    }

    async fn resolve(&self, position: i64) -> Result<Order, OrderError> {
        let mut orders = self.list().await?;
        match usize::try_from(position) {
            Ok(p) if (1..=orders.len()).contains(&p) => Ok(orders.swap_remove(p - 1)),
            _ => {
                warn!(position, active = orders.len(), "Invalid order number");
                Err(OrderError::InvalidOrderNumber(position))
            }
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderBookClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
