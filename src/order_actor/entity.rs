//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be owned by the generic [`crate::framework::ResourceActor`].
//!
//! The actor context is the shared [`MenuCatalog`], so orders can price
//! themselves without reaching for global state.

use std::sync::Arc;
use async_trait::async_trait;
use crate::framework::ActorEntity;
use crate::model::{MenuCatalog, Order, OrderUpdate};
use super::actions::{OrderAction, OrderActionResult};

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type CreateParams = Order;
    type UpdateParams = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<MenuCatalog>;

    fn id(&self) -> &String {
        &self.id
    }

    /// Orders are assembled by the caller, so the payload is the order itself.
    fn from_create_params(params: Order) -> Result<Self, String> {
        Ok(params)
    }

    /// Rejects orders that cannot enter the active sequence.
    ///
    /// Unknown item ids are accepted; they are skipped when the order is priced.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        if self.table_number == 0 {
            return Err("table number must be positive".to_string());
        }
        if self.is_empty() {
            return Err("order has no items".to_string());
        }
        if let Some((id, _)) = self.line_items.iter().find(|(_, qty)| **qty == 0) {
            return Err(format!("item {id} has zero quantity"));
        }
        Ok(())
    }

    /// Moves the order to the requested status.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &Self::Context) -> Result<(), String> {
        self.status = self.status.transition(update.status)?;
        Ok(())
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `Total`: Returns the catalog price of the order
    async fn handle_action(&mut self, action: OrderAction, ctx: &Self::Context) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::Total => Ok(OrderActionResult::Total(self.total(ctx))),
        }
    }
}
