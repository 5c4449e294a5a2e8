//! Order-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderBookClient;
use crate::framework::ResourceActor;
use crate::model::{MenuCatalog, Order};
use std::sync::Arc;

/// Creates a new Order actor and the order book client that drives it.
///
/// The actor must be started with the same catalog as its context.
pub fn new(catalog: Arc<MenuCatalog>, buffer_size: usize, tax_rate: f64) -> (ResourceActor<Order>, OrderBookClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderBookClient::new(generic_client, catalog, tax_rate);

    (actor, client)
}
