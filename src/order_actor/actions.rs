//! Custom actions for the Order actor.
//!
//! These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! and run against the menu catalog injected as the actor's context.

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Prices the order against the catalog without modifying it.
    Total,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Total(f64),
}
