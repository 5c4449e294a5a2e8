//! Error types for the order book.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The 1-based position does not name an active order.
    #[error("Invalid order number {0}.")]
    InvalidOrderNumber(i64),

    /// The requested status is not a valid target.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// The order was rejected when it was placed.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl OrderError {
    /// Whether the error came from user input rather than a broken order book.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, OrderError::ActorCommunicationError(_))
    }
}
