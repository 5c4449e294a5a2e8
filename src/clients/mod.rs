//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod order_book_client;

pub use actor_client::ActorClient;
pub use order_book_client::*;
