//! Pure data structures for the menu, orders and bills.
//!
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait
//! (see [`crate::order_actor`]).

pub mod bill;
pub mod menu;
pub mod order;

pub use bill::*;
pub use menu::*;
pub use order::*;
