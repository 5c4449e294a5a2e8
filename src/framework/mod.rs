//! Generic actor framework for single-writer resource management.
//!
//! This module provides the building blocks that own the active order sequence:
//! a typed actor that manages entities with CRUD operations and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns an insertion-ordered entity store
//! - [`ResourceClient`] - Typed handle used to send requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
