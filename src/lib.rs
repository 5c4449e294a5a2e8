//! # Restaurant Manager
//!
//! > **An interactive console for a restaurant's menu and open orders.**
//!
//! One running session keeps a fixed menu catalog and the orders of the tables
//! currently being served: orders are placed item by item, move through
//! `PENDING → PREPARING → COMPLETE`, and are closed with a printed bill that
//! adds an 8% flat tax. Everything lives in memory for the length of the session.
//!
//! ## 🏗️ Design
//!
//! ### Single Writer
//! The active order sequence is owned by one [`ResourceActor`](framework::ResourceActor)
//! task. The session never touches the orders directly; it sends requests
//! through an [`OrderBookClient`](clients::OrderBookClient) and the actor applies
//! them one at a time. The catalog is injected into the actor as its context,
//! so there is no global state.
//!
//! ### Type-Safe Error Handling
//! Every layer has its own error enum: [`FrameworkError`](framework::FrameworkError)
//! for the actor plumbing, [`OrderError`](order_actor::OrderError) for the order
//! book, [`InputError`](session::input::InputError) for bad user input and
//! [`SessionError`](session::SessionError) for the failures that end a session.
//! Bad input is reported and the menu carries on.
//!
//! ### Observability
//! `tracing` spans and events cover the actor lifecycle and every order book
//! call. Logs go to stderr; see [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: menu items, orders, summaries and bills.
//! - [`framework`]: the generic actor, client and test mock.
//! - [`order_actor`]: how an [`Order`](model::Order) behaves inside the actor.
//! - [`clients`]: the order book operations addressed by 1-based position.
//! - [`lifecycle`]: configuration, startup/shutdown and tracing setup.
//! - [`session`]: the text-menu state machine, input parsing and rendering.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//!
//! # With order lifecycle logs on stderr
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod session;
