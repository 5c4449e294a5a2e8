//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Log levels** come from the `RUST_LOG` environment variable; with it unset
//!   only errors are shown.
//! - **Compact format** without the module prefix (`with_target(false)`).
//! - **stderr only**: stdout belongs to the interactive menu, so log lines never
//!   interleave with prompts when output is piped.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Order Operations**: Create, List, Update, Delete, and the `Total` action
//! - **Client Calls**: `#[instrument]` spans on the order book client
//! - **Session**: Menu choices and rejected input at debug level
//!
//! ## Usage Examples
//!
//! ```bash
//! # Order lifecycle events
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every rejected input line
//! RUST_LOG=debug cargo run 2>session.log
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=3f9a1c2e size=1
//! INFO place: Order placed order_id="3f9a1c2e" total=180.0
//! INFO Deleted entity_type="Order" id=3f9a1c2e size=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .with_writer(std::io::stderr)
        .compact() // Compact format shows spans inline (e.g., "place: Order placed")
        .init();
}
