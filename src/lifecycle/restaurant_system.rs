use std::sync::Arc;
use tracing::{error, info};
use crate::clients::OrderBookClient;
use crate::model::MenuCatalog;
use super::config::SystemConfig;

/// The application state for one running session.
///
/// `RestaurantSystem` is responsible for:
/// - **State Ownership**: The menu catalog and the order actor that owns the active orders
/// - **Lifecycle Management**: Starting the order actor and stopping it on shutdown
/// - **Dependency Wiring**: Injecting the catalog into the actor as its context
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(SystemConfig::default());
///
/// let placement = system.order_book.place(order).await?;
/// let bill = system.order_book.close_and_bill(1).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// The fixed menu shared with the order actor
    pub catalog: Arc<MenuCatalog>,

    /// Client for the active order sequence
    pub order_book: OrderBookClient,

    pub config: SystemConfig,

    /// Task handle of the order actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RestaurantSystem {
    /// Builds the house catalog and spawns the order actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        Self::with_catalog(MenuCatalog::initialize(), config)
    }

    pub fn with_catalog(catalog: MenuCatalog, config: SystemConfig) -> Self {
        let catalog = Arc::new(catalog);
        let (order_actor, order_book) =
            crate::order_actor::new(catalog.clone(), config.mailbox_size, config.tax_rate);

        // The actor prices orders against the same catalog the session displays
        let handle = tokio::spawn(order_actor.run(catalog.clone()));
        info!(menu_items = catalog.len(), "Restaurant system started");

        Self {
            catalog,
            order_book,
            config,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the last client closes the actor's channel, so every clone of
    /// the order book handed out (e.g. to a session) must be dropped first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_book);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
