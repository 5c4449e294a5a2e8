//! Console entry point: wires the restaurant system to stdin/stdout.

use restaurant_manager::lifecycle::tracing::setup_tracing;
use restaurant_manager::lifecycle::{RestaurantSystem, SystemConfig};
use restaurant_manager::session::Session;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = RestaurantSystem::new(SystemConfig::default());
    info!(config = ?system.config, "Starting restaurant manager");

    let session = Session::new(
        system.order_book.clone(),
        system.config.currency.clone(),
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    let outcome = session.run().await;

    system.shutdown().await?;

    outcome.map_err(|e| {
        error!(error = %e, "Session failed");
        e.to_string()
    })
}
