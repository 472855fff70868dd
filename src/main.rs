//! Storefront: demo users, orders and inventory API with a tracked hello
//! endpoint and cross-service dashboard aggregation.
//! Used by: binary entrypoint.

pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = config::Config::load();
    let state = state::build_state(&config)?;

    console::print_banner();
    console::print_startup(&config.bind_addr);
    tracing::info!("starting storefront on {}", config.bind_addr);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
