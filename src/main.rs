use clap::Parser;
use tracing::{error, info};

use palermo::config::Config;
use palermo::logging::init_logging;
use palermo::routes::configure_routes;
use palermo::store;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    init_logging(config.log_level, config.log_file.as_deref());

    let store_config = match config.store_config() {
        Ok(store_config) => store_config,
        Err(e) => {
            error!("Invalid store configuration: {}", e);
            std::process::exit(2);
        }
    };

    let store = match store::connect(store_config).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to initialize message store: {}", e);
            std::process::exit(1);
        }
    };

    let routes = configure_routes(store.clone());
    let addr = config.socket_addr();

    info!("Palermo server is listening on http://{}", addr);
    tokio::select! {
        _ = warp::serve(routes).run(addr) => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        }
    }

    store.close().await;
    info!("Palermo server stopped");
}
