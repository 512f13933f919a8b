use tracing_subscriber::EnvFilter;

use bus_server::config::ServerConfig;
use bus_server::table::StopTable;
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load once; a missing file leaves the table empty.
    let table = StopTable::load(&config.data_path).into_table();
    let overview = table.list_overview();
    tracing::info!(
        records = table.len(),
        stops = overview.stop_names.len(),
        routes = overview.route_numbers.len(),
        "stop table ready"
    );

    let state = AppState::new(table);
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    tracing::info!("Bus Route Finder listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
