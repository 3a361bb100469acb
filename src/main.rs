use vantage::server::{self, config::Config, model::app::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = server::startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    let router = server::router::routes().with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, router)
        .await
        .expect("Server error");
}
