use std::sync::Arc;
use tokio::signal;
use tracing::info;

use wordgame_persistence::connection::connect_and_migrate;
use wordgame_persistence::repositories::{ScoreRepository, WordRepository};
use wordgame_server::{config::Config, create_routes, seed::seed_initial_words};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting word game server...");

    let config = Config::new();

    // Connect to the database and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    let word_repository = Arc::new(WordRepository::new(db.clone()));
    let score_repository = Arc::new(ScoreRepository::new(db));

    // Make a fresh install playable out of the box
    if let Err(e) = seed_initial_words(&word_repository).await {
        tracing::error!("Failed to seed starter words: {}", e);
        std::process::exit(1);
    }

    let routes = create_routes(
        word_repository,
        score_repository,
        config.leaderboard_limit,
    );

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        match config.host.parse::<std::net::IpAddr>() {
            Ok(host) => host,
            Err(e) => {
                tracing::error!("Invalid HOST {:?}: {}", config.host, e);
                std::process::exit(1);
            }
        },
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
