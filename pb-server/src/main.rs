use pb_relay::{
    AppState, BroadcastRelay, ConnectionConfig, ConnectionLimits, ConnectionRegistry, EventRouter,
    Metrics, ShutdownCoordinator,
};
use pb_server::{ServerError, build_router, logger};

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("pb-server failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Load and validate configuration
    let config = pb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, &pb_config::Config::config_dir()?)?;

    info!("Starting pb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Create connection registry with limits
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });
    let registry_for_idle = registry.clone();

    // Create metrics collector
    let metrics = Metrics::new();

    // Create shutdown coordinator
    let shutdown = ShutdownCoordinator::new();

    // Create connection config for pb-relay
    let connection_config = ConnectionConfig {
        send_buffer_size: config.websocket.send_buffer_size,
        idle_timeout_secs: config.websocket.idle_timeout_secs,
    };

    // Build application state
    let app_state = AppState {
        relay: BroadcastRelay::new(registry, EventRouter::new(), metrics.clone()),
        metrics,
        shutdown: shutdown.clone(),
        config: connection_config,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Idle shutdown monitoring (when configured)
    if config.server.idle_shutdown_secs > 0 {
        let idle_timeout = config.server.idle_shutdown_secs;
        let shutdown_for_idle = shutdown.clone();

        info!("Idle shutdown enabled: {}s timeout", idle_timeout);

        tokio::spawn(async move {
            let grace_period = idle_timeout.min(60);
            info!("Idle shutdown grace period: {}s", grace_period);
            tokio::time::sleep(std::time::Duration::from_secs(grace_period)).await;

            let check_interval = (idle_timeout / 2).max(10);

            loop {
                tokio::time::sleep(std::time::Duration::from_secs(check_interval)).await;

                if registry_for_idle.total_count().await == 0 {
                    info!(
                        "No active connections, checking again in {}s...",
                        check_interval
                    );

                    tokio::time::sleep(std::time::Duration::from_secs(check_interval)).await;

                    if registry_for_idle.total_count().await == 0 {
                        warn!(
                            "No connections for {}s, initiating auto-shutdown",
                            idle_timeout
                        );
                        shutdown_for_idle.shutdown();
                        break;
                    } else {
                        info!("Connection established, continuing...");
                    }
                }
            }
        });
    }

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
