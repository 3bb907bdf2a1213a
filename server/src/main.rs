//! Game server entry point

use clap::Parser;
use shared::{ServiceId, logging, process_info};
use tokio::signal;

use kitchen_server::{
    GameConfig, GameServer, RealRandomSource, ServerConfig, ServerResult,
    config::{DEFAULT_COPIES_PER_CATEGORY, DEFAULT_HAND_SIZE, DEFAULT_PORT},
};

/// Command line arguments, each overridable from the environment or a .env file
#[derive(Parser, Debug)]
#[command(name = "kitchen-server")]
#[command(about = "Kitchen Impossible card game server")]
struct Args {
    /// Interface to bind
    #[arg(long, env = "KITCHEN_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port for HTTP server
    #[arg(long, env = "KITCHEN_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KITCHEN_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Cards dealt to each joining player
    #[arg(long, env = "KITCHEN_HAND_SIZE", default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Copies of each ingredient category in a fresh deck
    #[arg(long, env = "KITCHEN_COPIES_PER_CATEGORY", default_value_t = DEFAULT_COPIES_PER_CATEGORY)]
    copies_per_category: usize,

    /// Seed for reproducible deals and menus
    #[arg(long, env = "KITCHEN_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ServiceId::init_server();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ServiceId::current(), "Kitchen Impossible game server");

    let game = GameConfig::new(args.hand_size, args.copies_per_category)?;
    let config = ServerConfig::new(&args.host, args.port, game, args.seed)?;

    let rng = match config.seed {
        Some(seed) => {
            process_info!(ServiceId::current(), "🎲 Using fixed seed {}", seed);
            RealRandomSource::seeded(seed)
        }
        None => RealRandomSource::from_entropy(),
    };

    let mut server = GameServer::new(&config, rng);

    // Set up graceful shutdown
    let shutdown_sender = server.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(ServiceId::current(), "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(ServiceId::current(), "Signal handling", &err);
            }
        }
    });

    server.run().await?;

    logging::log_success(ServiceId::current(), "Game server stopped gracefully");
    Ok(())
}
