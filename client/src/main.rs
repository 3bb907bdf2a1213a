//! `kitchen` command line client

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use kitchen_client::{ApiClient, parse_cards};
use shared::{PlayerId, ServiceId, SubmitRequest, logging};

#[derive(Parser, Debug)]
#[command(name = "kitchen")]
#[command(about = "Play Kitchen Impossible from the terminal")]
struct Args {
    /// Game server address (host:port or URL)
    #[arg(long, env = "KITCHEN_SERVER", default_value = "127.0.0.1:4000")]
    server: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KITCHEN_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server is running
    Ping,
    /// Join the game and print your id and hand
    Join { name: String },
    /// Show a player's hand
    Hand { player_id: String },
    /// Submit cards toward a course recipe
    Submit {
        #[arg(long)]
        player_id: String,
        /// Appetizer, Entree or Dessert
        #[arg(long)]
        course: String,
        /// Simple, Intermediate or Complex
        #[arg(long)]
        tier: String,
        /// Comma separated categories, e.g. Protein,Veggie
        #[arg(long)]
        cards: String,
    },
    /// List submissions for a round
    Round {
        #[arg(default_value_t = 1)]
        number: u32,
    },
    /// Show today's menu, or every tier with --full
    Menu {
        #[arg(long)]
        full: bool,
    },
    /// Print the game rules
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ServiceId::init_client();
    logging::init_tracing_with_level(Some(&args.log_level));

    let client = ApiClient::new(&args.server)?;

    match args.command {
        Command::Ping => print_json(&client.ping().await?)?,
        Command::Join { name } => print_json(&client.join(&name).await?)?,
        Command::Hand { player_id } => {
            let player_id = PlayerId::from_string(&player_id)?;
            print_json(&client.hand(&player_id).await?)?;
        }
        Command::Submit {
            player_id,
            course,
            tier,
            cards,
        } => {
            let player_id = PlayerId::from_string(&player_id)?;
            let cards = parse_cards(&cards)?;
            let request = SubmitRequest::new(player_id, &course, &tier, cards);
            print_json(&client.submit(&request).await?)?;
        }
        Command::Round { number } => print_json(&client.round(number).await?)?,
        Command::Menu { full: true } => print_json(&client.full_menu().await?)?,
        Command::Menu { full: false } => print_json(&client.current_menu().await?)?,
        Command::Rules => println!("{}", client.rules().await?.rules_text.trim()),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
