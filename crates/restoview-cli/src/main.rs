//! Restoview CLI
//!
//! Command-line interface over the restaurant review store

use clap::{Parser, Subcommand, ValueEnum};
use restoview_core::errors::ExError;
use restoview_core::logging_facility::{self, Profile};
use restoview_core::restoview_core_types::RequestId;
use restoview_store::db::DEFAULT_DB_PATH;
use restoview_store::StoreConfig;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "restoview")]
#[command(about = "Restoview - restaurants, customers and their reviews", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "RESTOVIEW_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogMode::Off)]
    log: LogMode,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    Off,
    Dev,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database tables if they do not exist
    Init,
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Restaurant queries and edits
    Restaurant(commands::restaurant::RestaurantArgs),
    /// Customer queries and review edits
    Customer(commands::customer::CustomerArgs),
    /// Review lookups
    Review(commands::review::ReviewArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogMode::Off => {}
        LogMode::Dev => logging_facility::init(Profile::Development),
        LogMode::Json => logging_facility::init(Profile::Production),
    }

    let request_id = RequestId::new();
    let span = tracing::info_span!("restoview", request_id = %request_id);
    let _guard = span.enter();

    let ctx = commands::Context {
        config: StoreConfig::new(cli.db),
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(&ctx),
        Commands::Seed(args) => commands::seed::execute(args, &ctx),
        Commands::Restaurant(args) => commands::restaurant::execute(args, &ctx),
        Commands::Customer(args) => commands::customer::execute(args, &ctx),
        Commands::Review(args) => commands::review::execute(args, &ctx),
    };

    if let Err(e) = result {
        match e.downcast::<ExError>() {
            Ok(ex) => eprintln!("Error: {}", (*ex).with_request_id(request_id)),
            Err(other) => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}
