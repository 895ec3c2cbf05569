pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod models;
pub mod services;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use clients::TmdbClient;
pub use config::Config;
use db::Store;
use models::{RecordInput, RecordPatch};
use services::{AddOptions, TrackerService};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    init_tracing(&config.general.log_level);

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    if matches!(command, Commands::Init) {
        if Config::create_default_if_missing()? {
            println!("✓ Config file created. Edit config.toml and run again.");
        } else {
            println!("config.toml already exists.");
        }
        return Ok(());
    }

    let service = build_service(&config, cli.api_key.as_deref());

    match command {
        Commands::List { category } => cli::cmd_list(&service, category),

        Commands::Add {
            title,
            category,
            rating,
            comment,
            parts,
            series,
        } => {
            let input = RecordInput {
                title: cli::join_words(&title),
                rating,
                comment,
                parts,
            };
            let options = AddOptions {
                force_series: series,
            };
            cli::cmd_add(&service, category, input, options)
                .await
                .context("Failed to add title")
        }

        Commands::Update {
            title,
            category,
            rating,
            comment,
            parts,
        } => {
            let patch = RecordPatch {
                rating,
                comment,
                parts,
            };
            cli::cmd_update(&service, category, &cli::join_words(&title), patch)
        }

        Commands::Remove { title } => cli::cmd_remove(&service, &cli::join_words(&title)),

        Commands::Stats => cli::cmd_stats(&service),

        Commands::Recommend => cli::cmd_recommend(&service),

        Commands::Search { query } => cli::cmd_search(&service, &cli::join_words(&query)),

        Commands::Init => Ok(()),
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_service(config: &Config, session_key: Option<&str>) -> TrackerService {
    let store = Store::new(&config.general.store_path)
        .with_persistence_notice(config.general.persistence_notice);

    let lookup_config = config.lookup_config(session_key);
    if lookup_config.key().is_none() {
        debug!("TMDB enrichment disabled: no API key");
    }

    let transport = TmdbClient::with_options(
        &config.tmdb.base_url,
        Some(config.tmdb.request_timeout()),
    );

    TrackerService::new(store, transport, lookup_config)
}

fn print_help() {
    println!("MovieTracker - your personal movie archive");
    println!();
    println!("USAGE:");
    println!("  movietracker [--config <path>] [--api-key <key>] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("  list, ls [-c <category>]   Show tracked titles, highest rated first");
    println!("  add <title> [options]      Add a title (or update it if already tracked)");
    println!("  update <title> [options]   Change rating, comment or parts");
    println!("  remove, rm <title>         Delete a title from every category");
    println!("  stats                      Totals, average rating and top genre");
    println!("  recommend                  Show recommendations");
    println!("  search <query>             Find titles by name or genre");
    println!("  init                       Create default config file");
    println!();
    println!("EXAMPLES:");
    println!("  movietracker add \"Interstellar\" -r 9");
    println!("  movietracker add \"Dark\" -c series -r 8 --comment \"rewatch\"");
    println!("  movietracker update \"Dark\" -c series -p 3");
    println!("  movietracker search comedy");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to set the store path and TMDB settings.");
    println!("  Set TMDB_API_KEY (or tmdb.api_key) to enable year/genre lookup.");
}
