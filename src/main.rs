use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use fontvote_application::prelude as flows;
use fontvote_core::usecases::NewFontParams;
use fontvote_db_sqlite::{run_embedded_database_migrations, Connections};

mod config;

#[derive(Parser)]
#[command(name = "fontvote", version, about = "Vote on fonts and theme an event flyer")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server (default)
    Serve,
    /// Add a font to the catalog
    AddFont {
        #[arg(long)]
        name: String,
        /// URL of the font stylesheet
        #[arg(long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = fontvote_webserver::Cfg {
                voting: cfg.voting,
                admin_password: cfg.admin.password,
                admin_session_ttl: cfg.admin.session_ttl,
            };
            let enable_cors = args.enable_cors || cfg.webserver.enable_cors;
            fontvote_webserver::run(
                connections,
                enable_cors,
                web_cfg,
                env!("CARGO_PKG_VERSION"),
            )
            .await;
        }
        Command::AddFont { name, url } => {
            let font = flows::add_font(&connections, NewFontParams { name, url })?;
            log::info!("Added font '{}' with id {}", font.name, font.id);
        }
    }
    Ok(())
}
