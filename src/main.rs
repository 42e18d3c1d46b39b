use clap::{Parser, Subcommand};
use configuration::{load_config, ServerArgs};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the albums service.
#[tokio::main]
async fn main() {
    // DB_CONN may come from a .env file; a missing file is not an error.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialise logging: {e}");
        std::process::exit(1);
    }

    match cli.command {
        Commands::Serve(args) => {
            if let Err(e) = handle_serve(args).await {
                eprintln!("{e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small JSON-over-HTTP service for the `album` table.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the database and serve the album routes until ctrl-c.
    Serve(ServerArgs),
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Loads settings, then hands over to the web server. Any error returned from
/// here, including a failed connect or ping, ends the process with status 1.
async fn handle_serve(args: ServerArgs) -> anyhow::Result<()> {
    let mut settings = load_config(args.config.as_deref())?;
    settings.apply_args(&args);
    configuration::validate(&settings)?;

    web_server::run_server(settings, web_server::shutdown_signal()).await
}
