mod output;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "tyrecmp-cli")]
#[command(about = "Compare tyre offers across vendor portals")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the vendor portals that can be searched
    Sites,
    /// Search offers for a tyre size and print them sorted by price
    Search(SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tyrecmp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Sites) => {
            for line in output::render_sites(tyrecmp_core::list_vendors()) {
                println!("{line}");
            }
        }
        Some(Commands::Search(args)) => search::run_search(&config, &args).await?,
        None => println!("no command given; try `tyrecmp-cli search --help`"),
    }

    Ok(())
}
