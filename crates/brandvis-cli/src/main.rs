mod analyze;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brandvis")]
#[command(about = "Measure brand visibility in generative-AI answers")]
struct Cli {
    /// Brands file (defaults to BRANDVIS_BRANDS_PATH)
    #[arg(long, global = true)]
    brands: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze prompt/response pairs and print one JSON result per response
    Analyze {
        /// JSON array of `{"prompt": ..., "response": ...}` objects; `-` reads stdin
        responses: PathBuf,

        /// Country recorded on each result (defaults to BRANDVIS_DEFAULT_COUNTRY)
        #[arg(long)]
        country: Option<String>,
    },
    /// Print per-brand averages of visibility, position and sentiment
    Overview {
        /// JSON array of `{"prompt": ..., "response": ...}` objects; `-` reads stdin
        responses: PathBuf,

        #[arg(long)]
        country: Option<String>,
    },
    /// Show the aliases a name expands to
    Aliases { name: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = brandvis_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let brands_path = cli.brands.unwrap_or_else(|| config.brands_path.clone());

    match cli.command {
        Commands::Analyze { responses, country } => {
            let country = country.unwrap_or_else(|| config.default_country.clone());
            analyze::run_analyze(&brands_path, &responses, &country)
        }
        Commands::Overview { responses, country } => {
            let country = country.unwrap_or_else(|| config.default_country.clone());
            analyze::run_overview(&brands_path, &responses, &country)
        }
        Commands::Aliases { name } => {
            for alias in brandvis_analysis::generate_aliases(&name).iter() {
                println!("{alias}");
            }
            Ok(())
        }
    }
}
