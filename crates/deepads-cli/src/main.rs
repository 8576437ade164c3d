mod analyze;
mod generate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::{run_analyze, AnalyzeArgs};
use crate::generate::{run_generate, GenerateArgs};

#[derive(Debug, Parser)]
#[command(name = "deepads")]
#[command(about = "Template-driven ad copy from product descriptions and customer language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Mine keywords, pains, desires, and objections from voice-of-customer text
    Analyze(AnalyzeArgs),
    /// Generate one ad variant per copywriting framework
    Generate(GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    let config = deepads_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("request", %request_id, env = %config.env);
    let _entered = span.enter();

    match cli.command {
        Commands::Analyze(args) => run_analyze(&config, &args),
        Commands::Generate(args) => run_generate(&config, &args),
    }
}
