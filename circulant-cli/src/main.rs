//! Circulant CLI - Turn a text matrix into its block-circulant average.

use clap::Parser;
use tracing::Level;

mod common;
mod config;
mod transform;

#[derive(Parser)]
#[command(name = "circulant")]
#[command(about = "Average k-row blocks along cyclic diagonals and expand them into circulant blocks")]
struct Cli {
    /// Path to the input matrix (`M N` followed by M*N values)
    #[arg(required_unless_present = "generate_config")]
    input: Option<String>,

    /// Path for the output matrix (created or overwritten)
    #[arg(required_unless_present = "generate_config")]
    output: Option<String>,

    /// Block size; must evenly divide both matrix dimensions
    #[arg(required_unless_present = "generate_config")]
    k: Option<usize>,

    /// Path to transform config JSON (optional)
    #[arg(short, long)]
    config: Option<String>,

    /// Generate a template config instead of transforming
    #[arg(long)]
    generate_config: bool,

    /// Log progress details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if cli.generate_config {
        return transform::generate_config_template();
    }

    match (cli.input, cli.output, cli.k) {
        (Some(input), Some(output), Some(k)) => {
            transform::run(&input, &output, k, cli.config.as_deref())
        }
        _ => anyhow::bail!("Usage: circulant <INPUT> <OUTPUT> <K>"),
    }
}
