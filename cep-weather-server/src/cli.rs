use clap::Parser;

/// Command-line arguments for the weather server.
#[derive(Debug, Parser)]
#[command(name = "cep-weather", version, about = "CEP to temperature HTTP service")]
pub struct Args {
    /// Listen port; overrides the PORT environment variable.
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose logging.
    #[arg(long)]
    pub verbose: bool,
}
