use clap::Parser;

#[derive(Parser)]
#[command(name = "wego")]
#[command(about = "Find travel destinations: photos and short descriptions in one list.")]
#[command(version)]
pub struct Cli {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Show the gallery and full description of one destination
    #[arg(short = 'd', long)]
    pub details: bool,

    /// List the curated destinations
    #[arg(short = 'f', long)]
    pub featured: bool,

    /// Read keywords from stdin, one per line, with debouncing
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Destination to search for
    #[arg(num_args = 1..)]
    pub query: Vec<String>,
}
