use clap::Parser;

/// Lantern — a minimal webview browser shell.
#[derive(Parser, Debug)]
#[command(name = "lantern", version, about)]
pub struct Args {
    /// URL or address to open instead of the configured homepage.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. debug, lantern=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
