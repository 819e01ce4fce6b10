mod commands;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chronoface",
    version,
    about = "A dual time zone watchface for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the watchface once
    Show(ShowArgs),
    /// Redraw the watchface on every minute (or second) boundary
    Watch(WatchArgs),
    /// Create the default configuration file
    Init,
    /// Check the configuration and logging setup
    Doctor,
}

#[derive(Args)]
struct OffsetArgs {
    /// Foreign time offset from UTC in whole hours (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i32>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    clock: OffsetArgs,
    /// Format this RFC 3339 instant instead of the current time;
    /// its UTC offset is used as the local zone
    #[arg(long, value_name = "RFC3339")]
    at: Option<String>,
    /// Print the four fields as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    clock: OffsetArgs,
    /// Redraw interval: "minute" or "second" (overrides config)
    #[arg(long)]
    granularity: Option<String>,
    /// Stop after this many timed redraws
    #[arg(long)]
    ticks: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => commands::show::execute(&args),
        Commands::Watch(args) => commands::watch::execute(&args),
        Commands::Init => commands::init::execute(),
        Commands::Doctor => commands::doctor::execute(),
    }
}
