mod cmd;
mod host;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dtask", version, about = "Dated daily task entries for a Markdown vault")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Append today's entry to the month's task file
    Generate(GenerateArgs),

    /// Add today's entry by hand, warning when it already exists
    Add(AddArgs),

    /// Generate only if the auto-generate mode says today is due
    Auto(AutoArgs),

    /// Print the path of a day's task file
    Path(PathArgs),

    /// Show task statistics for a day's entry (yesterday by default)
    Stats(StatsArgs),

    /// Show, change or reset settings
    Settings(SettingsArgs),

    /// List the placeholders templates may use
    Variables,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generate for this day instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Open the task file in $EDITOR afterwards
    #[arg(long)]
    pub open: bool,

    /// Print nothing on success
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Add for this day instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Do not open the task file in $EDITOR
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Debug, Args)]
pub struct AutoArgs {
    /// Pretend today is this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Resolve for this day instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the file holding the previous day's entry
    #[arg(long)]
    pub yesterday: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Day whose entry is analyzed (YYYY-MM-DD); defaults to yesterday
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long, conflicts_with = "markdown")]
    pub json: bool,

    /// Print the Markdown block a generation would insert
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set one setting by its stored name (e.g. rootDir, autoGenerateMode)
    Set { key: String, value: String },

    /// Restore all defaults
    Reset,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Generate(args) => cmd::generate::run(config, profile, &args),
        Commands::Add(args) => cmd::add::run(config, profile, &args),
        Commands::Auto(args) => cmd::auto::run(config, profile, &args),
        Commands::Path(args) => cmd::path::run(config, profile, &args),
        Commands::Stats(args) => cmd::stats::run(config, profile, &args),
        Commands::Settings(args) => cmd::settings::run(config, profile, args),
        Commands::Variables => cmd::variables::run(),
    }
}
