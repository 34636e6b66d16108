mod clipboard;
mod commands;
mod render;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings::Settings;

const DEFAULT_LOG_FILTER: &str = "deworm=warn,deworm_core=warn";
const VERBOSE_DIRECTIVES: [&str; 2] = ["deworm=debug", "deworm_core=debug"];

#[derive(Parser)]
#[command(name = "deworm")]
#[command(about = "Work out when you are next due to deworm and add it to your calendar")]
struct Cli {
    /// Log debug output to stderr (applied on top of RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the next due date
    Next {
        /// When you last dewormed (e.g., "2025-01-15" or "3 months ago")
        date: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a calendar reminder (.ics) for the next due date
    Export {
        /// When you last dewormed
        date: String,

        /// Directory to save deworm-reminder.ics in (defaults to output_dir from config)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<String>,

        /// Print the calendar file instead of saving it
        #[arg(long)]
        stdout: bool,
    },
    /// Copy a one-line reminder to the clipboard
    Copy {
        /// When you last dewormed
        date: String,
    },
    /// Show the due date stored in an exported reminder
    Show {
        /// Path to a .ics file
        file: String,
    },
    /// Step through the calculation with prompts (the default)
    Interactive,
    /// Show the config file location, creating a template if missing
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Commands::Config = command {
        return commands::config::run();
    }

    let settings = Settings::load()?;

    match command {
        Commands::Next { date, json } => commands::next::run(&settings, &date, json),
        Commands::Export {
            date,
            output,
            stdout,
        } => commands::export::run(&settings, &date, output.as_deref(), stdout),
        Commands::Copy { date } => commands::copy::run(&settings, &date),
        Commands::Show { file } => commands::show::run(&settings, &file),
        Commands::Interactive => commands::interactive::run(&settings),
        Commands::Config => commands::config::run(),
    }
}

/// Logs go to stderr so stdout stays clean for `--json` and `--stdout`.
fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref(), verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// `RUST_LOG` (or the quiet default) with `-v` raising deworm's own crates
/// to debug on top.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let mut filter = EnvFilter::new(rust_log.unwrap_or(DEFAULT_LOG_FILTER));

    if verbose {
        for directive in VERBOSE_DIRECTIVES {
            match directive.parse::<Directive>() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(e) => eprintln!("Invalid log directive {directive}: {e}"),
            }
        }
    }

    filter
}
