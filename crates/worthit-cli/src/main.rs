use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "worthit", version, about = "Is it worth the time to optimize a recurring task?")]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether an optimization pays off
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Render a number of seconds as a mix of work-calendar units
    Format(commands::format::FormatArgs),
    /// Convert a duration to seconds or a frequency to a per-second rate
    Normalize {
        #[command(subcommand)]
        action: commands::normalize::NormalizeAction,
    },
    /// List units and their length under the work calendar
    Units,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Format(args) => commands::format::run(args),
        Commands::Normalize { action } => commands::normalize::run(action),
        Commands::Units => commands::units::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "worthit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
