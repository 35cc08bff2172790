use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use commands::{config, stats};
use movie_stats_config::{Config, PathManager};
use movie_stats_models::AveragePolicy;
use std::path::{Path, PathBuf};
use tracing::warn;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "moviestats")]
#[command(about = "MovieStats - Descriptive statistics over movie reviews")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Review file (JSON array). Defaults to data.reviews_file from the config
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// How averages are computed: exact or truncated (overrides config)
    #[arg(long, global = true, value_name = "POLICY")]
    average: Option<AveragePolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistics for one reviewer
    #[command(long_about = "Show a reviewer's review count, average grade, grade distribution and the movies they rated, most recent first.")]
    Reviewer {
        /// Reviewer ID
        id: i32,
    },
    /// Statistics for one movie
    #[command(long_about = "Show a movie's review count, average grade, grade distribution and its reviewers, most recent first.")]
    Movie {
        /// Movie ID
        id: i32,
    },
    /// Reviewers with the most reviews (all tied reviewers)
    Productive,
    /// Movies with the most top grades (all tied movies)
    TopGraded,
    /// Movies ranked by average grade
    #[command(long_about = "Rank movies by average grade, best first. Movies with equal averages keep the order in which they appear in the review file.")]
    TopRated {
        /// Number of movies to list (must be 1 or bigger; defaults to stats.default_top_amount)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<i32>,
    },
    /// Overview of the whole review file
    Summary {
        /// Number of top rated movies to include
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<i32>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let config_path = cli.config.clone().unwrap_or_else(|| path_manager.config_file());

    // A broken config file falls back to defaults so logging and output still
    // work; `config` subcommands can then replace it, the rest fail below.
    let (config, load_error) = match Config::load_or_default(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging with verbose level
    logging::init_logging(cli.verbose, cli.quiet, &config.logging).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    // Create output handler
    let output = output::Output::new(cli.output, cli.quiet);

    let result = match (cli.command, load_error) {
        (Commands::Config { cmd }, load_error) => {
            if let Some(e) = load_error {
                warn!("Ignoring unreadable config {}: {}", config_path.display(), e);
            }
            config::run_config(cmd.unwrap_or(ConfigCommands::Show), &config_path, &path_manager, &output)
        }
        (_, Some(e)) => Err(color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_path.display(), e)),
        (command, None) => {
            let options = stats::DataOptions {
                file: cli.file,
                average: cli.average,
            };
            run_stats(command, &options, &config, &config_path, &path_manager, &output)
        }
    };

    // JSON consumers get a structured error on stdout as well as the report on stderr
    if let Err(ref e) = result {
        if output.format() != output::OutputFormat::Human {
            output.error(format!("{:#}", e));
        }
    }
    result
}

fn run_stats(
    command: Commands,
    options: &stats::DataOptions,
    config: &Config,
    config_path: &Path,
    path_manager: &PathManager,
    output: &output::Output,
) -> color_eyre::Result<()> {
    config.validate()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))
        .wrap_err_with(|| format!("Invalid configuration in {}", config_path.display()))?;

    let service = stats::open_service(options, config, path_manager)?;
    let default_amount = config.stats.default_top_amount;

    match command {
        Commands::Reviewer { id } => stats::run_reviewer(&service, id, output),
        Commands::Movie { id } => stats::run_movie(&service, id, output),
        Commands::Productive => stats::run_productive(&service, output),
        Commands::TopGraded => stats::run_top_graded(&service, output),
        Commands::TopRated { amount } => stats::run_top_rated(&service, amount.unwrap_or(default_amount), output),
        Commands::Summary { amount } => stats::run_summary(&service, amount.unwrap_or(default_amount), output),
        Commands::Config { cmd } => {
            config::run_config(cmd.unwrap_or(ConfigCommands::Show), config_path, path_manager, output)
        }
    }
}
