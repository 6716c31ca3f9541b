//! quizgrade CLI — review and grade quiz sessions from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "quizgrade", version, about = "Quiz scoring and review")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a completed quiz session
    Review {
        /// Path to a session snapshot JSON file
        #[arg(long)]
        session: PathBuf,

        /// Output format: text, json, markdown (default from config)
        #[arg(long)]
        format: Option<String>,

        /// Exit code 1 if the percentage is below this value
        #[arg(long)]
        fail_below: Option<f64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a raw quiz submission
    Grade {
        /// Path to a submission JSON file
        #[arg(long)]
        submission: PathBuf,

        /// Output format: text, json, markdown (default from config)
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a session snapshot for data problems
    Validate {
        /// Path to a session snapshot JSON file
        #[arg(long)]
        session: PathBuf,
    },

    /// Create starter config and example session
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgrade=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Review {
            session,
            format,
            fail_below,
            config,
        } => commands::review::execute(session, format, fail_below, config),
        Commands::Grade {
            submission,
            format,
            config,
        } => commands::grade::execute(submission, format, config),
        Commands::Validate { session } => commands::validate::execute(session),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
