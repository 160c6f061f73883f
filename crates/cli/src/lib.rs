pub mod commands;
pub mod presenter;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stackquiz_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "stackquiz",
    about = "Supplement stack questionnaire",
    long_about = "Walk the 12-question supplement quiz, score a profile, and inspect the recommendation engine configuration.",
    after_help = "Examples:\n  stackquiz take --script answers.txt\n  stackquiz recommend --answer workoutFreq=daily --answer budget=premium --json\n  stackquiz questions\n  stackquiz config"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a stackquiz.toml config file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Run a quiz session from input events (`select <n> <value>`, `next`, `back`, `restart`)"
    )]
    Take {
        #[arg(long, help = "Read events from this file instead of stdin")]
        script: Option<PathBuf>,
        #[arg(long, help = "Require an explicit `next` after every selection")]
        no_auto_advance: bool,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Score answers given directly and print the recommended bundle")]
    Recommend {
        #[arg(
            long = "answer",
            value_name = "FIELD=VALUE",
            help = "Answer by profile field or question number, e.g. `budget=premium` or `10=premium`"
        )]
        answers: Vec<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List the questions and the profile field each one captures")]
    Questions,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = LoadOptions { config_path: cli.config.clone(), ..LoadOptions::default() };

    init_logging(AppConfig::load(options.clone()).ok().as_ref());

    let result = match cli.command {
        Command::Take { script, no_auto_advance, json } => commands::take::run(
            &options,
            &commands::take::TakeOptions {
                script,
                auto_advance: no_auto_advance.then_some(false),
                json,
            },
        ),
        Command::Recommend { answers, json } => commands::recommend::run(&options, &answers, json),
        Command::Questions => commands::CommandResult::ok(commands::questions::run()),
        Command::Config => commands::config::run(&options),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so command output on stdout stays parseable.
fn init_logging(config: Option<&AppConfig>) {
    use stackquiz_core::config::LogFormat::*;
    use tracing::Level;

    let default = AppConfig::default();
    let config = config.unwrap_or(&default);
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    let _ = match config.logging.format {
        Compact => builder.compact().try_init(),
        Pretty => builder.pretty().try_init(),
        Json => builder.json().try_init(),
    };
}
