//! quizsheet CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizsheet",
    version,
    about = "Quiz answer-sheet parser and collator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one answer sheet and print its answer vector
    Parse {
        /// Path to the answer sheet
        #[arg(long)]
        file: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Block scan strategy: indexed, sequential
        #[arg(long)]
        strategy: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Parse an answer sheet and write its encoded vector file
    Write {
        /// Path to the answer sheet
        #[arg(long)]
        file: PathBuf,

        /// Respondent index used to name the output file
        #[arg(long)]
        index: u32,

        /// Output directory
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Block scan strategy: indexed, sequential
        #[arg(long)]
        strategy: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Download one respondent's sheet from a share link
    Fetch {
        /// Share link of the sheet
        #[arg(long)]
        link: String,

        /// Respondent index used to name the saved file
        #[arg(long)]
        index: u32,

        /// Destination directory (default: configured data_dir)
        #[arg(long)]
        dest: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Collate every respondent sheet in a directory
    Collate {
        /// Directory holding answers_respondent_*.txt (default: configured data_dir)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// File order: numeric, lexicographic
        #[arg(long)]
        sort: Option<String>,

        /// Block scan strategy: indexed, sequential
        #[arg(long)]
        strategy: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizsheet=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            file,
            format,
            strategy,
            config,
        } => commands::parse::execute(file, format, strategy, config),
        Commands::Write {
            file,
            index,
            out_dir,
            strategy,
            config,
        } => commands::write::execute(file, index, out_dir, strategy, config),
        Commands::Fetch {
            link,
            index,
            dest,
            config,
        } => commands::fetch::execute(link, index, dest, config).await,
        Commands::Collate {
            dir,
            sort,
            strategy,
            config,
        } => commands::collate::execute(dir, sort, strategy, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
