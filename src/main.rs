// src/main.rs

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use repo::config::expand_tilde;
use repo::repository::{RepoTools, TerminalPrompt};
use repo::{Config, Repository, Status};
use std::process::ExitCode;
use tracing::{error, info};

const LONG_ABOUT: &str = "Manage local pacman repositories.

In all commands, <NAME> is the name of the package without anything else:
pacman, and not pacman-3.5.3-1-i686.pkg.tar.xz.

Note: without --noconfirm, deleting files asks on the terminal and
deletes nothing when there is none, so scripted runs must pass --noconfirm.";

#[derive(Parser)]
#[command(name = "repo")]
#[command(author, version, about = "Manage local pacman repositories", long_about = LONG_ABOUT)]
struct Cli {
    /// Don't delete any files, only update the database
    #[arg(short, long, global = true)]
    soft: bool,

    /// Don't ask before deleting files, just do it
    #[arg(short = 'y', long, global = true)]
    noconfirm: bool,

    /// Alternate configuration file (default: ~/.repo.conf)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<String>,

    /// Tell me more
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the newest file of each package to the database, deleting older files
    Add {
        /// Package names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove packages from the database and delete their files
    Remove {
        /// Package names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Add every package whose files changed since the database was updated
    Update,
    /// List the packages in the repository directory
    List,
    /// Compare packages in the database to upstream (not implemented)
    Sync,
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match run(cli) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Cannot continue, exiting.");
            ExitCode::from(Status::SYSTEM.code())
        }
    }
}

fn run(cli: Cli) -> Result<Status> {
    let command = match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "repo", &mut std::io::stdout());
            return Ok(Status::OK);
        }
        Some(command) => command,
        None => {
            // No command provided, show help
            println!("repo v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'repo --help' for usage information");
            return Ok(Status::OK);
        }
    };

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::default_path);
    info!("Using configuration file: {}", config_path.display());

    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    println!("Using database: {}", config.db_path().display());

    let tools = RepoTools::from_config(&config);
    let prompt = TerminalPrompt::new(cli.noconfirm);
    let mut repo = Repository::new(config, tools, prompt)?.with_soft(cli.soft);

    let status = match command {
        Commands::Add { names } => repo.add(&names)?,
        Commands::Remove { names } => repo.remove(&names)?,
        Commands::Update => repo.update()?,
        Commands::List => {
            let names = repo.list()?;
            if names.is_empty() {
                println!("No packages found.");
            }
            for name in &names {
                println!("  {}", name);
            }
            Status::OK
        }
        Commands::Sync => repo.sync()?,
        Commands::Completions { .. } => {
            error!("Internal error: completions reached the repository dispatcher");
            Status::UNDEF
        }
    };

    Ok(status)
}
