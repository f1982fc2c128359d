// SPDX-License-Identifier: AGPL-3.0-or-later
//
//! Geomineral CLI - role-gated record management for mineral reference data

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use geomineral::commands;
use geomineral::config::Config;
use geomineral::manager::DataManager;
use geomineral::store::PersistentStore;
use geomineral::{auth, commands::country::CountryArgs, commands::mineral::MineralArgs, commands::user::UserArgs};

#[derive(Parser)]
#[command(name = "geomineral")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Data directory override
    #[arg(long, env = "GEOMINERAL_DATA_DIR", global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Username for the session
    #[arg(short = 'u', long, env = "GEOMINERAL_USER", global = true)]
    username: Option<String>,

    /// Password for the session
    #[arg(short = 'p', long, env = "GEOMINERAL_PASSWORD", global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage mineral records
    Mineral {
        /// Action: add, update, delete, list, show
        action: String,

        /// Mineral name
        name: Option<String>,

        /// Where the mineral is mined
        #[arg(long)]
        location: Option<String>,

        /// Output in tonnes per day
        #[arg(long)]
        production: Option<u64>,

        /// Display color (#RRGGBB)
        #[arg(long)]
        color: Option<String>,

        /// New name (update only)
        #[arg(long)]
        rename: Option<String>,
    },

    /// Manage country profiles
    Country {
        /// Action: add, update, delete, list, show
        action: String,

        /// Country name
        name: Option<String>,

        /// Output in tons
        #[arg(long)]
        production: Option<u64>,

        /// GDP in millions
        #[arg(long)]
        gdp: Option<u64>,

        /// Number of active projects
        #[arg(long)]
        projects: Option<u64>,

        /// Display color (#RRGGBB)
        #[arg(long)]
        color: Option<String>,

        /// New name (update only)
        #[arg(long)]
        rename: Option<String>,
    },

    /// Manage user accounts
    User {
        /// Action: add, update, delete, list
        action: String,

        /// Username
        name: Option<String>,

        /// Password for the target account
        #[arg(long)]
        new_password: Option<String>,

        /// Role: Administrator, Investor, Researcher
        #[arg(long)]
        role: Option<String>,

        /// New username (update only)
        #[arg(long)]
        rename: Option<String>,
    },

    /// Authenticate and print the role's dashboard
    Login,

    /// Register a new Researcher account (no session required)
    Signup {
        /// Username for the new account
        name: String,

        /// Password for the new account
        #[arg(long)]
        new_password: String,
    },

    /// Print chart series
    Chart {
        /// Action: totals, minerals, countries, compare
        action: String,

        /// Country names (compare only)
        names: Vec<String>,

        /// Metric: production, gdp, projects
        #[arg(long)]
        metric: Option<String>,
    },

    /// Print map markers
    Map {
        /// Tile source: satellite, road, terrain
        #[arg(long, default_value = "road")]
        tiles: String,
    },

    /// Export the store document
    Export {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Completions need no store and no session
    if let Commands::Completions { shell } = &cli.command {
        return commands::completions::run(*shell, &mut Cli::command());
    }

    // One DataManager owns the collections; every command works through it.
    let config = Config::resolve(cli.data_dir.clone());
    let store = PersistentStore::in_dir(&config.data_dir);
    let mut manager = DataManager::open(store)?;

    // Self-registration runs before the session gate: new researchers have
    // no credentials yet.
    if let Commands::Signup { name, new_password } = &cli.command {
        return commands::signup::run(&mut manager, name, new_password);
    }

    // Establish the session before dispatching; it is passed as explicit
    // context into every view.
    let (Some(username), Some(password)) = (cli.username.as_deref(), cli.password.as_deref())
    else {
        anyhow::bail!("Authentication required: pass --username and --password (or set GEOMINERAL_USER / GEOMINERAL_PASSWORD)");
    };
    let Some(session) = auth::authenticate(manager.data(), username, password) else {
        anyhow::bail!("invalid username or password");
    };

    // Execute command
    match cli.command {
        Commands::Mineral {
            action,
            name,
            location,
            production,
            color,
            rename,
        } => commands::mineral::run(
            &mut manager,
            &session,
            &action,
            name,
            MineralArgs {
                location,
                production,
                color,
                rename,
            },
        ),
        Commands::Country {
            action,
            name,
            production,
            gdp,
            projects,
            color,
            rename,
        } => commands::country::run(
            &mut manager,
            &session,
            &action,
            name,
            CountryArgs {
                production,
                gdp,
                projects,
                color,
                rename,
            },
        ),
        Commands::User {
            action,
            name,
            new_password,
            role,
            rename,
        } => commands::user::run(
            &mut manager,
            &session,
            &action,
            name,
            UserArgs {
                new_password,
                role,
                rename,
            },
        ),
        Commands::Login => commands::dashboard::run(&session),
        Commands::Chart {
            action,
            names,
            metric,
        } => commands::chart::run(&manager, &session, &action, names, metric),
        Commands::Map { tiles } => commands::map::run(&manager, &session, &tiles),
        Commands::Export { output } => commands::export::run(&manager, &session, output),
        Commands::Completions { .. } | Commands::Signup { .. } => {
            unreachable!("handled before session setup")
        }
    }
}
