//! Context setup and per-subcommand handlers.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: Installs the stderr log subscriber
//! - `init_context()`: Resolves directories and configuration, opens the database
//! - `handle_*()`: Per-subcommand handlers that call the API and print results

use super::print::{print_config, print_messages};
use super::setup::{Cli, Commands};
use super::shell::run_session;
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi};
use roster::commands;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::form::Form;
use roster::store::sqlite::SqliteStore;
use roster::store::RecordStore;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

const LOG_ENV: &str = "ROSTER_LOG";
const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

struct AppContext {
    api: RosterApi<SqliteStore>,
    config: RosterConfig,
    db_path: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let paths = resolve_paths()?;

    // Config does not need the database.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &paths)?;

    match cli.command {
        Some(Commands::Shell) | None => handle_shell(ctx),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Wipe { yes }) => handle_wipe(&mut ctx, yes),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool, quiet: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| RosterError::Config(format!("failed to initialize logging: {}", e)))
}

fn resolve_paths() -> Result<AppPaths> {
    let config_override = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
    let data_override = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    if let (Some(config_dir), Some(data_dir)) = (&config_override, &data_override) {
        return Ok(AppPaths {
            config_dir: config_dir.clone(),
            data_dir: data_dir.clone(),
        });
    }

    let dirs = ProjectDirs::from("com", "roster", "roster")
        .ok_or_else(|| RosterError::Config("Could not determine a home directory".to_string()))?;
    Ok(AppPaths {
        config_dir: config_override.unwrap_or_else(|| dirs.config_dir().to_path_buf()),
        data_dir: data_override.unwrap_or_else(|| dirs.data_dir().to_path_buf()),
    })
}

fn init_context(cli: &Cli, paths: &AppPaths) -> Result<AppContext> {
    let config = RosterConfig::load(&paths.config_dir)?;
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| config.database_path(&paths.data_dir));

    let store = SqliteStore::open(&db_path)?;
    Ok(AppContext {
        api: RosterApi::new(store),
        config,
        db_path,
    })
}

fn handle_shell(mut ctx: AppContext) -> Result<()> {
    if ctx.config.wipe_on_start {
        let result = ctx.api.wipe_students()?;
        tracing::warn!(db = %ctx.db_path.display(), "wipe-on-start is enabled; student table emptied");
        print_messages(&[commands::CmdMessage::warning(
            "wipe-on-start is enabled; existing records were removed.",
        )]);
        print_messages(&result.messages);
    }

    let mut form = Form::new(ctx.api);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    run_session(&mut form, stdin.lock(), interactive)
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(&ctx.db_path.display().to_string())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_wipe(ctx: &mut AppContext, skip_confirm: bool) -> Result<()> {
    let count = ctx.api.store().count()?;
    if count > 0 && !skip_confirm {
        println!(
            "This will permanently remove {} student record(s) from {}",
            count,
            ctx.db_path.display()
        );
        print!("[Y] To delete: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim() != "Y" {
            print_messages(&[commands::CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.wipe_students()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(paths: &AppPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(&paths.config_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
