use clap::{Parser, Subcommand};
use color_eyre::Result;
use folder_launcher::actions::spawn;
use folder_launcher::app::ProfileHost;
use folder_launcher::data::{ConnectionProfile, LauncherTable, ProfileStore, resolve};
use folder_launcher::error::{self, FolderError};
use folder_launcher::plugin::{ConnectionState, FolderPlugin, ProtocolPlugin};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AUTO_LAUNCHER: &str = "auto";

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Profile file (defaults to $FOLDER_LAUNCHER_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TARGET with LAUNCHER ("auto" or "" picks the default opener)
    Run { launcher: String, target: String },
    /// Open a saved profile
    Open { profile: String },
    /// List known launchers
    Launchers {
        #[arg(long)]
        json: bool,
    },
    /// Manage saved profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    List,
    Add {
        name: String,
        /// Folder path or server address
        server: String,
        #[arg(short, long)]
        launcher: Option<String>,
    },
    Remove {
        name: String,
    },
}

#[derive(Serialize)]
struct LauncherListing<'a> {
    identifier: &'a str,
    display_name: &'a str,
    auto_detect: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.unwrap_or_else(ProfileStore::default_path);

    match cli.command {
        Commands::Run { launcher, target } => Ok(report(run(&launcher, &target))),
        Commands::Open { profile } => {
            let store = ProfileStore::load(&config_path)?;
            let profile = store.find(&profile)?.clone();
            Ok(report(open_profile(profile)))
        }
        Commands::Launchers { json } => {
            list_launchers(json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Profile { command } => {
            manage_profiles(command, &config_path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Spawn failures become a plain message and exit status 1, not a report.
fn report(outcome: error::Result<String>) -> ExitCode {
    match outcome {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `auto` and `""` both mean "use the default opener".
fn launcher_id(arg: &str) -> Option<&str> {
    (!arg.is_empty() && arg != AUTO_LAUNCHER).then_some(arg)
}

fn run(launcher: &str, target: &str) -> error::Result<String> {
    let executable = resolve(launcher_id(launcher), &LauncherTable::builtin());

    let pid = spawn(&executable, target).into_result()?;
    Ok(format!("Started {} (pid {})", executable, pid))
}

fn open_profile(profile: ConnectionProfile) -> error::Result<String> {
    let mut plugin = FolderPlugin::new(ProfileHost::new(profile));
    let info = *plugin.info();
    tracing::debug!(
        plugin = info.name,
        description = info.description,
        version = info.version,
        icon = info.icon,
        "loaded plugin"
    );

    plugin.init();
    let state = plugin.open();
    let pid = plugin.process_id();
    let host = plugin.into_host();

    match (state, pid) {
        (ConnectionState::Opened, Some(pid)) if host.is_opened() => {
            Ok(format!("Opened '{}' (pid {})", host.profile.name, pid))
        }
        _ => {
            let message = host.error_message().unwrap_or(state.label());
            Err(FolderError::SpawnFailure(message.to_string()))
        }
    }
}

fn launcher_listing(table: &LauncherTable) -> Vec<LauncherListing<'_>> {
    let auto = table.auto_detect().identifier.as_str();

    table
        .iter()
        .map(|entry| LauncherListing {
            identifier: &entry.identifier,
            display_name: &entry.display_name,
            auto_detect: entry.identifier == auto,
        })
        .collect()
}

fn list_launchers(json: bool) -> error::Result<()> {
    let table = LauncherTable::builtin();
    let listing = launcher_listing(&table);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for entry in listing {
        let marker = if entry.auto_detect { " (default)" } else { "" };
        println!("{:<12} {}{}", entry.identifier, entry.display_name, marker);
    }
    Ok(())
}

fn manage_profiles(command: ProfileCommands, config_path: &Path) -> error::Result<()> {
    let mut store = ProfileStore::load(config_path)?;

    match command {
        ProfileCommands::List => {
            if store.profiles.is_empty() {
                println!("No profiles in {}", config_path.display());
            }
            let table = LauncherTable::builtin();
            for profile in &store.profiles {
                let launcher = match profile.launcher.as_deref() {
                    Some(id) if !id.is_empty() => table
                        .get(id)
                        .map(|e| e.display_name.clone())
                        .unwrap_or_else(|| id.to_string()),
                    _ => table.auto_detect().display_name.clone(),
                };
                println!("{:<20} {:<40} {}", profile.name, profile.server, launcher);
            }
        }
        ProfileCommands::Add {
            name,
            server,
            launcher,
        } => {
            store.add(ConnectionProfile {
                name: name.clone(),
                server,
                launcher,
            })?;
            store.save(config_path)?;
            println!("Added profile '{}'", name);
        }
        ProfileCommands::Remove { name } => {
            let removed = store.remove(&name)?;
            store.save(config_path)?;
            println!("Removed profile '{}'", removed.name);
        }
    }

    Ok(())
}
