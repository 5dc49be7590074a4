//! issue-tracker: serve the issue tracker REST API.
//!
//! - `issue-tracker` loads `tracker.toml` from the working directory if
//!   present, otherwise uses defaults
//! - `issue-tracker --config <path>` loads the given file
//! - `issue-tracker --init-config` writes a commented default file and exits

use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgMatches, Command};
use tracker_server::{init_logging, Server, ServerResult, TrackerConfig, CONFIG_FILE_NAME};

/// Build the CLI command tree.
fn build_cli() -> Command {
    Command::new("issue-tracker")
        .about("Project-scoped issue tracker over REST/JSON")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ./tracker.toml if present)"),
        )
        .arg(
            Arg::new("listen")
                .long("listen")
                .short('l')
                .value_name("ADDR")
                .help("Listen address, overrides the config file (e.g. 127.0.0.1:3000)"),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default config file and exit")
                .action(clap::ArgAction::SetTrue),
        )
}

fn config_path(matches: &ArgMatches) -> (PathBuf, bool) {
    match matches.get_one::<String>("config") {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(CONFIG_FILE_NAME), false),
    }
}

fn load_config(matches: &ArgMatches) -> ServerResult<TrackerConfig> {
    let (path, explicit) = config_path(matches);
    let mut config = if explicit || path.exists() {
        TrackerConfig::from_file(&path)?
    } else {
        TrackerConfig::default()
    };
    if let Some(listen) = matches.get_one::<String>("listen") {
        config.listen = listen.clone();
    }
    config.validate()?;
    Ok(config)
}

fn init_config(matches: &ArgMatches) -> ServerResult<()> {
    let (path, _) = config_path(matches);
    if TrackerConfig::write_default_if_missing(&path)? {
        eprintln!("Wrote default config to {}", path.display());
    } else {
        eprintln!("Config file {} already exists, left unchanged", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("init-config") {
        if let Err(e) = init_config(&matches) {
            eprintln!("{}", e);
            process::exit(1);
        }
        return;
    }

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = Server::new(config).run().await {
        tracing::error!(error = %e, "Server failed");
        process::exit(1);
    }
}
