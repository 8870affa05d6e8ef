//! wikitext-session - Entry Point
//!
//! Interactive shell that logs into a MediaWiki API and out again.

use log::{error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use wikitext_session::commands::{CommandResult, handle_command, parse_command};
use wikitext_session::config::WikiConfig;
use wikitext_session::host::ConfiguredHost;
use wikitext_session::notify::ConsoleNotifier;
use wikitext_session::utils::logging::setup_logging;
use wikitext_session::SessionManager;

#[tokio::main]
async fn main() {
    setup_logging();

    let config = match WikiConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded configuration: {:?}", config);

    let hosts = Arc::new(ConfiguredHost::new(config.host.clone()));
    let session = SessionManager::new(config, hosts, Arc::new(ConsoleNotifier));

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    println!("Commands: LOGIN, LOGOUT, HANDLE, STATUS, QUIT");

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break,
            Ok(_) => {
                let command = parse_command(&line);
                info!("Received command: {:?}", command);
                if handle_command(&session, command).await == CommandResult::Quit {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }

    if session.is_active().await {
        info!("Exiting with a session handle still held");
    }
}
