use crate::commands::parser::{Command, CommandResult};
use crate::session::SessionManager;

use log::debug;

/// Run one shell command against the session manager.
///
/// Session errors have already been shown by the manager; they are only
/// logged here.
pub async fn handle_command(session: &SessionManager, command: Command) -> CommandResult {
    match command {
        Command::Quit => CommandResult::Quit,
        Command::Login => {
            if let Err(e) = session.login().await {
                debug!("login ended: {}", e);
            }
            CommandResult::Continue
        }
        Command::Logout => {
            if let Err(e) = session.logout().await {
                debug!("logout ended: {}", e);
            }
            CommandResult::Continue
        }
        Command::Handle => {
            println!("{}", describe_handle(session).await);
            CommandResult::Continue
        }
        Command::Status => {
            println!("{}", describe_status(session).await);
            CommandResult::Continue
        }
        Command::Unknown(cmd) => {
            println!("Unknown command: {:?} (try LOGIN, LOGOUT, HANDLE, STATUS, QUIT)", cmd);
            CommandResult::Continue
        }
    }
}

async fn describe_handle(session: &SessionManager) -> String {
    match session.handle().await {
        Some(handle) => format!("Handle bound to {}", handle.api_url()),
        None => "No host resolved".to_string(),
    }
}

async fn describe_status(session: &SessionManager) -> String {
    match session.current().await {
        Some(handle) => format!("Session handle held for {}", handle.api_url()),
        None => "No session handle".to_string(),
    }
}
