/// Commands accepted by the interactive shell
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Login,
    Logout,
    Handle,
    Status,
    Unknown(String),
}

/// Outcome of running a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

// Parse raw command string into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_uppercase();

    match cmd.as_str() {
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        "LOGIN" => Command::Login,
        "LOGOUT" => Command::Logout,
        "HANDLE" => Command::Handle,
        "STATUS" => Command::Status,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
