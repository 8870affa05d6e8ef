//! Error handlers
//!
//! Turns wiki API failures into the message shown to the user.

use crate::error::types::WikiError;
use crate::notify::Notifier;
use log::error;

/// Format an API failure for display
pub fn format_api_error(operation: &str, err: &WikiError) -> String {
    match err {
        WikiError::Api { code, info } => format!("ErrorCode:{}| ErrorInfo:{}", code, info),
        WikiError::LoginFailed { result, reason } => {
            format!("Result:{}| Reason:{}", result, reason)
        }
        other => format!("{} failed: {}", operation, other),
    }
}

/// Log an API failure and show it to the user, tagged with the operation name
pub fn show_api_error(notifier: &dyn Notifier, operation: &str, err: &WikiError) {
    error!("Wiki {} error: {}", operation, err);
    notifier.show_error(&format_api_error(operation, err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_use_code_and_info() {
        let err = WikiError::Api {
            code: "badtoken".into(),
            info: "Invalid CSRF token.".into(),
        };
        assert_eq!(
            format_api_error("logout", &err),
            "ErrorCode:badtoken| ErrorInfo:Invalid CSRF token."
        );
    }

    #[test]
    fn test_login_failures_show_result_and_reason() {
        let err = WikiError::LoginFailed {
            result: "Failed".into(),
            reason: "Incorrect username or password entered.".into(),
        };
        assert_eq!(
            format_api_error("login", &err),
            "Result:Failed| Reason:Incorrect username or password entered."
        );
    }

    #[test]
    fn test_other_errors_tagged_with_operation() {
        let err = WikiError::Status {
            status: 503,
            body: "busy".into(),
        };
        assert_eq!(
            format_api_error("login", &err),
            "login failed: Unexpected HTTP status 503: busy"
        );
        assert_eq!(
            format_api_error("logout", &WikiError::MissingToken("csrf")),
            "logout failed: No csrf token in response"
        );
    }
}
