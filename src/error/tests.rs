use crate::error::format::format_error_with_color;
use crate::error::*;

#[test]
fn test_error_context_invalid_argument() {
    let error = PackagistError::InvalidArgument("The package name is not specified".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.suggestion.unwrap().contains("<vendor>/<name>"));
    assert!(
        context
            .details
            .unwrap()
            .contains("The package name is not specified")
    );
}

#[test]
fn test_error_context_not_found() {
    let error = PackagistError::HttpStatus {
        status: 404,
        url: "https://packagist.org/packages/acme/missing.json".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("does not exist"));
    assert!(context.details.unwrap().contains("acme/missing.json"));
}

#[test]
fn test_error_context_server_error() {
    let error = PackagistError::HttpStatus {
        status: 503,
        url: "https://packagist.org/search.json".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("try again later"));
}

#[test]
fn test_error_context_unknown_status_has_no_suggestion() {
    let error = PackagistError::HttpStatus {
        status: 418,
        url: "https://packagist.org/statistics.json".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_none());
    assert!(context.details.is_some());
}

#[test]
fn test_error_context_timeout() {
    let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
    let error = PackagistError::Io(io_err);
    let context = ErrorContext::new(&error);

    assert!(
        context
            .suggestion
            .unwrap()
            .contains("PACKAGIST_API__TIMEOUT_SECS")
    );
}

#[test]
fn test_error_context_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    let error = PackagistError::Json(json_err);
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("base URL"));
    assert!(context.details.unwrap().starts_with("Decode error:"));
}

#[test]
fn test_error_context_display() {
    let error = PackagistError::InvalidArgument("monolog".to_string());
    let context = ErrorContext::new(&error);
    let output = context.to_string();

    assert!(output.contains("Error:"));
    assert!(output.contains("Details:"));
    assert!(output.contains("Suggestion:"));
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&PackagistError::InvalidArgument("test".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&PackagistError::ConfigError("test".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&PackagistError::HttpStatus {
            status: 404,
            url: "u".to_string()
        }),
        4
    );
    assert_eq!(
        get_exit_code(&PackagistError::HttpStatus {
            status: 500,
            url: "u".to_string()
        }),
        20
    );
    let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
    assert_eq!(get_exit_code(&PackagistError::Json(json_err)), 65);
    let io_err = std::io::Error::other("test");
    assert_eq!(get_exit_code(&PackagistError::Io(io_err)), 1);
}

#[test]
fn test_exit_codes_io_network_kinds() {
    let timed_out = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
    assert_eq!(get_exit_code(&PackagistError::Io(timed_out)), 20);

    let refused = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
    assert_eq!(get_exit_code(&PackagistError::Io(refused)), 20);

    let other = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    assert_eq!(get_exit_code(&PackagistError::Io(other)), 1);
}

#[test]
fn test_is_broken_pipe() {
    let pipe = PackagistError::Io(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
    assert!(pipe.is_broken_pipe());

    let timed_out = PackagistError::Io(std::io::Error::from(std::io::ErrorKind::TimedOut));
    assert!(!timed_out.is_broken_pipe());
    assert!(!PackagistError::InvalidArgument("x".to_string()).is_broken_pipe());
}

#[test]
fn test_format_error_chain() {
    let error = PackagistError::InvalidArgument("The package name is not specified".to_string());
    let formatted = format_error_chain(&error);

    assert!(formatted.contains("Error:"));
    assert!(formatted.contains("Invalid argument"));
}

#[test]
fn test_format_error_with_color_reset() {
    let error = PackagistError::InvalidArgument("monolog".to_string());

    let formatted = format_error_with_color(&error, true);

    assert!(formatted.ends_with("\x1b[0m"));
    assert!(formatted.contains("Error:"));
    assert!(formatted.contains("Suggestions:"));
    assert!(formatted.contains("monolog/monolog"));
}

#[test]
fn test_format_error_no_color_no_reset() {
    let error = PackagistError::InvalidArgument("monolog".to_string());

    let formatted = format_error_with_color(&error, false);

    assert!(!formatted.contains("\x1b["));
    assert!(formatted.contains("Error:"));
    assert!(formatted.contains("Suggestions:"));
}
