use miette::Diagnostic;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error, Diagnostic)]
pub enum GrantsError {
    #[error("Config error: {0}")]
    #[diagnostic(code(grantdesk::config))]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Access denied: {0}")]
    #[diagnostic(
        code(grantdesk::access_denied),
        help("The current role does not hold the required permission")
    )]
    AccessDenied(String),

    #[error("Unknown role `{0}`")]
    #[diagnostic(
        code(grantdesk::unknown_role),
        help("Expected one of ADMIN, PI, FINANCE, VIEWER")
    )]
    UnknownRole(String),
}
