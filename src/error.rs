use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Access token not found. Set GITHUB_TOKEN or run 'gh-teams auth --token <TOKEN>'.")]
    TokenNotFound,

    #[error("Organization not configured. Set GITHUB_ORG or run 'gh-teams auth --org <ORG>'.")]
    OrganizationNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String, status: Option<u16> },

    #[error("{message} (HTTP {status})")]
    OperationFailed { message: String, status: u16 },

    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Missing data element: {0}")]
    MissingField(&'static str),

    #[error("Invalid data element {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Pagination stopped after {0} pages without reaching the last page")]
    PageLimitExceeded(usize),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl GitHubError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::InvalidInput { status, .. } => *status,
            GitHubError::OperationFailed { status, .. } | GitHubError::Http { status, .. } => {
                Some(*status)
            }
            GitHubError::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for a raw `Http` error in the 4xx range.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GitHubError::Http { status, .. } if is_client_status(*status))
    }
}

/// True for any status in the 4xx range.
pub(crate) fn is_client_status(status: u16) -> bool {
    (400..500).contains(&status)
}

pub type GitHubResult<T> = Result<T, GitHubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> GitHubResult<T>;
    fn with_context<F>(self, f: F) -> GitHubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> GitHubResult<T> {
        self.map_err(|e| GitHubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> GitHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GitHubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> GitHubResult<T> {
        self.ok_or_else(|| GitHubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> GitHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| GitHubError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! github_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::GitHubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::GitHubError::$error_type(format!($fmt, $($arg)*))
    };
}
