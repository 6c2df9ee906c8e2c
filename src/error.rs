use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Storage,
    Config,
    Network,
    Auth,
    Other
}

#[derive(Debug)]
pub struct DashboardError {
    pub cause: String,
    pub kind: ErrorKind
}

impl DashboardError {
    pub fn new(cause: String) -> Self {
        DashboardError {
            cause,
            kind: ErrorKind::Other
        }
    }

    pub fn validation(cause: String) -> Self {
        DashboardError {
            cause,
            kind: ErrorKind::Validation
        }
    }

    /// Shorthand for the "field X is required" failure raised by forms and the controller.
    pub fn missing(field: &str) -> Self {
        Self::validation(format!("{} is required", field))
    }

    pub fn storage(cause: String) -> Self {
        DashboardError {
            cause,
            kind: ErrorKind::Storage
        }
    }

    pub fn config(cause: String) -> Self {
        DashboardError {
            cause,
            kind: ErrorKind::Config
        }
    }

    pub fn network(cause: String) -> Self {
        DashboardError {
            cause,
            kind: ErrorKind::Network
        }
    }

    pub fn auth(cause: String) -> Self {
        DashboardError {
            cause,
            kind: ErrorKind::Auth
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

impl std::error::Error for DashboardError {}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Validation => write!(f, "invalid input: {}", self.cause),
            _ => write!(f, "cause: {}", self.cause)
        }
    }
}

impl From<String> for DashboardError {
    fn from(cause: String) -> Self {
        Self::new(cause)
    }
}

impl From<&str> for DashboardError {
    fn from(cause: &str) -> Self {
        Self::new(cause.to_string())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("Serialization error: {}", err))
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid config.toml: {}", err))
    }
}

impl From<json5::Error> for DashboardError {
    fn from(err: json5::Error) -> Self {
        Self::config(format!("Invalid seed file: {}", err))
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(format!("HTTP error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_validation_error() {
        let err = DashboardError::missing("name");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "invalid input: name is required");
    }

    #[test]
    fn io_errors_map_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashboardError = io.into();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert!(err.cause.contains("denied"));
    }
}
