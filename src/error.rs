// Comprehensive error types for the Network Topology Mapper

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to parse routing table: {0}")]
    RouteTableParse(String),

    #[error("Invalid address or subnet mask: {0}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert error to user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::RouteTableParse(_) => {
                "Failed to read the routing table file. Check that it has the expected columns.".to_string()
            }
            AppError::InvalidAddress(addr) => {
                format!("Cannot compute a subnet range from '{}'. Check the address and mask columns.", addr)
            }
            AppError::Io(_) => {
                "File system error. Check the path, permissions and disk space.".to_string()
            }
            AppError::Config(_) => {
                "Configuration error. Check your config file or command-line arguments.".to_string()
            }
            AppError::Serialization(_) => {
                "Data format error. This might be a bug, please report it.".to_string()
            }
        }
    }
}
