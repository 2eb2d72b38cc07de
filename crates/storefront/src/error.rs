//! Unified error handling.
//!
//! Provides a unified `AppError` type for everything that can fail while
//! opening the storefront or running an operation against it. Front ends
//! should return `Result<T, AppError>` and log the error once at the top.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::seed::SeedError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store could not be opened or written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Seed data could not be loaded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

impl AppError {
    /// Whether the error was caused by user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Repository(
                RepositoryError::Validation(_)
                    | RepositoryError::InvalidPrice(_)
                    | RepositoryError::EmptyCart
            )
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
