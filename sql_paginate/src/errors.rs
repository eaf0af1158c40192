use thiserror::Error;

/// Errors that prevent a statement from being built at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryBuildError {
    #[error("Table name cannot be empty")]
    EmptyTable,

    #[error("Invalid per_page value: {0} (must be greater than 0)")]
    InvalidPerPage(i64),
}
