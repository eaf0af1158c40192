//! Error types for the PageKit crate
//!
//! This module contains all error types that can be returned by PageKit operations.

use sql_paginate::QueryBuildError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageKitError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Query build error: {0}")]
    Query(#[from] QueryBuildError),
}
