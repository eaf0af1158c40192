//! sqlx binding for built queries
//!
//! Binds [`QueryArgument`]s onto PostgreSQL queries in placeholder order. Build
//! with [`Placeholder::Dollar`](crate::Placeholder::Dollar) for PostgreSQL.
//! Text arguments are bound as `TEXT`, so filters on non-text columns need a
//! matching cast in the allow-listed column expression.

use crate::argument::QueryArgument;
use crate::query_builder::PaginatedQuery;
use sqlx::postgres::{PgArguments, PgRow, Postgres};
use sqlx::query::{Query, QueryAs};
use sqlx::FromRow;

/// Bind arguments onto an untyped query
pub fn bind_query<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    arguments: &'q [QueryArgument],
) -> Query<'q, Postgres, PgArguments> {
    for argument in arguments {
        query = match argument {
            QueryArgument::Text(value) => query.bind(value.as_str()),
            QueryArgument::Integer(value) => query.bind(*value),
        };
    }
    query
}

/// Bind arguments onto a query mapped to `O`
pub fn bind_query_as<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    arguments: &'q [QueryArgument],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for argument in arguments {
        query = match argument {
            QueryArgument::Text(value) => query.bind(value.as_str()),
            QueryArgument::Integer(value) => query.bind(*value),
        };
    }
    query
}

impl PaginatedQuery {
    pub fn as_query(&self) -> Query<'_, Postgres, PgArguments> {
        bind_query(sqlx::query(&self.statement), &self.arguments)
    }

    pub fn as_query_as<O>(&self) -> QueryAs<'_, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        bind_query_as(sqlx::query_as::<_, O>(&self.statement), &self.arguments)
    }
}
