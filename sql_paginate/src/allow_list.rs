//! Field allow-list
//!
//! Maps caller-facing logical field names onto the column identifiers that may
//! appear in generated SQL. A logical name missing from the map never reaches a
//! statement: the builder drops it wherever it is referenced.

use crate::validation::{ValidatedColumnName, ValidationError};
use std::collections::{BTreeMap, HashMap};

/// Logical field name -> column identifier
///
/// Entries are kept sorted by logical name so that the default projection
/// (every allowed column) is the same on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAllowList {
    columns: BTreeMap<String, String>,
}

impl FieldAllowList {
    /// Empty allow-list
    ///
    /// Until fields are added, a page built against it projects `SELECT *`, which
    /// exposes every column of the table. Filters and sort keys still resolve to
    /// nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, replacing any previous column for the same logical name
    pub fn with_field(mut self, logical: &str, column: &str) -> Self {
        self.columns.insert(logical.to_string(), column.to_string());
        self
    }

    /// Allow-list where every logical name is also its column name
    pub fn identity<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| (name.as_ref().to_string(), name.as_ref().to_string()))
            .collect()
    }

    /// Build an allow-list, rejecting any column that is not a plain
    /// (optionally table-qualified) identifier
    pub fn validated<I, L, C>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: AsRef<str>,
    {
        let mut columns = BTreeMap::new();
        for (logical, column) in pairs {
            let column = ValidatedColumnName::new(column.as_ref())?;
            columns.insert(logical.into(), column.into_string());
        }
        Ok(Self { columns })
    }

    /// Column identifier for a logical name, if it is allowed
    pub fn resolve(&self, logical: &str) -> Option<&str> {
        self.columns.get(logical).map(String::as_str)
    }

    pub fn contains(&self, logical: &str) -> bool {
        self.columns.contains_key(logical)
    }

    /// Every allowed column, ordered by logical name
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<L, C> FromIterator<(L, C)> for FieldAllowList
where
    L: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(logical, column)| (logical.into(), column.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for FieldAllowList {
    fn from(columns: HashMap<String, String>) -> Self {
        columns.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for FieldAllowList {
    fn from(columns: BTreeMap<String, String>) -> Self {
        Self { columns }
    }
}
