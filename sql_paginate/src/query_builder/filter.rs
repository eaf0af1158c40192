//! Query builder utilities
//!
//! Filter descriptors for the WHERE clause of a paginated query.

use serde::{Deserialize, Serialize};

/// Filter condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCondition {
    Eq,   // =
    Ne,   // !=
    Gt,   // >
    Gte,  // >=
    Lt,   // <
    Lte,  // <=
    Like, // LIKE
    In,   // IN
    #[serde(alias = "nin")]
    NotIn, // NOT IN
}

impl FilterCondition {
    pub fn to_sql(&self) -> &'static str {
        match self {
            FilterCondition::Eq => "=",
            FilterCondition::Ne => "!=",
            FilterCondition::Gt => ">",
            FilterCondition::Gte => ">=",
            FilterCondition::Lt => "<",
            FilterCondition::Lte => "<=",
            FilterCondition::Like => "LIKE",
            FilterCondition::In => "IN",
            FilterCondition::NotIn => "NOT IN",
        }
    }

    /// True for conditions whose value is a comma-separated list
    pub fn is_set_membership(&self) -> bool {
        matches!(self, FilterCondition::In | FilterCondition::NotIn)
    }
}

/// Single filter on a logical field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub key: String,
    /// Raw request value; comma-separated literals for `In`/`NotIn`
    pub value: String,
    pub condition: FilterCondition,
}

impl Filter {
    pub fn new(key: &str, value: &str, condition: FilterCondition) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            condition,
        }
    }

    /// Equal condition
    pub fn eq(key: &str, value: &str) -> Self {
        Self::new(key, value, FilterCondition::Eq)
    }

    /// Not equal condition
    pub fn ne(key: &str, value: &str) -> Self {
        Self::new(key, value, FilterCondition::Ne)
    }

    /// Greater than condition
    pub fn gt(key: &str, value: &str) -> Self {
        Self::new(key, value, FilterCondition::Gt)
    }

    /// Greater than or equal condition
    pub fn gte(key: &str, value: &str) -> Self {
        Self::new(key, value, FilterCondition::Gte)
    }

    /// Less than condition
    pub fn lt(key: &str, value: &str) -> Self {
        Self::new(key, value, FilterCondition::Lt)
    }

    /// Less than or equal condition
    pub fn lte(key: &str, value: &str) -> Self {
        Self::new(key, value, FilterCondition::Lte)
    }

    /// LIKE condition, wildcards are the caller's business
    pub fn like(key: &str, pattern: &str) -> Self {
        Self::new(key, pattern, FilterCondition::Like)
    }

    /// IN condition over comma-separated values
    pub fn in_values(key: &str, values: &str) -> Self {
        Self::new(key, values, FilterCondition::In)
    }

    /// NOT IN condition over comma-separated values
    pub fn not_in_values(key: &str, values: &str) -> Self {
        Self::new(key, values, FilterCondition::NotIn)
    }

    /// Trimmed, non-empty pieces of a comma-separated value
    pub fn tokens(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_trim_and_skip_blanks() {
        let filter = Filter::in_values("name", " amir , admin,,test ,");
        assert_eq!(filter.tokens(), vec!["amir", "admin", "test"]);

        assert!(Filter::in_values("name", "").tokens().is_empty());
        assert!(Filter::in_values("name", " , ,").tokens().is_empty());
    }

    #[test]
    fn test_condition_sql() {
        assert_eq!(FilterCondition::Eq.to_sql(), "=");
        assert_eq!(FilterCondition::Ne.to_sql(), "!=");
        assert_eq!(FilterCondition::Like.to_sql(), "LIKE");
        assert_eq!(FilterCondition::NotIn.to_sql(), "NOT IN");
        assert!(FilterCondition::In.is_set_membership());
        assert!(FilterCondition::NotIn.is_set_membership());
        assert!(!FilterCondition::Eq.is_set_membership());
    }

    #[test]
    fn test_condition_deserialize() {
        let parsed: Vec<FilterCondition> =
            serde_json::from_str(r#"["eq","gte","like","in","not_in","nin"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                FilterCondition::Eq,
                FilterCondition::Gte,
                FilterCondition::Like,
                FilterCondition::In,
                FilterCondition::NotIn,
                FilterCondition::NotIn,
            ]
        );
        assert!(serde_json::from_str::<FilterCondition>(r#""or""#).is_err());
    }
}
