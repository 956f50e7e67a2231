//! Filter expression builder implementation.

use std::fmt;

/// Comparison and set operators of the vendor filter grammar, rendered as
/// fixed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    /// Substring match.
    Like,
    /// Logical and.
    And,
    /// Logical or.
    Or,
    /// Membership in a set.
    In,
    /// Absence from a set.
    NotIn,
}

impl FilterOperator {
    /// The vendor token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            FilterOperator::Equals => "$eq",
            FilterOperator::NotEquals => "$ne",
            FilterOperator::GreaterThan => "$gt",
            FilterOperator::GreaterOrEqual => "$gte",
            FilterOperator::LessThan => "$lt",
            FilterOperator::LessOrEqual => "$lte",
            FilterOperator::Like => "$like",
            FilterOperator::And => "$and",
            FilterOperator::Or => "$or",
            FilterOperator::In => "$in",
            FilterOperator::NotIn => "$nin",
        }
    }
}

/// A condition value. Scalars stringify; sequences render as a bracketed
/// comma-joined list for the `in`/`nin` operators.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Str(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Str(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(i64::from(v))
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Float(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::List(v)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(v: &[&str]) -> Self {
        FilterValue::List(v.iter().map(ToString::to_string).collect())
    }
}

impl FilterValue {
    fn render(&self) -> String {
        match self {
            FilterValue::Str(s) => escape(s),
            FilterValue::Int(n) => n.to_string(),
            FilterValue::Float(n) => n.to_string(),
            FilterValue::Bool(b) => b.to_string(),
            // List grammar: bracketed, comma-joined, no surrounding spaces.
            // Whitespace inside items is stripped before joining.
            FilterValue::List(items) => {
                let joined = items
                    .iter()
                    .map(|item| escape(&item.split_whitespace().collect::<String>()))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("[{joined}]")
            }
        }
    }
}

/// Escape the reserved characters of the vendor filter grammar by prefixing
/// them with `$`. Applied to field names and value content, never to the
/// grammar tokens themselves.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '$' | '(' | ')' | '*' | ',' | '[' | ']' => {
                out.push('$');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Accumulates conditions and renders one filter expression string.
///
/// Conditions are joined with `$and:` / `$or:` in insertion order; the first
/// condition has no leading joiner. Built per call and discarded.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    expr: String,
}

impl Filter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition joined to prior conditions with `$and:`.
    pub fn and_condition(
        &mut self,
        field: &str,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> &mut Self {
        self.condition(field, operator, value.into(), true);
        self
    }

    /// Append a condition joined to prior conditions with `$or:`.
    pub fn or_condition(
        &mut self,
        field: &str,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> &mut Self {
        self.condition(field, operator, value.into(), false);
        self
    }

    fn condition(&mut self, field: &str, operator: FilterOperator, value: FilterValue, and: bool) {
        if !self.expr.is_empty() {
            self.expr.push_str(if and { "$and:" } else { "$or:" });
        }
        self.expr.push_str(&escape(field));
        self.expr.push_str(operator.token());
        self.expr.push(':');
        self.expr.push_str(&value.render());
    }

    /// True when no condition has been added yet.
    pub fn is_empty(&self) -> bool {
        self.expr.is_empty()
    }

    /// The rendered expression.
    pub fn as_str(&self) -> &str {
        &self.expr
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}
