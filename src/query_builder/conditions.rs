use sqlx::{Postgres, QueryBuilder as SqlxQueryBuilder};

/// A value bound to a placeholder rather than spliced into the SQL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i32),
    BigInt(i64),
    Text(String),
}

impl SqlValue {
    /// Push this value as a bind parameter onto an sqlx query builder
    pub fn push_bind(&self, builder: &mut SqlxQueryBuilder<'static, Postgres>) {
        match self {
            SqlValue::Int(v) => builder.push_bind(*v),
            SqlValue::BigInt(v) => builder.push_bind(*v),
            SqlValue::Text(v) => builder.push_bind(v.clone()),
        };
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::BigInt(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

/// Comparison operators supported in a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Ge,
    Le,
}

impl ComparisonOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Le => "<=",
        }
    }
}

/// A single comparison of a column against a bound value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub operator: ComparisonOperator,
    pub value: SqlValue,
}

impl Condition {
    pub fn new(field: &str, operator: ComparisonOperator, value: impl Into<SqlValue>) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value: value.into(),
        }
    }

    pub fn eq(field: &str, value: impl Into<SqlValue>) -> Self {
        Self::new(field, ComparisonOperator::Eq, value)
    }

    pub fn ge(field: &str, value: impl Into<SqlValue>) -> Self {
        Self::new(field, ComparisonOperator::Ge, value)
    }

    pub fn le(field: &str, value: impl Into<SqlValue>) -> Self {
        Self::new(field, ComparisonOperator::Le, value)
    }

    /// Render with a positional Postgres placeholder (`$n`)
    pub fn to_sql(&self, placeholder: usize) -> String {
        format!("{} {} ${}", self.field, self.operator.to_sql(), placeholder)
    }
}

/// A conjunction of conditions; an empty clause matches every row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
}

impl WhereClause {
    /// Combine multiple conditions with AND
    pub fn and(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Convert to SQL text, numbering placeholders from `first_placeholder`.
    ///
    /// Returns an empty string when there are no conditions so callers can
    /// omit the WHERE keyword entirely.
    pub fn to_sql(&self, first_placeholder: usize) -> String {
        self.conditions
            .iter()
            .enumerate()
            .map(|(i, c)| c.to_sql(first_placeholder + i))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Append ` WHERE ...` with bound values onto an sqlx builder
    pub fn push_to(&self, builder: &mut SqlxQueryBuilder<'static, Postgres>) {
        if self.conditions.is_empty() {
            return;
        }

        builder.push(" WHERE ");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                builder.push(" AND ");
            }
            builder.push(&condition.field);
            builder.push(" ");
            builder.push(condition.operator.to_sql());
            builder.push(" ");
            condition.value.push_bind(builder);
        }
    }

    pub fn values(&self) -> Vec<SqlValue> {
        self.conditions.iter().map(|c| c.value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_condition() {
        let condition = Condition::eq("m.username", "member1");
        assert_eq!(condition.to_sql(1), "m.username = $1");
        assert_eq!(condition.value, SqlValue::Text("member1".to_string()));
    }

    #[test]
    fn test_range_conditions() {
        assert_eq!(Condition::ge("m.age", 35).to_sql(2), "m.age >= $2");
        assert_eq!(Condition::le("m.age", 40).to_sql(3), "m.age <= $3");
    }

    #[test]
    fn test_where_clause_conjunction() {
        let clause = WhereClause::and(vec![
            Condition::eq("t.name", "teamB"),
            Condition::ge("m.age", 35),
            Condition::le("m.age", 40),
        ]);
        assert_eq!(
            clause.to_sql(1),
            "t.name = $1 AND m.age >= $2 AND m.age <= $3"
        );
        assert_eq!(
            clause.values(),
            vec![
                SqlValue::Text("teamB".to_string()),
                SqlValue::Int(35),
                SqlValue::Int(40)
            ]
        );
    }

    #[test]
    fn test_empty_where_clause_renders_nothing() {
        let clause = WhereClause::default();
        assert!(clause.is_empty());
        assert_eq!(clause.to_sql(1), "");

        let mut builder = SqlxQueryBuilder::<Postgres>::new("SELECT 1");
        clause.push_to(&mut builder);
        assert_eq!(builder.sql(), "SELECT 1");
    }

    #[test]
    fn test_push_to_binds_placeholders() {
        let clause = WhereClause::and(vec![
            Condition::eq("m.username", "member1"),
            Condition::ge("m.age", 10),
        ]);
        let mut builder = SqlxQueryBuilder::<Postgres>::new("SELECT * FROM member m");
        clause.push_to(&mut builder);
        assert_eq!(
            builder.sql(),
            "SELECT * FROM member m WHERE m.username = $1 AND m.age >= $2"
        );
    }
}
