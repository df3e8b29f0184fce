use super::{Condition, Join, Pagination, WhereClause};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder as SqlxQueryBuilder};

/// Sort direction for ORDER BY terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Query builder for SELECTs over a base table with joins and AND-ed conditions.
///
/// Values never appear in the SQL text; every condition value is sent as a
/// bind parameter when the query is executed.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_table: String,
    select_fields: Vec<String>,
    joins: Vec<Join>,
    where_clause: WhereClause,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
}

impl QueryBuilder {
    /// Create a new query builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            select_fields: vec!["*".to_string()],
            joins: Vec::new(),
            where_clause: WhereClause::default(),
            order_by: Vec::new(),
            pagination: None,
        }
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Add an INNER JOIN
    pub fn inner_join(self, table: &str, on_condition: &str) -> Self {
        self.join(Join::inner(table, on_condition))
    }

    /// Add a LEFT OUTER JOIN
    pub fn left_join(self, table: &str, on_condition: &str) -> Self {
        self.join(Join::left(table, on_condition))
    }

    /// Add a WHERE condition, AND-ed with any existing ones
    pub fn where_condition(mut self, condition: Condition) -> Self {
        self.where_clause.push(condition);
        self
    }

    /// Add every condition in `conditions`; an empty iterator leaves the query unrestricted
    pub fn where_all(self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        conditions
            .into_iter()
            .fold(self, |query, condition| query.where_condition(condition))
    }

    /// Add ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: OrderDirection) -> Self {
        self.order_by
            .push(format!("{} {}", field, direction.to_sql()));
        self
    }

    /// Add ORDER BY ASC
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, OrderDirection::Asc)
    }

    /// Add ORDER BY DESC
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, OrderDirection::Desc)
    }

    /// Add LIMIT/OFFSET from an explicit window
    pub fn window(mut self, limit: u32, offset: u64) -> Self {
        self.pagination = Some(Pagination::limit_offset(limit, offset));
        self
    }

    /// Add LIMIT clause
    pub fn limit(mut self, limit: u32) -> Self {
        if let Some(ref mut pagination) = self.pagination {
            pagination.limit = Some(limit);
        } else {
            self.pagination = Some(Pagination::limit_only(limit));
        }
        self
    }

    /// Add OFFSET clause
    pub fn offset(mut self, offset: u64) -> Self {
        if let Some(ref mut pagination) = self.pagination {
            pagination.offset = Some(offset);
        } else {
            self.pagination = Some(Pagination::offset_only(offset));
        }
        self
    }

    pub fn where_clause(&self) -> &WhereClause {
        &self.where_clause
    }

    /// Derive the COUNT(*) query: same FROM/JOIN/WHERE, no ordering or window
    pub fn count_query(&self) -> Self {
        let mut count_builder = self.clone();
        count_builder.select_fields = vec!["COUNT(*)".to_string()];
        count_builder.order_by.clear();
        count_builder.pagination = None;
        count_builder
    }

    fn head_sql(&self) -> String {
        let mut sql = String::new();

        sql.push_str("SELECT ");
        sql.push_str(&self.select_fields.join(", "));
        sql.push_str(&format!(" FROM {}", self.base_table));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }

        sql
    }

    fn tail_sql(&self) -> String {
        let mut sql = String::new();

        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }

    /// Build the complete SQL query string with `$n` placeholders
    pub fn build_sql(&self) -> String {
        let mut sql = self.head_sql();

        if !self.where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clause.to_sql(1));
        }

        sql.push_str(&self.tail_sql());
        sql
    }

    /// Lower into an sqlx builder carrying the bind values
    pub fn to_sqlx(&self) -> SqlxQueryBuilder<'static, Postgres> {
        let mut builder = SqlxQueryBuilder::new(self.head_sql());
        self.where_clause.push_to(&mut builder);
        builder.push(self.tail_sql());
        builder
    }

    /// Execute the query and return all rows
    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut builder = self.to_sqlx();
        builder.build_query_as::<T>().fetch_all(pool).await
    }

    /// Execute count query
    pub async fn count(&self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let mut builder = self.count_query().to_sqlx();
        builder.build_query_scalar::<i64>().fetch_one(pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_team_query() -> QueryBuilder {
        QueryBuilder::new("member m")
            .select(&["m.member_id", "m.username", "t.name AS team_name"])
            .left_join("team t", "m.team_id = t.team_id")
    }

    #[test]
    fn test_basic_query_building() {
        let query = QueryBuilder::new("member")
            .select(&["member_id", "username", "age"])
            .where_condition(Condition::eq("username", "member1"))
            .order_desc("username")
            .limit(10);

        assert_eq!(
            query.build_sql(),
            "SELECT member_id, username, age FROM member WHERE username = $1 ORDER BY username DESC LIMIT 10"
        );
    }

    #[test]
    fn test_join_query_building() {
        let sql = member_team_query().build_sql();
        assert_eq!(
            sql,
            "SELECT m.member_id, m.username, t.name AS team_name FROM member m LEFT OUTER JOIN team t ON m.team_id = t.team_id"
        );
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_where_all_and_window() {
        let query = member_team_query()
            .where_all(vec![
                Condition::eq("t.name", "teamB"),
                Condition::ge("m.age", 35),
            ])
            .order_asc("m.member_id")
            .window(2, 1);

        assert_eq!(
            query.build_sql(),
            "SELECT m.member_id, m.username, t.name AS team_name FROM member m \
             LEFT OUTER JOIN team t ON m.team_id = t.team_id \
             WHERE t.name = $1 AND m.age >= $2 ORDER BY m.member_id ASC LIMIT 2 OFFSET 1"
        );
    }

    #[test]
    fn test_count_query_drops_order_and_window() {
        let query = member_team_query()
            .where_condition(Condition::le("m.age", 40))
            .order_desc("m.username")
            .window(10, 20);

        assert_eq!(
            query.count_query().build_sql(),
            "SELECT COUNT(*) FROM member m LEFT OUTER JOIN team t ON m.team_id = t.team_id WHERE m.age <= $1"
        );
    }

    #[test]
    fn test_to_sqlx_matches_build_sql() {
        let query = member_team_query()
            .where_all(vec![
                Condition::eq("m.username", "member4"),
                Condition::ge("m.age", 35),
                Condition::le("m.age", 40),
            ])
            .order_asc("m.member_id")
            .window(20, 0);

        assert_eq!(query.to_sqlx().sql(), query.build_sql());
    }
}
