//! # Query Builder
//!
//! Small SQL building blocks used by the PostgreSQL store.
//!
//! ## Key Components
//!
//! - [`builder`] - SELECT assembly, count-query derivation and execution via SQLx
//! - [`conditions`] - Typed comparison conditions combined with AND
//! - [`joins`] - JOIN clauses (INNER, LEFT OUTER)
//! - [`pagination`] - LIMIT/OFFSET windows
//!
//! Condition values are always bound parameters. The SQL text only carries
//! column names, operators and `$n` placeholders.
//!
//! ## Example Usage
//!
//! ```rust
//! use member_search::query_builder::{Condition, QueryBuilder};
//!
//! let query = QueryBuilder::new("member m")
//!     .select(&["m.member_id", "m.username"])
//!     .left_join("team t", "m.team_id = t.team_id")
//!     .where_condition(Condition::eq("t.name", "teamB"))
//!     .order_asc("m.member_id")
//!     .window(20, 0);
//!
//! assert!(query.build_sql().contains("WHERE t.name = $1"));
//! ```

pub mod builder;
pub mod conditions;
pub mod joins;
pub mod pagination;

pub use builder::{OrderDirection, QueryBuilder};
pub use conditions::{ComparisonOperator, Condition, SqlValue, WhereClause};
pub use joins::{Join, JoinType};
pub use pagination::Pagination;
