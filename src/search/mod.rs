//! # Member Search
//!
//! Condition object, predicate composition, paging, and the service tying
//! them to a [`crate::repository::MemberStore`].

pub mod condition;
pub mod page;
pub mod predicates;
pub mod service;

pub use condition::MemberSearchCondition;
pub use page::{Page, PageRequest, Sort, SortDirection, SortProperty};
pub use predicates::{compose, Predicate};
pub use service::MemberSearchService;
