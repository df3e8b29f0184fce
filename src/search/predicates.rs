//! Maps each optional search field to at most one predicate fragment.
//!
//! Absent or blank fields yield no fragment at all, never a tautology, so
//! the composed list can be folded with AND directly. An empty list means
//! the query is unrestricted.

use super::condition::MemberSearchCondition;
use crate::models::MemberTeamDto;
use crate::query_builder::Condition;

pub const USERNAME_COLUMN: &str = "m.username";
pub const TEAM_NAME_COLUMN: &str = "t.name";
pub const AGE_COLUMN: &str = "m.age";

/// One independent filter over the member/team outer join
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl Predicate {
    /// Lower into a bound SQL condition against the `member m` / `team t` aliases
    pub fn to_condition(&self) -> Condition {
        match self {
            Predicate::UsernameEq(username) => Condition::eq(USERNAME_COLUMN, username.as_str()),
            Predicate::TeamNameEq(team_name) => Condition::eq(TEAM_NAME_COLUMN, team_name.as_str()),
            Predicate::AgeGoe(age) => Condition::ge(AGE_COLUMN, *age),
            Predicate::AgeLoe(age) => Condition::le(AGE_COLUMN, *age),
        }
    }

    /// Evaluate against an already-projected row.
    ///
    /// A NULL column never compares equal, so a member without a team never
    /// matches a team-name predicate.
    pub fn matches(&self, row: &MemberTeamDto) -> bool {
        match self {
            Predicate::UsernameEq(username) => row.username.as_deref() == Some(username.as_str()),
            Predicate::TeamNameEq(team_name) => row.team_name.as_deref() == Some(team_name.as_str()),
            Predicate::AgeGoe(age) => row.age >= *age,
            Predicate::AgeLoe(age) => row.age <= *age,
        }
    }
}

fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn username_eq(username: Option<&str>) -> Option<Predicate> {
    has_text(username).map(|u| Predicate::UsernameEq(u.to_string()))
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<Predicate> {
    has_text(team_name).map(|t| Predicate::TeamNameEq(t.to_string()))
}

pub fn age_goe(age: Option<i32>) -> Option<Predicate> {
    age.map(Predicate::AgeGoe)
}

pub fn age_loe(age: Option<i32>) -> Option<Predicate> {
    age.map(Predicate::AgeLoe)
}

/// Compose the fragments for every present field, in field order
pub fn compose(condition: &MemberSearchCondition) -> Vec<Predicate> {
    [
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// AND-fold over the fragments; true for an empty slice
pub fn matches_all(predicates: &[Predicate], row: &MemberTeamDto) -> bool {
    predicates.iter().all(|p| p.matches(row))
}
