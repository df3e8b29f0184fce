//! # Member Store
//!
//! Storage seam for members and teams. The search side reads the
//! member/team outer join; the data-access side covers the plain entity
//! operations.
//!
//! Two implementations ship with the crate:
//! - [`PgMemberStore`]: PostgreSQL through SQLx
//! - [`InMemoryMemberStore`]: vectors behind a lock, with round-trip counters

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Member, MemberChanges, MemberTeamDto, NewMember, NewTeam, Team};
use crate::search::{PageRequest, Predicate};

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryMemberStore, StoreStats};
pub use postgres::PgMemberStore;

#[async_trait]
pub trait MemberStore: Send + Sync + Debug {
    /// Rows of the member/team outer join matching every predicate.
    ///
    /// Ordered by the request's sort with member id as tiebreaker, or by
    /// member id alone. The window is applied before rows are materialized.
    async fn fetch_member_teams(
        &self,
        predicates: &[Predicate],
        page: Option<&PageRequest>,
    ) -> Result<Vec<MemberTeamDto>>;

    /// Number of joined rows matching every predicate, ignoring any window
    async fn count_member_teams(&self, predicates: &[Predicate]) -> Result<u64>;

    /// Content and total in two back-to-back round trips
    async fn fetch_member_teams_with_total(
        &self,
        predicates: &[Predicate],
        page: &PageRequest,
    ) -> Result<(Vec<MemberTeamDto>, u64)> {
        let content = self.fetch_member_teams(predicates, Some(page)).await?;
        let total = self.count_member_teams(predicates).await?;
        Ok((content, total))
    }

    async fn save_team(&self, team: NewTeam) -> Result<Team>;

    async fn save_member(&self, member: NewMember) -> Result<Member>;

    async fn find_member_by_id(&self, member_id: i64) -> Result<Option<Member>>;

    async fn find_all_members(&self) -> Result<Vec<Member>>;

    async fn find_members_by_username(&self, username: &str) -> Result<Vec<Member>>;

    /// `Ok(None)` when no member has this id
    async fn update_member(&self, member_id: i64, changes: MemberChanges)
        -> Result<Option<Member>>;

    async fn delete_member(&self, member_id: i64) -> Result<bool>;

    async fn find_team_by_id(&self, team_id: i64) -> Result<Option<Team>>;

    /// Members whose `team_id` points at this team
    async fn find_team_members(&self, team_id: i64) -> Result<Vec<Member>>;

    /// Cheap round trip used by health checks
    async fn ping(&self) -> Result<()>;
}
