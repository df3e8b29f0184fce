//! In-memory [`MemberStore`].
//!
//! Mirrors the PostgreSQL store's ordering and NULL semantics: NULL sorts as
//! the largest value, so it comes last ascending and first descending.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use super::MemberStore;
use crate::error::{MemberSearchError, Result};
use crate::models::{Member, MemberChanges, MemberTeamDto, NewMember, NewTeam, Team};
use crate::search::predicates::matches_all;
use crate::search::{PageRequest, Predicate, Sort, SortDirection, SortProperty};

/// Round trips served since creation or the last [`InMemoryMemberStore::reset_stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub content_queries: u64,
    pub count_queries: u64,
}

#[derive(Debug, Default)]
struct Tables {
    teams: Vec<Team>,
    members: Vec<Member>,
    next_team_id: i64,
    next_member_id: i64,
}

impl Tables {
    fn team_name(&self, team_id: Option<i64>) -> Option<String> {
        let team_id = team_id?;
        self.teams
            .iter()
            .find(|t| t.team_id == team_id)
            .map(|t| t.name.clone())
    }

    fn ensure_team(&self, team_id: Option<i64>) -> Result<()> {
        match team_id {
            Some(id) if !self.teams.iter().any(|t| t.team_id == id) => Err(
                MemberSearchError::Internal(format!("team {id} does not exist")),
            ),
            _ => Ok(()),
        }
    }

    fn joined(&self) -> impl Iterator<Item = MemberTeamDto> + '_ {
        self.members.iter().map(|m| {
            let team_name = self.team_name(m.team_id);
            MemberTeamDto {
                member_id: m.member_id,
                username: m.username.clone(),
                age: m.age,
                // Outer join: team columns are NULL together when the team is missing
                team_id: team_name.as_ref().and(m.team_id),
                team_name,
            }
        })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryMemberStore {
    tables: RwLock<Tables>,
    content_queries: AtomicU64,
    count_queries: AtomicU64,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            content_queries: self.content_queries.load(AtomicOrdering::Relaxed),
            count_queries: self.count_queries.load(AtomicOrdering::Relaxed),
        }
    }

    pub fn reset_stats(&self) {
        self.content_queries.store(0, AtomicOrdering::Relaxed);
        self.count_queries.store(0, AtomicOrdering::Relaxed);
    }
}

/// NULL compares greater than any value
fn nulls_high<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare_rows(a: &MemberTeamDto, b: &MemberTeamDto, sort: Option<Sort>) -> Ordering {
    let primary = match sort {
        None => Ordering::Equal,
        Some(sort) => {
            let ordering = match sort.property {
                SortProperty::Id => a.member_id.cmp(&b.member_id),
                SortProperty::Username => nulls_high(&a.username, &b.username),
                SortProperty::Age => a.age.cmp(&b.age),
                SortProperty::TeamName => nulls_high(&a.team_name, &b.team_name),
            };
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    };

    primary.then_with(|| a.member_id.cmp(&b.member_id))
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn fetch_member_teams(
        &self,
        predicates: &[Predicate],
        page: Option<&PageRequest>,
    ) -> Result<Vec<MemberTeamDto>> {
        self.content_queries.fetch_add(1, AtomicOrdering::Relaxed);

        let mut rows: Vec<MemberTeamDto> = {
            let tables = self.tables.read();
            tables
                .joined()
                .filter(|row| matches_all(predicates, row))
                .collect()
        };
        rows.sort_by(|a, b| compare_rows(a, b, page.and_then(|p| p.sort())));

        let rows = match page {
            Some(page) => {
                let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
                rows.into_iter()
                    .skip(offset)
                    .take(page.size() as usize)
                    .collect()
            }
            None => rows,
        };

        debug!(
            predicate_count = predicates.len(),
            row_count = rows.len(),
            "In-memory member/team fetch"
        );
        Ok(rows)
    }

    async fn count_member_teams(&self, predicates: &[Predicate]) -> Result<u64> {
        self.count_queries.fetch_add(1, AtomicOrdering::Relaxed);

        let tables = self.tables.read();
        let total = tables
            .joined()
            .filter(|row| matches_all(predicates, row))
            .count() as u64;

        debug!(predicate_count = predicates.len(), total = total, "In-memory member/team count");
        Ok(total)
    }

    async fn save_team(&self, team: NewTeam) -> Result<Team> {
        let mut tables = self.tables.write();
        tables.next_team_id += 1;
        let team = Team {
            team_id: tables.next_team_id,
            name: team.name,
        };
        tables.teams.push(team.clone());
        Ok(team)
    }

    async fn save_member(&self, member: NewMember) -> Result<Member> {
        let mut tables = self.tables.write();
        tables.ensure_team(member.team_id)?;
        tables.next_member_id += 1;
        let member = Member {
            member_id: tables.next_member_id,
            username: member.username,
            age: member.age,
            team_id: member.team_id,
        };
        tables.members.push(member.clone());
        Ok(member)
    }

    async fn find_member_by_id(&self, member_id: i64) -> Result<Option<Member>> {
        let tables = self.tables.read();
        Ok(tables
            .members
            .iter()
            .find(|m| m.member_id == member_id)
            .cloned())
    }

    async fn find_all_members(&self) -> Result<Vec<Member>> {
        Ok(self.tables.read().members.clone())
    }

    async fn find_members_by_username(&self, username: &str) -> Result<Vec<Member>> {
        let tables = self.tables.read();
        Ok(tables
            .members
            .iter()
            .filter(|m| m.username.as_deref() == Some(username))
            .cloned()
            .collect())
    }

    async fn update_member(
        &self,
        member_id: i64,
        changes: MemberChanges,
    ) -> Result<Option<Member>> {
        let mut tables = self.tables.write();
        if let Some(team_id) = changes.team_id {
            tables.ensure_team(team_id)?;
        }

        let Some(member) = tables.members.iter_mut().find(|m| m.member_id == member_id) else {
            return Ok(None);
        };
        changes.apply_to(member);
        Ok(Some(member.clone()))
    }

    async fn delete_member(&self, member_id: i64) -> Result<bool> {
        let mut tables = self.tables.write();
        let before = tables.members.len();
        tables.members.retain(|m| m.member_id != member_id);
        Ok(tables.members.len() < before)
    }

    async fn find_team_by_id(&self, team_id: i64) -> Result<Option<Team>> {
        let tables = self.tables.read();
        Ok(tables.teams.iter().find(|t| t.team_id == team_id).cloned())
    }

    async fn find_team_members(&self, team_id: i64) -> Result<Vec<Member>> {
        let tables = self.tables.read();
        Ok(tables
            .members
            .iter()
            .filter(|m| m.team_id == Some(team_id))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
