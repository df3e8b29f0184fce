//! PostgreSQL [`MemberStore`] built on SQLx.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::MemberStore;
use crate::error::{MemberSearchError, Result};
use crate::models::{Member, MemberChanges, MemberTeamDto, NewMember, NewTeam, Team};
use crate::query_builder::{OrderDirection, QueryBuilder};
use crate::search::{PageRequest, Predicate, SortDirection, SortProperty};

const MEMBER_TEAM_COLUMNS: &[&str] = &[
    "m.member_id",
    "m.username",
    "m.age",
    "t.team_id",
    "t.name AS team_name",
];

const ID_ORDER_COLUMN: &str = "m.member_id";

fn sort_column(property: SortProperty) -> &'static str {
    match property {
        SortProperty::Id => ID_ORDER_COLUMN,
        SortProperty::Username => "m.username",
        SortProperty::Age => "m.age",
        SortProperty::TeamName => "t.name",
    }
}

/// `member m LEFT OUTER JOIN team t` restricted by the predicates
pub(crate) fn member_team_query(predicates: &[Predicate]) -> QueryBuilder {
    QueryBuilder::new("member m")
        .select(MEMBER_TEAM_COLUMNS)
        .left_join("team t", "m.team_id = t.team_id")
        .where_all(predicates.iter().map(Predicate::to_condition))
}

/// Content query: ordered, windowed when a page is given
pub(crate) fn member_team_page_query(
    predicates: &[Predicate],
    page: Option<&PageRequest>,
) -> QueryBuilder {
    let mut query = member_team_query(predicates);

    if let Some(sort) = page.and_then(PageRequest::sort) {
        if sort.property != SortProperty::Id {
            let direction = match sort.direction {
                SortDirection::Asc => OrderDirection::Asc,
                SortDirection::Desc => OrderDirection::Desc,
            };
            query = query.order_by(sort_column(sort.property), direction);
        } else if sort.direction == SortDirection::Desc {
            return apply_window(query.order_desc(ID_ORDER_COLUMN), page);
        }
    }

    apply_window(query.order_asc(ID_ORDER_COLUMN), page)
}

fn apply_window(query: QueryBuilder, page: Option<&PageRequest>) -> QueryBuilder {
    match page {
        Some(page) => query.window(page.size(), page.offset()),
        None => query,
    }
}

#[derive(Debug, Clone)]
pub struct PgMemberStore {
    pool: PgPool,
}

impl PgMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn fetch_member_teams(
        &self,
        predicates: &[Predicate],
        page: Option<&PageRequest>,
    ) -> Result<Vec<MemberTeamDto>> {
        let query = member_team_page_query(predicates, page);
        debug!(sql = %query.build_sql(), "Fetching member/team rows");

        let rows = query.fetch_all::<MemberTeamDto>(&self.pool).await?;
        Ok(rows)
    }

    async fn count_member_teams(&self, predicates: &[Predicate]) -> Result<u64> {
        let query = member_team_query(predicates);
        debug!(sql = %query.count_query().build_sql(), "Counting member/team rows");

        let total = query.count(&self.pool).await?;
        u64::try_from(total)
            .map_err(|_| MemberSearchError::Internal(format!("negative row count {total}")))
    }

    async fn save_team(&self, team: NewTeam) -> Result<Team> {
        Ok(Team::create(&self.pool, team).await?)
    }

    async fn save_member(&self, member: NewMember) -> Result<Member> {
        Ok(Member::create(&self.pool, member).await?)
    }

    async fn find_member_by_id(&self, member_id: i64) -> Result<Option<Member>> {
        Ok(Member::find_by_id(&self.pool, member_id).await?)
    }

    async fn find_all_members(&self) -> Result<Vec<Member>> {
        Ok(Member::list_all(&self.pool).await?)
    }

    async fn find_members_by_username(&self, username: &str) -> Result<Vec<Member>> {
        Ok(Member::find_by_username(&self.pool, username).await?)
    }

    async fn update_member(
        &self,
        member_id: i64,
        changes: MemberChanges,
    ) -> Result<Option<Member>> {
        Ok(Member::update(&self.pool, member_id, &changes).await?)
    }

    async fn delete_member(&self, member_id: i64) -> Result<bool> {
        Ok(Member::delete(&self.pool, member_id).await?)
    }

    async fn find_team_by_id(&self, team_id: i64) -> Result<Option<Team>> {
        Ok(Team::find_by_id(&self.pool, team_id).await?)
    }

    async fn find_team_members(&self, team_id: i64) -> Result<Vec<Member>> {
        Ok(Member::find_by_team(&self.pool, team_id).await?)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
