use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

const MEMBER_COLUMNS: &str = "member_id, username, age, team_id";

/// A member row. `team_id` is the owning side of the member/team relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

/// New Member for creation (without generated fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

impl NewMember {
    /// Member with a username and age 0
    pub fn named(username: impl Into<String>) -> Self {
        Self::new(username, 0)
    }

    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    pub fn with_team(username: impl Into<String>, age: i32, team_id: i64) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::new(username, age)
        }
    }
}

/// Field updates for an existing member; `None` leaves a field untouched.
///
/// `team_id: Some(None)` unassigns the member from its team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberChanges {
    pub username: Option<Option<String>>,
    pub age: Option<i32>,
    pub team_id: Option<Option<i64>>,
}

impl MemberChanges {
    /// Apply the changes to an in-memory member
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(username) = &self.username {
            member.username = username.clone();
        }
        if let Some(age) = self.age {
            member.age = age;
        }
        if let Some(team_id) = self.team_id {
            member.team_id = team_id;
        }
    }
}

/// Read-only projection of a member joined (outer) with its team.
///
/// Team fields are `None` when the member has no team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "web-api", derive(utoipa::ToSchema))]
pub struct MemberTeamDto {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl Member {
    /// Create a new member
    pub async fn create(pool: &PgPool, new_member: NewMember) -> Result<Member, sqlx::Error> {
        sqlx::query_as::<_, Member>(&format!(
            "INSERT INTO member (username, age, team_id) VALUES ($1, $2, $3) RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(new_member.username)
        .bind(new_member.age)
        .bind(new_member.team_id)
        .fetch_one(pool)
        .await
    }

    /// Find a member by ID
    pub async fn find_by_id(pool: &PgPool, member_id: i64) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member WHERE member_id = $1"
        ))
        .bind(member_id)
        .fetch_optional(pool)
        .await
    }

    /// List all members in identity order
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member ORDER BY member_id"
        ))
        .fetch_all(pool)
        .await
    }

    /// Find members by exact username
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member WHERE username = $1 ORDER BY member_id"
        ))
        .bind(username)
        .fetch_all(pool)
        .await
    }

    /// Find the members of a team
    pub async fn find_by_team(pool: &PgPool, team_id: i64) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member WHERE team_id = $1 ORDER BY member_id"
        ))
        .bind(team_id)
        .fetch_all(pool)
        .await
    }

    /// Update a member in place, returning the stored row
    pub async fn update(
        pool: &PgPool,
        member_id: i64,
        changes: &MemberChanges,
    ) -> Result<Option<Member>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member WHERE member_id = $1 FOR UPDATE"
        ))
        .bind(member_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut member) = current else {
            return Ok(None);
        };
        changes.apply_to(&mut member);

        let updated = sqlx::query_as::<_, Member>(&format!(
            "UPDATE member SET username = $2, age = $3, team_id = $4 WHERE member_id = $1 RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(member_id)
        .bind(member.username)
        .bind(member.age)
        .bind(member.team_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a member by ID; returns whether a row was removed
    pub async fn delete(pool: &PgPool, member_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM member WHERE member_id = $1")
            .bind(member_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
