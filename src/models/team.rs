use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::member::Member;

/// A team owning zero or more members.
///
/// The member collection is never stored on the team row; each member carries
/// the foreign key, and [`Team::members`] derives the view from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: i64,
    pub name: String,
}

/// New Team for creation (without generated fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Team {
    /// Create a new team
    pub async fn create(pool: &PgPool, new_team: NewTeam) -> Result<Team, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO team (name)
            VALUES ($1)
            RETURNING team_id, name
            "#,
        )
        .bind(new_team.name)
        .fetch_one(pool)
        .await
    }

    /// Find a team by ID
    pub async fn find_by_id(pool: &PgPool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>("SELECT team_id, name FROM team WHERE team_id = $1")
            .bind(team_id)
            .fetch_optional(pool)
            .await
    }

    /// Members referencing this team, in identity order
    pub async fn members(&self, pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        Member::find_by_team(pool, self.team_id).await
    }
}
