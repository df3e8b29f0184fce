//! Store fixtures shared by the integration suites.

use std::sync::Arc;

use member_search::models::{NewMember, NewTeam};
use member_search::repository::{InMemoryMemberStore, MemberStore};
use member_search::search::MemberSearchCondition;

pub const TEAM_NAMES: [&str; 3] = ["teamA", "teamB", "teamC"];

/// A member to insert; `team` indexes [`TEAM_NAMES`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFixture {
    pub username: Option<String>,
    pub age: i32,
    pub team: Option<usize>,
}

impl MemberFixture {
    pub fn new(username: &str, age: i32, team: Option<usize>) -> Self {
        Self {
            username: Some(username.to_string()),
            age,
            team,
        }
    }

    pub fn team_name(&self) -> Option<&'static str> {
        self.team.map(|i| TEAM_NAMES[i])
    }

    /// Reference evaluation of a condition, written independently of the predicate code
    pub fn satisfies(&self, condition: &MemberSearchCondition) -> bool {
        fn blank(value: &Option<String>) -> bool {
            value.as_ref().map_or(true, |v| v.trim().is_empty())
        }

        let username_ok = blank(&condition.username)
            || self.username.as_deref() == condition.username.as_deref();
        let team_ok =
            blank(&condition.team_name) || self.team_name() == condition.team_name.as_deref();
        let goe_ok = condition.age_goe.map_or(true, |min| self.age >= min);
        let loe_ok = condition.age_loe.map_or(true, |max| self.age <= max);

        username_ok && team_ok && goe_ok && loe_ok
    }
}

/// In-memory store holding every team in [`TEAM_NAMES`] plus `members`, inserted in order
pub async fn memory_store_with(members: &[MemberFixture]) -> Arc<InMemoryMemberStore> {
    let store = Arc::new(InMemoryMemberStore::new());
    populate(store.as_ref(), members).await;
    store.reset_stats();
    store
}

/// Insert [`TEAM_NAMES`] then `members` into any store
pub async fn populate<S: MemberStore + ?Sized>(store: &S, members: &[MemberFixture]) {
    let mut team_ids = Vec::new();
    for name in TEAM_NAMES {
        let team = store.save_team(NewTeam::new(name)).await.unwrap();
        team_ids.push(team.team_id);
    }

    for fixture in members {
        store
            .save_member(NewMember {
                username: fixture.username.clone(),
                age: fixture.age,
                team_id: fixture.team.map(|i| team_ids[i]),
            })
            .await
            .unwrap();
    }
}

/// teamA: member1 (10), member2 (20); teamB: member3 (30), member4 (40)
pub fn sample_members() -> Vec<MemberFixture> {
    vec![
        MemberFixture::new("member1", 10, Some(0)),
        MemberFixture::new("member2", 20, Some(0)),
        MemberFixture::new("member3", 30, Some(1)),
        MemberFixture::new("member4", 40, Some(1)),
    ]
}
