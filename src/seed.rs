//! Sample data for local runs.

use tracing::info;

use crate::error::Result;
use crate::models::{NewMember, NewTeam};
use crate::repository::MemberStore;

/// Create `teamA` and `teamB`, then `member0..member{count-1}` with age equal
/// to the index. Even indexes join teamA, odd ones teamB.
pub async fn seed_sample_data<S: MemberStore + ?Sized>(store: &S, member_count: u32) -> Result<()> {
    let team_a = store.save_team(NewTeam::new("teamA")).await?;
    let team_b = store.save_team(NewTeam::new("teamB")).await?;

    for i in 0..member_count {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        let age = i32::try_from(i).unwrap_or(i32::MAX);
        store
            .save_member(NewMember::with_team(format!("member{i}"), age, team.team_id))
            .await?;
    }

    info!(
        member_count = member_count,
        team_count = 2,
        "Sample data seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMemberStore;
    use crate::search::{MemberSearchCondition, MemberSearchService, PageRequest};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_layout() {
        let store = Arc::new(InMemoryMemberStore::new());
        seed_sample_data(store.as_ref(), 100).await.unwrap();

        let members = store.find_all_members().await.unwrap();
        assert_eq!(members.len(), 100);
        assert_eq!(members[7].username.as_deref(), Some("member7"));
        assert_eq!(members[7].age, 7);

        let service = MemberSearchService::new(Arc::clone(&store));
        let team_a = service
            .search(&MemberSearchCondition::new().team_name("teamA"))
            .await
            .unwrap();
        assert_eq!(team_a.len(), 50);
        assert!(team_a.iter().all(|row| row.age % 2 == 0));
    }

    #[tokio::test]
    async fn test_seeded_page_counts() {
        let store = Arc::new(InMemoryMemberStore::new());
        seed_sample_data(store.as_ref(), 100).await.unwrap();
        let service = MemberSearchService::new(store);

        let condition = MemberSearchCondition::new().age_goe(10).age_loe(19);
        let page = service
            .search_page_complex(&condition, &PageRequest::of(0, 20).unwrap())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 10);
        assert_eq!(page.content.len(), 10);
    }
}
