mod common;

use common::*;
use member_search::repository::MemberStore;
use member_search::search::{MemberSearchService, PageRequest};
use proptest::prelude::*;

proptest! {
    /// Property: both paging policies return identical pages
    #[test]
    fn simple_and_complex_pages_agree(
        members in members_strategy(),
        condition in condition_strategy(),
        (page, size) in page_window_strategy(),
    ) {
        let (simple, complex) = tokio_test::block_on(async {
            let service = MemberSearchService::new(memory_store_with(&members).await);
            let request = PageRequest::of(page, size).unwrap();
            (
                service.search_page_simple(&condition, &request).await.unwrap(),
                service.search_page_complex(&condition, &request).await.unwrap(),
            )
        });

        prop_assert_eq!(simple, complex);
    }

    /// Property: the unpaged search equals one page large enough to hold everything
    #[test]
    fn unpaged_search_equals_large_page(
        members in members_strategy(),
        condition in condition_strategy(),
    ) {
        let (all, page) = tokio_test::block_on(async {
            let service = MemberSearchService::new(memory_store_with(&members).await);
            let request = PageRequest::of(0, 1_000).unwrap();
            (
                service.search(&condition).await.unwrap(),
                service.search_page_complex(&condition, &request).await.unwrap(),
            )
        });

        prop_assert_eq!(page.total_elements, all.len() as u64);
        prop_assert_eq!(page.content, all);
    }

    /// Property: a condition with nothing present is a full scan
    #[test]
    fn unrestricted_condition_is_full_scan(
        members in members_strategy(),
        condition in unrestricted_condition_strategy(),
    ) {
        let rows = tokio_test::block_on(async {
            let service = MemberSearchService::new(memory_store_with(&members).await);
            service.search(&condition).await.unwrap()
        });

        prop_assert_eq!(rows.len(), members.len());
    }

    /// Property: results are exactly the members satisfying every present field
    #[test]
    fn results_match_reference_filter(
        members in members_strategy(),
        condition in condition_strategy(),
    ) {
        let rows = tokio_test::block_on(async {
            let service = MemberSearchService::new(memory_store_with(&members).await);
            service.search(&condition).await.unwrap()
        });

        let expected: Vec<_> = members.iter().filter(|m| m.satisfies(&condition)).collect();
        prop_assert_eq!(rows.len(), expected.len());

        // Default order is insertion (member id) order
        for (row, fixture) in rows.iter().zip(expected) {
            prop_assert_eq!(&row.username, &fixture.username);
            prop_assert_eq!(row.age, fixture.age);
            prop_assert_eq!(row.team_name.as_deref(), fixture.team_name());
        }
    }

    /// Property: the total does not depend on the window, and content never exceeds size
    #[test]
    fn total_is_window_independent(
        members in members_strategy(),
        condition in condition_strategy(),
        (page, size) in page_window_strategy(),
    ) {
        let (first, other, count) = tokio_test::block_on(async {
            let store = memory_store_with(&members).await;
            let service = MemberSearchService::new(store.clone());
            let first = service
                .search_page_complex(&condition, &PageRequest::of(0, size).unwrap())
                .await
                .unwrap();
            let other = service
                .search_page_complex(&condition, &PageRequest::of(page, size).unwrap())
                .await
                .unwrap();
            let count = store
                .count_member_teams(&member_search::search::compose(&condition))
                .await
                .unwrap();
            (first, other, count)
        });

        prop_assert_eq!(first.total_elements, count);
        prop_assert_eq!(other.total_elements, count);
        prop_assert!(other.content.len() <= size as usize);
    }

    /// Property: the count query is skipped exactly when the first page is short
    #[test]
    fn count_skipped_only_for_short_first_page(
        members in members_strategy(),
        condition in condition_strategy(),
        (page, size) in page_window_strategy(),
    ) {
        let (content_len, stats) = tokio_test::block_on(async {
            let store = memory_store_with(&members).await;
            let service = MemberSearchService::new(store.clone());
            let result = service
                .search_page_complex(&condition, &PageRequest::of(page, size).unwrap())
                .await
                .unwrap();
            (result.content.len(), store.stats())
        });

        let skippable = page == 0 && content_len < size as usize;
        prop_assert_eq!(stats.content_queries, 1);
        prop_assert_eq!(stats.count_queries, if skippable { 0 } else { 1 });
    }
}

#[tokio::test]
async fn test_sorted_offset_window_from_sample() {
    use member_search::search::{MemberSearchCondition, Sort, SortProperty};

    let service = MemberSearchService::new(memory_store_with(&sample_members()).await);
    let request = PageRequest::at_offset(1, 2)
        .unwrap()
        .with_sort(Sort::desc(SortProperty::Username));

    let page = service
        .search_page_simple(&MemberSearchCondition::default(), &request)
        .await
        .unwrap();

    let names: Vec<_> = page
        .content
        .iter()
        .filter_map(|r| r.username.as_deref())
        .collect();
    assert_eq!(names, vec!["member3", "member2"]);
    assert_eq!(page.total_elements, 4);
}
