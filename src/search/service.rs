//! Member search service.
//!
//! Composes predicates from a [`MemberSearchCondition`] and runs them through a
//! [`MemberStore`]. The two paging entry points differ only in how the total
//! is obtained: `search_page_simple` always issues the count query, while
//! `search_page_complex` skips it when the first page is already short.

use std::sync::Arc;

use tracing::{debug, info};

use super::condition::MemberSearchCondition;
use super::page::{page_with_lazy_count, Page, PageRequest};
use super::predicates::compose;
use crate::error::Result;
use crate::models::MemberTeamDto;
use crate::repository::MemberStore;

#[derive(Debug)]
pub struct MemberSearchService<S: MemberStore + ?Sized> {
    store: Arc<S>,
}

impl<S: MemberStore + ?Sized> Clone for MemberSearchService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: MemberStore + ?Sized> MemberSearchService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Every matching row in default order
    pub async fn search(&self, condition: &MemberSearchCondition) -> Result<Vec<MemberTeamDto>> {
        let predicates = compose(condition);
        debug!(predicate_count = predicates.len(), "Running unpaged member search");

        let content = self.store.fetch_member_teams(&predicates, None).await?;

        info!(
            predicate_count = predicates.len(),
            result_count = content.len(),
            "Member search completed"
        );
        Ok(content)
    }

    /// One page plus a total from an unconditional count query
    pub async fn search_page_simple(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamDto>> {
        let predicates = compose(condition);
        debug!(
            predicate_count = predicates.len(),
            offset = request.offset(),
            size = request.size(),
            "Running paged member search with count"
        );

        let (content, total) = self
            .store
            .fetch_member_teams_with_total(&predicates, request)
            .await?;
        let page = Page::new(content, request, total);

        info!(
            predicate_count = predicates.len(),
            offset = request.offset(),
            size = request.size(),
            total_elements = page.total_elements,
            count_skipped = false,
            "Paged member search completed"
        );
        Ok(page)
    }

    /// One page, issuing the count query only when the content cannot decide the total
    pub async fn search_page_complex(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamDto>> {
        let predicates = compose(condition);
        debug!(
            predicate_count = predicates.len(),
            offset = request.offset(),
            size = request.size(),
            "Running paged member search with deferred count"
        );

        let content = self
            .store
            .fetch_member_teams(&predicates, Some(request))
            .await?;

        let store = &self.store;
        let predicates_ref = &predicates;
        let (page, count_skipped) = page_with_lazy_count(content, request, || async move {
            store.count_member_teams(predicates_ref).await
        })
        .await?;

        info!(
            predicate_count = predicates.len(),
            offset = request.offset(),
            size = request.size(),
            total_elements = page.total_elements,
            count_skipped = count_skipped,
            "Paged member search completed"
        );
        Ok(page)
    }
}
