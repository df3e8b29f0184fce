//! Page requests, sorting, and page assembly with an optional count query.

use std::future::Future;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{MemberSearchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Properties a member search can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortProperty {
    Id,
    Username,
    Age,
    TeamName,
}

impl FromStr for SortProperty {
    type Err = MemberSearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "id" | "memberId" => Ok(SortProperty::Id),
            "username" => Ok(SortProperty::Username),
            "age" => Ok(SortProperty::Age),
            "teamName" => Ok(SortProperty::TeamName),
            other => Err(MemberSearchError::InvalidSort(format!(
                "unknown sort property '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }
}

/// Parses `property` or `property,direction` (direction is case-insensitive)
impl FromStr for Sort {
    type Err = MemberSearchError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(2, ',');
        let property = parts.next().unwrap_or_default().parse()?;
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => SortDirection::Asc,
            Some(d) if d.is_empty() || d == "asc" => SortDirection::Asc,
            Some(d) if d == "desc" => SortDirection::Desc,
            Some(d) => {
                return Err(MemberSearchError::InvalidSort(format!(
                    "unknown sort direction '{d}'"
                )))
            }
        };

        Ok(Self {
            property,
            direction,
        })
    }
}

/// Offset/limit window for a paged search.
///
/// `offset` is normally `page * size`; [`PageRequest::at_offset`] allows a
/// window that is not aligned to page boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    offset: u64,
    sort: Option<Sort>,
}

impl PageRequest {
    /// Zero-based page `page` of `size` rows
    pub fn of(page: u32, size: u32) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self {
            page,
            size,
            offset: u64::from(page) * u64::from(size),
            sort: None,
        })
    }

    /// Window of `size` rows starting at row `offset`
    pub fn at_offset(offset: u64, size: u32) -> Result<Self> {
        Self::check_size(size)?;
        let page = u32::try_from(offset / u64::from(size)).map_err(|_| {
            MemberSearchError::InvalidPageRequest(format!("offset {offset} is out of range"))
        })?;
        Ok(Self {
            page,
            size,
            offset,
            sort: None,
        })
    }

    fn check_size(size: u32) -> Result<()> {
        if size == 0 {
            return Err(MemberSearchError::InvalidPageRequest(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }
}

/// A page of results with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(
    feature = "web-api",
    derive(utoipa::ToSchema),
    aliases(MemberTeamPage = Page<crate::models::MemberTeamDto>)
)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
    pub offset: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = request.size();
        let offset = request.offset();
        let number_of_elements = content.len();
        let total_pages = total_elements.div_ceil(u64::from(size));
        let has_next = offset + (number_of_elements as u64) < total_elements;

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page(),
            size,
            offset,
            number_of_elements,
            first: offset == 0,
            last: !has_next,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.last
    }

    pub fn has_previous(&self) -> bool {
        !self.first
    }
}

/// Total row count when it can be derived from the first page alone.
///
/// On the first page a short result proves no further rows exist, so the
/// total is just the content length.
pub fn total_from_content(request: &PageRequest, content_len: usize) -> Option<u64> {
    let content_len = content_len as u64;
    if request.offset() == 0 && content_len < u64::from(request.size()) {
        Some(request.offset() + content_len)
    } else {
        None
    }
}

/// Assemble a page, running `count` only when the total cannot be derived.
///
/// Returns the page and whether the count query was skipped.
pub async fn page_with_lazy_count<T, F, Fut>(
    content: Vec<T>,
    request: &PageRequest,
    count: F,
) -> Result<(Page<T>, bool)>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64>>,
{
    match total_from_content(request, content.len()) {
        Some(total) => {
            debug!(
                offset = request.offset(),
                size = request.size(),
                total = total,
                "Count query skipped; total derived from page content"
            );
            Ok((Page::new(content, request, total), true))
        }
        None => {
            let total = count().await?;
            Ok((Page::new(content, request, total), false))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offsets() {
        let request = PageRequest::of(2, 10).unwrap();
        assert_eq!(request.offset(), 20);
        assert_eq!(request.page(), 2);

        let request = PageRequest::at_offset(1, 2).unwrap();
        assert_eq!(request.offset(), 1);
        assert_eq!(request.page(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PageRequest::of(0, 0),
            Err(MemberSearchError::InvalidPageRequest(_))
        ));
        assert!(PageRequest::at_offset(5, 0).is_err());
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(
            "username,desc".parse::<Sort>().unwrap(),
            Sort::desc(SortProperty::Username)
        );
        assert_eq!("age".parse::<Sort>().unwrap(), Sort::asc(SortProperty::Age));
        assert_eq!(
            "teamName,ASC".parse::<Sort>().unwrap(),
            Sort::asc(SortProperty::TeamName)
        );
        assert!(matches!(
            "height,desc".parse::<Sort>(),
            Err(MemberSearchError::InvalidSort(_))
        ));
        assert!("age,sideways".parse::<Sort>().is_err());
    }

    #[test]
    fn test_page_metadata() {
        let request = PageRequest::of(1, 2).unwrap();
        let page = Page::new(vec!["c", "d"], &request, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number_of_elements, 2);
        assert!(page.has_next());
        assert!(page.has_previous());
        assert!(!page.empty);

        let last = Page::new(vec!["e"], &PageRequest::of(2, 2).unwrap(), 5);
        assert!(last.last);
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_page_beyond_total() {
        let page: Page<&str> = Page::new(vec![], &PageRequest::of(9, 10).unwrap(), 4);
        assert!(page.empty);
        assert!(page.last);
        assert_eq!(page.total_elements, 4);
    }

    #[test]
    fn test_total_from_content() {
        let first = PageRequest::of(0, 10).unwrap();
        assert_eq!(total_from_content(&first, 4), Some(4));
        assert_eq!(total_from_content(&first, 0), Some(0));
        assert_eq!(total_from_content(&first, 10), None);

        let second = PageRequest::of(1, 10).unwrap();
        assert_eq!(total_from_content(&second, 3), None);
    }

    #[tokio::test]
    async fn test_lazy_count_skips_on_short_first_page() {
        let request = PageRequest::of(0, 5).unwrap();
        let (page, skipped) = page_with_lazy_count(vec![1, 2, 3], &request, || async {
            panic!("count must not run")
        })
        .await
        .unwrap();

        assert!(skipped);
        assert_eq!(page.total_elements, 3);
    }

    #[tokio::test]
    async fn test_lazy_count_runs_on_full_page() {
        let request = PageRequest::of(0, 3).unwrap();
        let (page, skipped) = page_with_lazy_count(vec![1, 2, 3], &request, || async { Ok(7) })
            .await
            .unwrap();

        assert!(!skipped);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 3);
    }
}
