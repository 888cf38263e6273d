use crate::search::criteria::SearchCriteria;
use crate::search::query::QueryString;

/// A 1-indexed window over a search result, where
/// `offset = (page - 1) * limit`.
///
/// Built from a criteria plus the total reported by a previous response. The
/// pagination owns an independent clone, so deriving a page never mutates the
/// criteria it came from.
#[derive(Debug, Clone)]
pub struct Pagination {
    criteria: SearchCriteria,
    limit: u32,
    current_page: u32,
    total_pages: u32,
}

impl Pagination {
    pub fn from_search(criteria: &SearchCriteria, total: u32) -> Self {
        let limit = criteria.current_limit();

        Self {
            criteria: criteria.clone(),
            limit,
            current_page: criteria.current_offset() / limit + 1,
            total_pages: (total + limit - 1) / limit,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Pages past the last one are not an error here; the API simply answers
    /// them with zero results.
    pub fn query_string_for_page(&self, page: u32) -> QueryString {
        self.criteria
            .clone()
            .offset(page.saturating_sub(1) * self.limit)
            .to_query_string()
    }
}
