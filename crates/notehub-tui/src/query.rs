// ABOUTME: Keyed query cache with request-id bookkeeping
// ABOUTME: Latest issued id wins; stale completions are discarded on arrival

use crate::types::PageQuery;
use notehub_client::FetchNotesResponse;
use std::collections::HashMap;

/// What happened to a completed request when it was handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Latest issued request; its result now owns the displayed state
    Accepted,
    /// Superseded while in flight; result discarded
    Stale,
}

/// Cache of list results keyed by [`PageQuery`]. Only the most recently
/// issued request is live at any time: issuing a fetch for a new key
/// supersedes the previous one, and a completion is accepted only when its
/// id still matches the latest issued id.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<PageQuery, FetchNotesResponse>,
    in_flight: Option<(u64, PageQuery)>,
    next_id: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &PageQuery) -> Option<&FetchNotesResponse> {
        self.entries.get(query)
    }

    /// True while any request is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Register intent to fetch `query`. Returns the request id to issue,
    /// or None when an identical query is already the latest in flight.
    pub fn request(&mut self, query: &PageQuery) -> Option<u64> {
        if let Some((_, in_flight)) = &self.in_flight {
            if in_flight == query {
                return None;
            }
        }
        self.next_id += 1;
        self.in_flight = Some((self.next_id, query.clone()));
        Some(self.next_id)
    }

    /// Hand back a completed request. On success the cache entry for the
    /// query is replaced, not merged. Errors pass `None` so the slot is
    /// freed without touching cached data.
    pub fn settle(
        &mut self,
        request_id: u64,
        query: &PageQuery,
        data: Option<FetchNotesResponse>,
    ) -> Settled {
        match &self.in_flight {
            Some((latest, _)) if *latest == request_id => {
                self.in_flight = None;
                if let Some(data) = data {
                    self.entries.insert(query.clone(), data);
                }
                Settled::Accepted
            }
            _ => Settled::Stale,
        }
    }

    /// Drop every cached page. Any outstanding request is orphaned so its
    /// late arrival is discarded too.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.in_flight = None;
    }

    #[cfg(test)]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total_pages: u32) -> FetchNotesResponse {
        FetchNotesResponse {
            notes: vec![],
            total: 0,
            page: 1,
            per_page: 12,
            total_pages,
        }
    }

    #[test]
    fn test_request_issues_increasing_ids() {
        let mut cache = QueryCache::new();
        let a = cache.request(&PageQuery::new(1, 12, "")).unwrap();
        cache.settle(a, &PageQuery::new(1, 12, ""), Some(page(1)));
        let b = cache.request(&PageQuery::new(2, 12, "")).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_request_dedupes_identical_in_flight_query() {
        let mut cache = QueryCache::new();
        let query = PageQuery::new(1, 12, "milk");
        assert!(cache.request(&query).is_some());
        assert!(cache.request(&query).is_none());
        assert!(cache.is_loading());
    }

    #[test]
    fn test_new_query_supersedes_old_request() {
        let mut cache = QueryCache::new();
        let first = PageQuery::new(1, 12, "");
        let second = PageQuery::new(2, 12, "");
        let id_a = cache.request(&first).unwrap();
        let id_b = cache.request(&second).unwrap();

        // B lands first and wins
        assert_eq!(cache.settle(id_b, &second, Some(page(3))), Settled::Accepted);
        // A's late arrival is discarded
        assert_eq!(cache.settle(id_a, &first, Some(page(9))), Settled::Stale);
        assert!(cache.get(&first).is_none());
        assert_eq!(cache.get(&second).unwrap().total_pages, 3);
    }

    #[test]
    fn test_settle_replaces_entry_wholesale() {
        let mut cache = QueryCache::new();
        let query = PageQuery::new(1, 12, "");
        let id = cache.request(&query).unwrap();
        cache.settle(id, &query, Some(page(5)));

        let id = cache.request(&PageQuery::new(2, 12, "")).unwrap();
        cache.settle(id, &query, Some(page(2)));
        assert_eq!(cache.get(&query).unwrap().total_pages, 2);
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn test_error_settle_frees_slot_without_caching() {
        let mut cache = QueryCache::new();
        let query = PageQuery::new(1, 12, "");
        let id = cache.request(&query).unwrap();
        assert_eq!(cache.settle(id, &query, None), Settled::Accepted);
        assert!(!cache.is_loading());
        assert!(cache.get(&query).is_none());
        // The same query can be retried now
        assert!(cache.request(&query).is_some());
    }

    #[test]
    fn test_invalidate_all_drops_entries_and_orphans_in_flight() {
        let mut cache = QueryCache::new();
        let query = PageQuery::new(1, 12, "");
        let id = cache.request(&query).unwrap();
        cache.settle(id, &query, Some(page(1)));

        let id = cache.request(&PageQuery::new(2, 12, "")).unwrap();
        cache.invalidate_all();
        assert_eq!(cache.entry_count(), 0);
        assert!(!cache.is_loading());
        assert_eq!(
            cache.settle(id, &PageQuery::new(2, 12, ""), Some(page(1))),
            Settled::Stale
        );
    }
}
