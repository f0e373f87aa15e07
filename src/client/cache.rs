use std::time::{Duration, Instant};

use super::error::ApiError;

/// Cache tags for the note resource. `List` stands for the list as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    List,
    Note(String),
}

#[derive(Clone, Debug)]
struct CacheEntry<T> {
    result: Result<T, ApiError>,
    provides: Vec<Tag>,
    stale: bool,
}

/// One cached query result with the tags it provides, a subscriber count
/// and the idle timer that evicts it.
#[derive(Clone, Debug)]
pub struct QueryCache<T> {
    entry: Option<CacheEntry<T>>,
    subscribers: usize,
    unused_since: Option<Instant>,
    keep_unused_for: Duration,
}

impl<T> QueryCache<T> {
    pub fn new(keep_unused_for: Duration) -> Self {
        QueryCache {
            entry: None,
            subscribers: 0,
            unused_since: None,
            keep_unused_for,
        }
    }

    /// A successful result that no mutation has invalidated yet.
    pub fn fresh(&self) -> Option<&T> {
        match &self.entry {
            Some(CacheEntry {
                result: Ok(data),
                stale: false,
                ..
            }) => Some(data),
            _ => None,
        }
    }

    /// Last successful data, stale or not.
    pub fn data(&self) -> Option<&T> {
        self.entry.as_ref().and_then(|e| e.result.as_ref().ok())
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.entry.as_ref().and_then(|e| e.result.as_ref().err())
    }

    pub fn is_stale(&self) -> bool {
        self.entry.as_ref().map_or(false, |e| e.stale)
    }

    pub fn provides(&self, tag: &Tag) -> bool {
        self.entry
            .as_ref()
            .map_or(false, |e| e.provides.contains(tag))
    }

    pub fn store(&mut self, result: Result<T, ApiError>, provides: Vec<Tag>, now: Instant) {
        self.entry = Some(CacheEntry {
            result,
            provides,
            stale: false,
        });
        // a refetch restarts the idle clock
        if self.subscribers == 0 {
            self.unused_since = Some(now);
        }
    }

    /// Marks the entry stale if it provides any of `tags`. Returns whether
    /// it did.
    pub fn invalidate(&mut self, tags: &[Tag]) -> bool {
        match &mut self.entry {
            Some(entry) if tags.iter().any(|t| entry.provides.contains(t)) => {
                entry.stale = true;
                true
            }
            _ => false,
        }
    }

    pub fn subscribe(&mut self) {
        self.subscribers += 1;
        self.unused_since = None;
    }

    pub fn unsubscribe(&mut self, now: Instant) {
        self.subscribers = self.subscribers.saturating_sub(1);
        if self.subscribers == 0 {
            self.unused_since = Some(now);
        }
    }

    /// Drops the entry once it has gone unused for the keep window.
    pub fn collect_garbage(&mut self, now: Instant) -> bool {
        let expired = match self.unused_since {
            Some(since) => self.subscribers == 0 && now.duration_since(since) >= self.keep_unused_for,
            None => false,
        };
        if expired && self.entry.is_some() {
            self.entry = None;
            self.unused_since = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(ids: &[&str]) -> QueryCache<Vec<String>> {
        let mut cache = QueryCache::new(Duration::from_secs(5));
        let mut provides = vec![Tag::List];
        provides.extend(ids.iter().map(|id| Tag::Note(id.to_string())));
        cache.store(
            Ok(ids.iter().map(|id| id.to_string()).collect()),
            provides,
            Instant::now(),
        );
        cache
    }

    #[test]
    fn invalidation_only_touches_provided_tags() {
        let mut cache = cache_with(&["a", "b"]);

        assert!(!cache.invalidate(&[Tag::Note("zzz".to_owned())]));
        assert!(cache.fresh().is_some());

        assert!(cache.invalidate(&[Tag::Note("a".to_owned())]));
        assert!(cache.fresh().is_none());
        assert_eq!(cache.data().map(Vec::len), Some(2));
    }

    #[test]
    fn list_tag_always_invalidates() {
        let mut cache = cache_with(&[]);
        assert!(cache.invalidate(&[Tag::List]));
        assert!(cache.is_stale());
    }

    #[test]
    fn subscribed_entries_are_never_evicted() {
        let mut cache = cache_with(&["a"]);
        cache.subscribe();
        let later = Instant::now() + Duration::from_secs(60);
        assert!(!cache.collect_garbage(later));
        assert!(cache.data().is_some());
    }

    #[test]
    fn unused_entries_are_evicted_after_the_window() {
        let mut cache = cache_with(&["a"]);
        cache.subscribe();
        let released = Instant::now();
        cache.unsubscribe(released);

        assert!(!cache.collect_garbage(released + Duration::from_secs(4)));
        assert!(cache.collect_garbage(released + Duration::from_secs(5)));
        assert!(cache.data().is_none());
    }

    #[test]
    fn refetch_restarts_the_idle_window() {
        let mut cache = cache_with(&["a"]);
        let refetched = Instant::now() + Duration::from_secs(4);
        cache.store(Ok(vec!["a".to_owned()]), vec![Tag::List], refetched);

        assert!(!cache.collect_garbage(refetched + Duration::from_secs(4)));
        assert!(cache.collect_garbage(refetched + Duration::from_secs(5)));
    }

    #[test]
    fn errors_are_never_fresh() {
        let mut cache: QueryCache<Vec<String>> = QueryCache::new(Duration::from_secs(5));
        cache.store(
            Err(ApiError {
                kind: crate::client::ErrorKind::Empty,
                status: Some(400),
                message: "No notes found".to_owned(),
            }),
            vec![Tag::List],
            Instant::now(),
        );
        assert!(cache.fresh().is_none());
        assert_eq!(cache.last_error().map(|e| e.status), Some(Some(400)));
    }
}
