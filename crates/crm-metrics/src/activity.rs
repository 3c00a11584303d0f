//! Paging over the recent-updates feed.

use crm_models::UpdateEntry;

/// Updates revealed per "show more".
pub const PAGE_SIZE: usize = 10;

/// A view over the update feed that reveals one page at a time.
#[derive(Debug, Clone)]
pub struct ActivityFeed<'a> {
    updates: &'a [UpdateEntry],
    visible: usize,
}

impl<'a> ActivityFeed<'a> {
    /// Starts with the first page visible.
    pub fn new(updates: &'a [UpdateEntry]) -> Self {
        Self {
            updates,
            visible: PAGE_SIZE,
        }
    }

    /// Starts with `limit` entries visible.
    pub fn with_limit(updates: &'a [UpdateEntry], limit: usize) -> Self {
        Self {
            updates,
            visible: limit,
        }
    }

    /// Entries currently visible.
    pub fn visible(&self) -> &'a [UpdateEntry] {
        &self.updates[..self.visible.min(self.updates.len())]
    }

    /// Number of entries still hidden.
    pub fn remaining(&self) -> usize {
        self.updates.len().saturating_sub(self.visible)
    }

    /// Reveals the next page. Returns false if nothing was hidden.
    pub fn show_more(&mut self) -> bool {
        if self.remaining() == 0 {
            return false;
        }
        self.visible += PAGE_SIZE;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updates(n: usize) -> Vec<UpdateEntry> {
        (0..n)
            .map(|i| UpdateEntry::new("dana", "leads", format!("l-{i}"), format!("Lead {i}"), "viewed"))
            .collect()
    }

    #[test]
    fn test_first_page() {
        let all = updates(25);
        let feed = ActivityFeed::new(&all);
        assert_eq!(feed.visible().len(), 10);
        assert_eq!(feed.remaining(), 15);
    }

    #[test]
    fn test_show_more_until_exhausted() {
        let all = updates(25);
        let mut feed = ActivityFeed::new(&all);

        assert!(feed.show_more());
        assert_eq!(feed.visible().len(), 20);
        assert!(feed.show_more());
        assert_eq!(feed.visible().len(), 25);
        assert_eq!(feed.remaining(), 0);
        assert!(!feed.show_more());
    }

    #[test]
    fn test_short_feed() {
        let all = updates(3);
        let feed = ActivityFeed::new(&all);
        assert_eq!(feed.visible().len(), 3);
        assert_eq!(feed.remaining(), 0);
    }

    #[test]
    fn test_with_limit() {
        let all = updates(5);
        let feed = ActivityFeed::with_limit(&all, 2);
        assert_eq!(feed.visible()[1].card_title, "Lead 1");
        assert_eq!(feed.remaining(), 3);
    }
}
