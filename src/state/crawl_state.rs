use std::collections::{HashSet, VecDeque};
use url::Url;

/// Bookkeeping for a breadth-first same-site crawl
///
/// The frontier is a FIFO queue paired with a companion set so membership
/// checks stay O(1). A URL is never in both `visited` and the frontier, and
/// the frontier never holds the same URL twice.
#[derive(Debug, Clone)]
pub struct CrawlState {
    /// Fragment-free seed URL; every relative link resolves against it
    seed: Url,

    /// Authority (host[:port]) of the seed; only URLs on it are queued
    domain: String,

    /// URLs already taken off the frontier
    visited: HashSet<String>,

    /// Visited URLs in the order they were taken
    order: Vec<String>,

    /// Discovered but not yet visited URLs, oldest first
    frontier: VecDeque<Url>,

    /// Mirror of `frontier` for membership checks
    queued: HashSet<String>,
}

impl CrawlState {
    /// Creates the initial state: the seed alone on the frontier
    pub fn new(seed: Url, domain: String) -> Self {
        let mut state = Self {
            seed: seed.clone(),
            domain,
            visited: HashSet::new(),
            order: Vec::new(),
            frontier: VecDeque::new(),
            queued: HashSet::new(),
        };
        state.enqueue(seed);
        state
    }

    /// The URL the crawl started from
    pub fn seed(&self) -> &Url {
        &self.seed
    }

    /// The authority this crawl is restricted to
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns true once the frontier is empty or `max_pages` pages were visited
    pub fn is_finished(&self, max_pages: usize) -> bool {
        self.frontier.is_empty() || self.visited.len() >= max_pages
    }

    /// Pops the frontier head and marks it visited
    ///
    /// Entries that were already visited are discarded. Returns None when
    /// the frontier runs dry.
    pub fn visit_next(&mut self) -> Option<Url> {
        while let Some(url) = self.frontier.pop_front() {
            self.queued.remove(url.as_str());

            if self.visited.contains(url.as_str()) {
                continue;
            }

            self.visited.insert(url.as_str().to_string());
            self.order.push(url.as_str().to_string());
            return Some(url);
        }
        None
    }

    /// Appends a URL to the frontier tail unless it is visited or queued
    ///
    /// Returns true if the URL was added.
    pub fn enqueue(&mut self, url: Url) -> bool {
        let key = url.as_str();
        if self.visited.contains(key) || self.queued.contains(key) {
            return false;
        }
        self.queued.insert(key.to_string());
        self.frontier.push_back(url);
        true
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn is_queued(&self, url: &str) -> bool {
        self.queued.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Snapshot of the frontier in queue order
    pub fn frontier_urls(&self) -> Vec<String> {
        self.frontier.iter().map(|u| u.to_string()).collect()
    }

    /// Consumes the state and returns the visited URLs in visit order
    pub fn into_visited(self) -> Vec<String> {
        self.order
    }
}
