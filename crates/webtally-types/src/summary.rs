use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final aggregate produced by one pass over a log file.
///
/// Histograms are BTreeMaps so that two runs over the same input serialize
/// byte-identically regardless of line order inside the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    /// Lines that reached the parser (blank lines are skipped before this)
    pub total: u64,
    /// Lines that did not match the record pattern
    pub parse_fails: u64,
    /// Successfully parsed records not attributed to a crawler
    pub views: u64,
    /// Byte sum across all successfully parsed records, crawler or human
    pub traffic: u64,
    /// Count of distinct request URLs
    pub urls: u64,
    /// Status code -> occurrence count
    pub status_codes: BTreeMap<String, u64>,
    /// Crawler label -> occurrence count
    pub crawlers: BTreeMap<String, u64>,
}

impl LogSummary {
    /// Successfully parsed records, human and crawler alike
    pub fn parsed(&self) -> u64 {
        self.total - self.parse_fails
    }

    /// Total requests attributed to crawlers
    pub fn crawler_hits(&self) -> u64 {
        self.crawlers.values().sum()
    }
}
