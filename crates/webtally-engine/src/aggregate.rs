use crate::crawler::classify_user_agent;
use std::collections::{BTreeMap, HashSet};
use webtally_types::{LogSummary, ParseOutcome, ParsedRecord};

/// Running counters for one summary pass.
///
/// Created empty, fed every parse outcome in file order, then consumed by
/// `finish`. One instance per pass; never shared.
#[derive(Debug, Default)]
pub struct AggregateState {
    total_records: u64,
    parse_fails: u64,
    views: u64,
    traffic: u64,
    unique_urls: HashSet<String>,
    status_codes: BTreeMap<String, u64>,
    crawlers: BTreeMap<String, u64>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parse outcome into the running counters.
    pub fn observe(&mut self, outcome: ParseOutcome) {
        self.total_records += 1;
        match outcome {
            ParseOutcome::Failure => self.parse_fails += 1,
            ParseOutcome::Record(record) => self.observe_record(record),
        }
    }

    fn observe_record(&mut self, record: ParsedRecord) {
        let ParsedRecord {
            url,
            status_code,
            traffic_bytes,
            user_agent_lower,
        } = record;

        self.unique_urls.insert(url);
        *self.status_codes.entry(status_code).or_insert(0) += 1;
        // Traffic counts for crawlers and humans alike
        self.traffic += traffic_bytes;

        match classify_user_agent(&user_agent_lower) {
            Some(crawler) => {
                *self.crawlers.entry(crawler.label().to_string()).or_insert(0) += 1;
            }
            None => self.views += 1,
        }
    }

    /// Finalize the pass into the immutable summary payload.
    pub fn finish(self) -> LogSummary {
        LogSummary {
            total: self.total_records,
            parse_fails: self.parse_fails,
            views: self.views,
            traffic: self.traffic,
            urls: self.unique_urls.len() as u64,
            status_codes: self.status_codes,
            crawlers: self.crawlers,
        }
    }
}
