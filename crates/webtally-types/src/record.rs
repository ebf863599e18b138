use std::fmt;

/// Fields extracted from one well-formed access-log line.
///
/// Built once per matched line and consumed by the aggregator. The raw date,
/// time, and referrer fields are matched by the record pattern but never
/// interpreted, so they are not carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Request target, verbatim from the log line (no decoding)
    pub url: String,
    /// Status field as a string; keeps non-standard values intact
    pub status_code: String,
    /// Response size in bytes; 0 when the log wrote a "-" placeholder
    pub traffic_bytes: u64,
    /// User-agent lowercased once, so crawler matching stays case-insensitive
    pub user_agent_lower: String,
}

/// Outcome of one parse attempt. Every non-blank line maps to exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Record(ParsedRecord),
    Failure,
}

/// Search-engine crawlers recognized by user-agent substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crawler {
    Google,
    Yandex,
    Mail,
    Rambler,
    Yahoo,
    Msn,
    Bing,
}

impl Crawler {
    /// Stable label used as the key in the crawlers histogram
    pub fn label(&self) -> &'static str {
        match self {
            Crawler::Google => "Google",
            Crawler::Yandex => "Yandex",
            Crawler::Mail => "Mail",
            Crawler::Rambler => "Rambler",
            Crawler::Yahoo => "Yahoo",
            Crawler::Msn => "MSN",
            Crawler::Bing => "Bing",
        }
    }
}

impl fmt::Display for Crawler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
