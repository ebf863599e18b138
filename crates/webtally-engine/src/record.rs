use regex::Regex;
use std::sync::LazyLock;
use webtally_types::{ParseOutcome, ParsedRecord};

/// Pattern for one combined-log-format record.
///
/// Thirteen capture groups: host, ident, authuser, date, time, timezone,
/// method, url, protocol, status, bytes, referrer, user-agent. Unanchored,
/// matching the lenient behavior of classic log tooling.
static COMBINED_LOG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(\S+) (\S+) (\S+) \[([^:]+):(\d+:\d+:\d+) ([^\]]+)\] "(\S+) (.*?) (\S+)" (\S+) (\S+) "(.*?)" "(.*?)""#,
    )
    .unwrap()
});

/// Full match plus the thirteen captures
const EXPECTED_GROUP_COUNT: usize = 14;

const GROUP_URL: usize = 8;
const GROUP_STATUS_CODE: usize = 10;
const GROUP_TRAFFIC: usize = 11;
const GROUP_USER_AGENT: usize = 13;

/// Attempt to parse one non-blank log line.
///
/// A line that does not match the pattern, or matches without all thirteen
/// captures present, is a `ParseOutcome::Failure`. Failures are tallied by
/// the aggregator, never surfaced as errors.
pub fn parse_record(line: &str) -> ParseOutcome {
    let Some(caps) = COMBINED_LOG_REGEX.captures(line) else {
        return ParseOutcome::Failure;
    };
    if caps.len() != EXPECTED_GROUP_COUNT
        || (1..EXPECTED_GROUP_COUNT).any(|idx| caps.get(idx).is_none())
    {
        return ParseOutcome::Failure;
    }

    ParseOutcome::Record(ParsedRecord {
        url: caps[GROUP_URL].to_string(),
        status_code: caps[GROUP_STATUS_CODE].to_string(),
        traffic_bytes: coerce_bytes(&caps[GROUP_TRAFFIC]),
        user_agent_lower: caps[GROUP_USER_AGENT].to_lowercase(),
    })
}

/// Lenient bytes coercion: the combined format writes "-" when no body was
/// sent, and some servers emit other junk here. Anything that is not a plain
/// unsigned number counts as zero traffic.
fn coerce_bytes(raw: &str) -> u64 {
    raw.parse::<u64>().unwrap_or(0)
}
