use crate::aggregate::AggregateState;
use crate::reader::{LogLines, open_log};
use crate::record::parse_record;
use std::path::Path;
use webtally_types::{LogSummary, SummaryError};

/// Summarize one access-log file in a single sequential pass.
///
/// Fatal conditions (empty path, unreadable path, failed open) abort before
/// any line is read. Per-line parse failures are tallied in the summary and
/// never abort the pass. The file handle is dropped when the pass ends.
pub fn summarize_file(path: &Path) -> Result<LogSummary, SummaryError> {
    let reader = open_log(path)?;

    let mut state = AggregateState::new();
    for line in LogLines::new(reader) {
        state.observe(parse_record(&line));
    }

    Ok(state.finish())
}
