// NOTE: webtally Engine Rationale
//
// Why one compiled pattern (not ad hoc splitting)?
// - Combined-log lines carry quoted sub-fields ("GET /x HTTP/1.1", user
//   agents with spaces) and bracketed timestamps; a whitespace split
//   mis-tokenizes them
// - A single compiled regex keeps the match-or-fail decision in one place
//
// Why per-call aggregate state (not shared counters)?
// - Fresh state per summarize_file call, discarded after the summary is built
// - The routine stays safe to call from multiple threads without locking
//
// Why are parse failures not errors?
// - Real logs contain truncated and garbage lines; a single bad line must
//   never abort the run, it is tallied and the pass continues

pub mod aggregate;
pub mod crawler;
pub mod pipeline;
pub mod reader;
pub mod record;

pub use aggregate::AggregateState;
pub use crawler::classify_user_agent;
pub use pipeline::summarize_file;
pub use record::parse_record;
