use anyhow::Result;
use std::fmt::Write;
use webtally_types::LogSummary;

/// Pretty-printed JSON payload, the default output surface
pub fn render_json(summary: &LogSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Console view: aligned counters followed by the two histograms.
/// Histogram rows come out sorted by key, matching the JSON ordering.
pub fn render_plain(summary: &LogSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "total:       {}", summary.total);
    let _ = writeln!(out, "parse_fails: {}", summary.parse_fails);
    let _ = writeln!(out, "views:       {}", summary.views);
    let _ = writeln!(out, "traffic:     {}", summary.traffic);
    let _ = writeln!(out, "urls:        {}", summary.urls);

    let _ = writeln!(out, "status_codes:");
    if summary.status_codes.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (code, count) in &summary.status_codes {
        let _ = writeln!(out, "  {}: {}", code, count);
    }

    let _ = writeln!(out, "crawlers:");
    if summary.crawlers.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (label, count) in &summary.crawlers {
        let _ = writeln!(out, "  {}: {}", label, count);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> LogSummary {
        LogSummary {
            total: 3,
            parse_fails: 1,
            views: 1,
            traffic: 1234,
            urls: 2,
            status_codes: BTreeMap::from([("200".to_string(), 2)]),
            crawlers: BTreeMap::from([("Google".to_string(), 1)]),
        }
    }

    #[test]
    fn test_render_json_is_pretty_and_complete() {
        let rendered = render_json(&sample()).unwrap();
        assert!(rendered.contains('\n'));
        assert!(rendered.contains("\"total\": 3"));
        assert!(rendered.contains("\"parse_fails\": 1"));
        assert!(rendered.contains("\"Google\": 1"));
    }

    #[test]
    fn test_render_plain_lists_histograms() {
        let rendered = render_plain(&sample());
        assert!(rendered.contains("total:       3"));
        assert!(rendered.contains("  200: 2"));
        assert!(rendered.contains("  Google: 1"));
    }

    #[test]
    fn test_render_plain_empty_histograms() {
        let summary = LogSummary {
            total: 0,
            parse_fails: 0,
            views: 0,
            traffic: 0,
            urls: 0,
            status_codes: BTreeMap::new(),
            crawlers: BTreeMap::new(),
        };
        let rendered = render_plain(&summary);
        assert!(rendered.contains("status_codes:\n  (none)"));
        assert!(rendered.contains("crawlers:\n  (none)"));
    }
}
