use webtally_types::Crawler;

/// Known crawler user-agent fragments, in priority order.
///
/// Order is a tie-break policy: when an agent string contains more than one
/// fragment, the first entry here wins. Fragments are lowercase; callers pass
/// the lowercased agent string.
const CRAWLER_FRAGMENTS: &[(&str, Crawler)] = &[
    ("googlebot", Crawler::Google),
    ("yandex.com/bots", Crawler::Yandex),
    ("mail.ru_bot", Crawler::Mail),
    ("stackrambler", Crawler::Rambler),
    ("ysearch/slurp", Crawler::Yahoo),
    ("msnbot", Crawler::Msn),
    ("bingbot", Crawler::Bing),
];

/// Classify a lowercased user-agent string. `None` means a human view.
pub fn classify_user_agent(user_agent_lower: &str) -> Option<Crawler> {
    CRAWLER_FRAGMENTS
        .iter()
        .find(|(fragment, _)| user_agent_lower.contains(fragment))
        .map(|(_, crawler)| *crawler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_known_crawler() {
        let cases = [
            ("mozilla/5.0 (compatible; googlebot/2.1)", Crawler::Google),
            (
                "mozilla/5.0 (compatible; yandexbot/3.0; +http://yandex.com/bots)",
                Crawler::Yandex,
            ),
            ("mozilla/5.0 (compatible; linux x86_64; mail.ru_bot/2.0)", Crawler::Mail),
            ("stackrambler/2.0 (msie incompatible)", Crawler::Rambler),
            (
                "mozilla/5.0 (compatible; yahoo! slurp; http://help.yahoo.com/help/us/ysearch/slurp)",
                Crawler::Yahoo,
            ),
            ("msnbot/2.0b (+http://search.msn.com/msnbot.htm)", Crawler::Msn),
            ("mozilla/5.0 (compatible; bingbot/2.0)", Crawler::Bing),
        ];
        for (agent, expected) in cases {
            assert_eq!(classify_user_agent(agent), Some(expected), "agent: {}", agent);
        }
    }

    #[test]
    fn test_human_agents_do_not_classify() {
        assert_eq!(
            classify_user_agent("mozilla/5.0 (windows nt 10.0; win64; x64) firefox/120.0"),
            None
        );
        assert_eq!(classify_user_agent("curl/8.0.1"), None);
        assert_eq!(classify_user_agent(""), None);
    }

    #[test]
    fn test_fragment_position_is_irrelevant() {
        assert_eq!(classify_user_agent("bingbot"), Some(Crawler::Bing));
        assert_eq!(
            classify_user_agent("something in front bingbot and after"),
            Some(Crawler::Bing)
        );
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // Contains both googlebot and bingbot fragments; table order wins
        assert_eq!(
            classify_user_agent("googlebot pretending to be bingbot"),
            Some(Crawler::Google)
        );
        // msnbot outranks bingbot
        assert_eq!(
            classify_user_agent("bingbot via msnbot relay"),
            Some(Crawler::Msn)
        );
    }
}
