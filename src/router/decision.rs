// Intent classification logic

use super::policy::RoutingPolicy;

/// Classified purpose of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Weather,
    Search,
    Chat,
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Weather => "weather",
            Intent::Search => "search",
            Intent::Chat => "chat",
        }
    }
}

/// Explicit command prefixes; checked before any keyword heuristic.
const SEARCH_PREFIX: &str = "search:";
const WEATHER_PREFIX: &str = "weather in";

pub struct Router {
    policy: RoutingPolicy,
}

impl Router {
    pub fn new(policy: RoutingPolicy) -> Self {
        Self { policy }
    }

    /// Classify an utterance into an intent plus the handler argument.
    ///
    /// Total: every input yields exactly one (Intent, String) pair. Rules are
    /// applied in a fixed precedence order, first match wins:
    ///   1. explicit "search:" prefix
    ///   2. explicit "weather in" prefix
    ///   3. policy weather phrasing (broad variant only)
    ///   4. policy search keyword test
    ///   5. fallthrough to chat
    pub fn classify(&self, utterance: &str) -> (Intent, String) {
        if let Some(rest) = strip_prefix_ci(utterance, SEARCH_PREFIX) {
            let argument = rest.trim().to_string();
            tracing::debug!(argument = %argument, "routing: SEARCH (explicit prefix)");
            return (Intent::Search, argument);
        }

        if let Some(rest) = strip_prefix_ci(utterance, WEATHER_PREFIX) {
            let argument = rest.trim().to_string();
            tracing::debug!(argument = %argument, "routing: WEATHER (explicit prefix)");
            return (Intent::Weather, argument);
        }

        let lower = utterance.to_lowercase();

        if self.policy.is_weather(&lower) {
            // "weather update for Lahore" style: the place follows " for ".
            let argument = match find_ci(utterance, " for ") {
                Some(pos) => utterance[pos + " for ".len()..].trim().to_string(),
                None => utterance.to_string(),
            };
            tracing::debug!(
                policy = self.policy.kind().as_str(),
                "routing: WEATHER (keyword phrasing)"
            );
            return (Intent::Weather, argument);
        }

        if self.policy.is_search(&lower) {
            tracing::debug!(
                policy = self.policy.kind().as_str(),
                "routing: SEARCH (keyword match)"
            );
            return (Intent::Search, utterance.to_string());
        }

        tracing::debug!("routing: CHAT (no rule matched)");
        (Intent::Chat, utterance.to_string())
    }
}

/// Case-insensitive ASCII prefix strip that never splits a UTF-8 character.
fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Byte position of the first case-insensitive occurrence of an ASCII needle.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
