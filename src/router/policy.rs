// Keyword routing policies
//
// The keyword rule set is data, not code: both shipped variants are
// configurations of the same tables, consumed by Router::classify in a
// fixed precedence order.

use serde::Deserialize;
use std::str::FromStr;

/// Named routing policy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Search requires a location preposition plus a domain keyword,
    /// or a leading search verb.
    #[default]
    Strict,
    /// Any keyword from the extended list triggers search; "weather ... for"
    /// and "weather ... update" phrasings trigger weather.
    Broad,
}

impl PolicyKind {
    pub fn as_str(&self) -> &str {
        match self {
            PolicyKind::Strict => "strict",
            PolicyKind::Broad => "broad",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(PolicyKind::Strict),
            "broad" => Ok(PolicyKind::Broad),
            other => Err(format!(
                "unknown routing policy '{}' (expected 'strict' or 'broad')",
                other
            )),
        }
    }
}

/// Location prepositions that anchor a search query to a place.
const LOCATION_MARKERS: &[&str] = &[" in ", " near ", " at "];

/// Domain keywords shared by both variants.
const DOMAIN_KEYWORDS: &[&str] = &[
    "restaurants",
    "hotels",
    "shops",
    "hospitals",
    "clinics",
    "gyms",
    "malls",
];

/// Leading verbs that force a search under the strict variant.
const SEARCH_VERBS: &[&str] = &["find", "where", "best", "top", "list"];

/// Extended keyword list for the broad variant: the strict domain list plus
/// services, professionals, and venue terms.
const BROAD_KEYWORDS: &[&str] = &[
    "restaurants",
    "hotels",
    "shops",
    "places",
    "find",
    "where",
    "best",
    "top",
    "list",
    "hospitals",
    "clinics",
    "doctors",
    "vets",
    "veterinary",
    "medical",
    "pharmacy",
    "schools",
    "colleges",
    "universities",
    "banks",
    "atm",
    "malls",
    "markets",
    "gyms",
    "fitness",
    "salons",
    "spas",
    "cafes",
    "coffee",
    "search",
];

/// Keyword tables for one policy variant.
///
/// A policy only answers "does this lowercased utterance look like a search
/// (or weather) query"; precedence between rules lives in the Router.
pub struct RoutingPolicy {
    kind: PolicyKind,
    location_markers: &'static [&'static str],
    domain_keywords: &'static [&'static str],
    search_verbs: &'static [&'static str],
    broad_keywords: &'static [&'static str],
}

impl RoutingPolicy {
    pub fn new(kind: PolicyKind) -> Self {
        Self {
            kind,
            location_markers: LOCATION_MARKERS,
            domain_keywords: DOMAIN_KEYWORDS,
            search_verbs: SEARCH_VERBS,
            broad_keywords: BROAD_KEYWORDS,
        }
    }

    pub fn strict() -> Self {
        Self::new(PolicyKind::Strict)
    }

    pub fn broad() -> Self {
        Self::new(PolicyKind::Broad)
    }

    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    /// Keyword test for search routing. `lower` must already be lowercased.
    pub fn is_search(&self, lower: &str) -> bool {
        match self.kind {
            PolicyKind::Strict => {
                let has_location = self.location_markers.iter().any(|m| lower.contains(m));
                let has_keyword = self.domain_keywords.iter().any(|k| lower.contains(k));
                (has_location && has_keyword)
                    || self.search_verbs.iter().any(|v| lower.starts_with(v))
            }
            PolicyKind::Broad => self.broad_keywords.iter().any(|k| lower.contains(k)),
        }
    }

    /// Keyword test for weather routing. Only the broad variant routes
    /// unprefixed weather phrasings ("weather update for Lahore").
    pub fn is_weather(&self, lower: &str) -> bool {
        match self.kind {
            PolicyKind::Strict => false,
            PolicyKind::Broad => {
                lower.contains("weather") && (lower.contains(" for ") || lower.contains(" update"))
            }
        }
    }
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("strict".parse::<PolicyKind>().unwrap(), PolicyKind::Strict);
        assert_eq!("BROAD".parse::<PolicyKind>().unwrap(), PolicyKind::Broad);
        assert!("fuzzy".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_strict_needs_location_and_keyword() {
        let policy = RoutingPolicy::strict();
        assert!(policy.is_search("gyms in karachi"));
        assert!(!policy.is_search("i like gyms"));
        assert!(!policy.is_search("something in lahore"));
    }

    #[test]
    fn test_strict_leading_verb() {
        let policy = RoutingPolicy::strict();
        assert!(policy.is_search("best hotels"));
        assert!(policy.is_search("find me a plumber"));
        assert!(policy.is_search("where can i buy stamps"));
    }

    #[test]
    fn test_broad_any_keyword() {
        let policy = RoutingPolicy::broad();
        assert!(policy.is_search("coffee"));
        assert!(policy.is_search("good vets around here"));
        assert!(!policy.is_search("tell me a joke"));
    }

    #[test]
    fn test_weather_phrasing_broad_only() {
        assert!(RoutingPolicy::broad().is_weather("weather update for lahore"));
        assert!(RoutingPolicy::broad().is_weather("any weather update?"));
        assert!(!RoutingPolicy::broad().is_weather("weather is nice"));
        assert!(!RoutingPolicy::strict().is_weather("weather update for lahore"));
    }
}
