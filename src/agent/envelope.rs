// Response envelope and provenance tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which capability produced an answer. Closed set; the wire form is one of
/// these fixed strings, never freeform text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Gemini,
    #[serde(rename = "Web Search")]
    WebSearch,
    #[serde(rename = "Curated Data")]
    CuratedData,
    #[serde(rename = "Weather API")]
    WeatherApi,
    Error,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Gemini => "Gemini",
            Source::WebSearch => "Web Search",
            Source::CuratedData => "Curated Data",
            Source::WeatherApi => "Weather API",
            Source::Error => "Error",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit returned for every turn: answer text plus provenance.
/// Both fields are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub answer: String,
    pub source: Source,
}

impl Envelope {
    pub fn new(answer: impl Into<String>, source: Source) -> Self {
        Self {
            answer: answer.into(),
            source,
        }
    }

    /// Pretty-printed JSON form, used by the one-shot CLI mode.
    pub fn to_json(&self) -> String {
        // Two plain string fields; never panic inside a turn.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            serde_json::json!({
                "answer": self.answer,
                "source": self.source.as_str(),
            })
            .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tags_are_fixed() {
        assert_eq!(Source::Gemini.as_str(), "Gemini");
        assert_eq!(Source::WebSearch.as_str(), "Web Search");
        assert_eq!(Source::CuratedData.as_str(), "Curated Data");
        assert_eq!(Source::WeatherApi.as_str(), "Weather API");
        assert_eq!(Source::Error.as_str(), "Error");
    }

    #[test]
    fn test_envelope_serializes_two_fields() {
        let envelope = Envelope::new("Weather in Karachi: 30°C, Sunny", Source::WeatherApi);
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&envelope).unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["answer"], "Weather in Karachi: 30°C, Sunny");
        assert_eq!(object["source"], "Weather API");
    }

    #[test]
    fn test_to_json_is_parseable_with_non_ascii() {
        let envelope = Envelope::new("Weather in Karachi: 30°C, \"Sunny\"", Source::WeatherApi);
        let value: serde_json::Value = serde_json::from_str(&envelope.to_json()).unwrap();
        assert_eq!(value["answer"], "Weather in Karachi: 30°C, \"Sunny\"");
        assert_eq!(value["source"], "Weather API");
    }

    #[test]
    fn test_envelope_round_trips() {
        let envelope = Envelope::new("hello", Source::Gemini);
        let parsed: Envelope =
            serde_json::from_str(&serde_json::to_string(&envelope).unwrap()).unwrap();
        assert_eq!(parsed, envelope);
    }
}
