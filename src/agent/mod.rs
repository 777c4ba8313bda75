// Turn dispatcher
//
// One logical operation per user turn: classify the utterance, invoke the
// matching capability, normalize the outcome into an Envelope. Every provider
// failure is absorbed here; run_turn never returns an error.

pub mod curated;
pub mod envelope;

pub use curated::{CuratedAnswers, CuratedEntry};
pub use envelope::{Envelope, Source};

use crate::providers::{CompletionProvider, SearchHit, SearchProvider, WeatherProvider};
use crate::router::{Intent, Router};

const WEATHER_APOLOGY: &str = "I'm sorry, I couldn't retrieve weather information";
const SEARCH_APOLOGY: &str = "I'm sorry, I couldn't retrieve search results";
const NO_RESULTS: &str = "No search results found.";
const NO_RESPONSE: &str = "No response from Gemini";

/// Results requested from the search provider per query.
const SEARCH_REQUEST_LIMIT: usize = 5;
/// Results actually shown to the user.
const SEARCH_DISPLAY_LIMIT: usize = 3;

/// The assistant core: router plus the three capability providers and the
/// curated answer table, all injected at construction.
pub struct Agent {
    router: Router,
    completion: Box<dyn CompletionProvider>,
    search: Box<dyn SearchProvider>,
    weather: Box<dyn WeatherProvider>,
    curated: CuratedAnswers,
}

impl Agent {
    pub fn new(
        router: Router,
        completion: Box<dyn CompletionProvider>,
        search: Box<dyn SearchProvider>,
        weather: Box<dyn WeatherProvider>,
        curated: CuratedAnswers,
    ) -> Self {
        Self {
            router,
            completion,
            search,
            weather,
            curated,
        }
    }

    /// Run one full turn: classify, dispatch, normalize.
    pub async fn run_turn(&self, utterance: &str) -> Envelope {
        let (intent, argument) = self.router.classify(utterance);
        tracing::info!(intent = intent.as_str(), "dispatching turn");
        self.dispatch(intent, &argument).await
    }

    /// Invoke the capability for an already-classified intent. At most one
    /// outbound call; zero for a curated search hit.
    pub async fn dispatch(&self, intent: Intent, argument: &str) -> Envelope {
        match intent {
            Intent::Weather => self.weather_turn(argument).await,
            Intent::Search => self.search_turn(argument).await,
            Intent::Chat => self.chat_turn(argument).await,
        }
    }

    async fn weather_turn(&self, location: &str) -> Envelope {
        match self.weather.current(location).await {
            Ok(obs) => Envelope::new(
                format!(
                    "Weather in {}: {}°C, {}",
                    location, obs.temp_c, obs.condition
                ),
                Source::WeatherApi,
            ),
            Err(e) => {
                tracing::warn!(error = %e, location = %location, "weather lookup failed");
                Envelope::new(WEATHER_APOLOGY, Source::WeatherApi)
            }
        }
    }

    async fn search_turn(&self, query: &str) -> Envelope {
        if let Some(answer) = self.curated.lookup(query) {
            tracing::info!(query = %query, "answered from curated table");
            return Envelope::new(answer, Source::CuratedData);
        }

        match self.search.search(query, SEARCH_REQUEST_LIMIT).await {
            Ok(hits) if hits.is_empty() => Envelope::new(NO_RESULTS, Source::WebSearch),
            Ok(hits) => Envelope::new(format_hits(&hits), Source::WebSearch),
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "web search failed");
                Envelope::new(SEARCH_APOLOGY, Source::WebSearch)
            }
        }
    }

    async fn chat_turn(&self, prompt: &str) -> Envelope {
        match self.completion.complete(prompt).await {
            Ok(text) if text.is_empty() => Envelope::new(NO_RESPONSE, Source::Gemini),
            Ok(text) => Envelope::new(text, Source::Gemini),
            Err(e) => {
                tracing::warn!(error = %e, "completion failed");
                Envelope::new(format!("Error: {}", e), Source::Error)
            }
        }
    }
}

/// Format hits as numbered title/snippet/link blocks, capped at the display
/// limit.
fn format_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .take(SEARCH_DISPLAY_LIMIT)
        .enumerate()
        .map(|(i, hit)| format!("{}. {}\n{}\n{}", i + 1, hit.title, hit.snippet, hit.link))
        .collect::<Vec<_>>()
        .join("\n\n")
}
