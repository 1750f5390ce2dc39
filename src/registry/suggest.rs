//! "Did you mean" suggestions for model identifiers which failed to resolve.
//!
//! Model identifiers are usually near misses of a family name plus a version
//! suffix (`minimax-m3` for `minimax-m2`, `gpt-4-turbo-preview` for `gpt-4-turbo`).
//! Rather than computing an edit distance, a candidate is considered similar to
//! the query when any of the following hold (compared case-insensitively):
//!
//! 1. One identifier contains the other.
//! 2. The query is longer than three characters and begins with the first half
//!    (by the query's length) of the candidate.
//! 3. The identifiers share a common prefix of at least five characters.
//!
//! Suggestions are reported in registry order, not ranked by closeness.

use thiserror::Error;
use tracing::debug;

use super::registry::Registry;
use crate::models::{ModelRecord, ModelSummary};

/// The number of suggestions attached to a validation error.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Length of the shared prefix which makes two identifiers similar.
const MIN_COMMON_PREFIX: usize = 5;

/// Queries this short are only matched by containment or a common prefix.
const MIN_HALF_PREFIX_QUERY: usize = 4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No model has the identifier and nothing similar exists.
    #[error("{}", not_found(.id, .engine))]
    NotFound { id: String, engine: Option<String> },
    /// No model has the identifier, but similar identifiers exist.
    #[error("{}", not_found_with_suggestions(.id, .engine, .suggestions))]
    NotFoundWithSuggestions {
        id: String,
        engine: Option<String>,
        suggestions: Vec<ModelSummary>,
    },
    /// The model exists but is served by a different engine than requested.
    #[error("model \"{id}\" is served by engine \"{actual}\", not \"{requested}\"")]
    EngineMismatch {
        id: String,
        actual: String,
        requested: String,
    },
}

impl Error {
    /// The suggested models, if any.
    pub fn suggestions(&self) -> &[ModelSummary] {
        match self {
            Error::NotFoundWithSuggestions { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

fn list_command(engine: &Option<String>) -> String {
    match engine {
        Some(engine) => format!("omnai list models --engine {}", engine),
        None => "omnai list models".to_string(),
    }
}

fn model_scope(id: &str, engine: &Option<String>) -> String {
    match engine {
        Some(engine) => format!("model \"{}\" not found for engine \"{}\"", id, engine),
        None => format!("model \"{}\" not found", id),
    }
}

fn not_found(id: &str, engine: &Option<String>) -> String {
    format!(
        "{}, run \"{}\" to see the available models",
        model_scope(id, engine),
        list_command(engine)
    )
}

fn not_found_with_suggestions(
    id: &str,
    engine: &Option<String>,
    suggestions: &[ModelSummary],
) -> String {
    let mut msg = format!("{}, did you mean:", model_scope(id, engine));

    for suggestion in suggestions {
        msg.push_str(&format!(
            "\n  {} ({}) [engine: {}, cost: {}]",
            suggestion.id, suggestion.full_name, suggestion.engine, suggestion.cost
        ));
    }

    msg
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(a, b)| a == b).count()
}

/// Returns true if `candidate` is plausibly what the user meant by `query`. Both
/// must already be lowercase.
pub(crate) fn is_similar(query: &str, candidate: &str) -> bool {
    if candidate.contains(query) || query.contains(candidate) {
        return true;
    }

    let query_len = query.chars().count();

    if query_len >= MIN_HALF_PREFIX_QUERY {
        let head: String = candidate.chars().take(query_len / 2).collect();

        if query.starts_with(&head) {
            return true;
        }
    }

    common_prefix_len(query, candidate) >= MIN_COMMON_PREFIX
}

impl Registry {
    /// Finds up to `limit` models whose identifiers resemble `query`, optionally
    /// restricted to one engine.
    pub fn find_similar(
        &self,
        query: &str,
        engine: Option<&str>,
        limit: usize,
    ) -> Vec<ModelSummary> {
        let query = query.to_lowercase();

        let similar: Vec<ModelSummary> = self
            .list(engine)
            .into_iter()
            .filter(|model| is_similar(&query, &model.id.to_lowercase()))
            .take(limit)
            .map(ModelRecord::summary)
            .collect();

        debug!(query = %query, ?engine, found = similar.len(), "searched for similar models");

        similar
    }

    /// Resolves `id` to a model, failing with a descriptive error when it does not
    /// exist or is served by a different engine than `engine`.
    ///
    /// Unlike [`Registry::get`], a missing model is always an error.
    pub fn validate(&self, id: &str, engine: Option<&str>) -> Result<&ModelRecord, Error> {
        self.validate_with_limit(id, engine, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Like [`Registry::validate`], attaching at most `limit` suggestions.
    pub fn validate_with_limit(
        &self,
        id: &str,
        engine: Option<&str>,
        limit: usize,
    ) -> Result<&ModelRecord, Error> {
        if let Some(model) = self.get(id) {
            return match engine {
                Some(requested) if !self.same_engine(&model.engine, requested) => {
                    debug!(id, actual = %model.engine, requested, "engine mismatch");

                    Err(Error::EngineMismatch {
                        id: id.to_string(),
                        actual: model.engine.clone(),
                        requested: requested.to_string(),
                    })
                }
                _ => Ok(model),
            };
        }

        let suggestions = self.find_similar(id, engine, limit);
        let engine = engine.map(str::to_string);

        if suggestions.is_empty() {
            Err(Error::NotFound {
                id: id.to_string(),
                engine,
            })
        } else {
            Err(Error::NotFoundWithSuggestions {
                id: id.to_string(),
                engine,
                suggestions,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelDraft;
    use proptest::prelude::*;

    #[test]
    fn containment_matches() {
        assert!(is_similar("gpt-4", "gpt-4-turbo"));
        assert!(is_similar("gpt-4o-latest", "gpt-4o"));
        assert!(is_similar("o1", "o1-preview"));
    }

    #[test]
    fn half_prefix_matches() {
        // "gpt" is the first half of the candidate by query length
        assert!(is_similar("gpt-5x", "gpt-4o"));
        assert!(is_similar("qwen2.5-coder:70b", "qwen2.5-coder:7b"));
        // Four characters is the shortest query using the half prefix
        assert!(is_similar("gpt5", "gpt-4o"));
        assert!(!is_similar("gpx", "gpt-4o"));
        assert!(!is_similar("llm", "llama3.1"));
    }

    #[test]
    fn common_prefix_matches() {
        assert!(is_similar("minimax-m3", "minimax-m2"));
        assert!(is_similar("claude-haikus-4.0", "claude-sonnet-3.7"));
        assert!(!is_similar("dexp-coder", "deepseek-coder"));
    }

    #[test]
    fn unrelated_identifiers_do_not_match() {
        assert!(!is_similar("totally-unknown-xyz", "mistral"));
        assert!(!is_similar("totally-unknown-xyz", "grok-code"));
        assert!(!is_similar("abc", "xyz"));
    }

    #[test]
    fn find_similar_is_case_insensitive() {
        let registry = Registry::new();

        let similar = registry.find_similar("GPT-4O", None, 5);

        assert!(similar.iter().any(|m| m.id == "gpt-4o"));
    }

    #[test]
    fn find_similar_respects_engine_and_limit() {
        let registry = Registry::new();

        let similar = registry.find_similar("qwen2.5-coder", Some("ollama"), 2);
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|m| m.engine == "ollama"));

        let none = registry.find_similar("qwen2.5-coder", Some("claude"), 5);
        assert!(none.is_empty());
    }

    #[test]
    fn find_similar_keeps_registry_order() {
        let mut registry = Registry::new();

        registry.register("minimax-custom", ModelDraft::new("opencode", "mm"), false);

        let ids: Vec<String> = registry
            .find_similar("minimax", None, 10)
            .into_iter()
            .map(|m| m.id)
            .collect();

        assert_eq!(
            ids,
            [
                "minimax-m2.1",
                "minimax-m2.1-free",
                "minimax-m2",
                "minimax-m2.1-api",
                "minimax-custom"
            ]
        );
    }

    #[test]
    fn find_similar_on_custom_engine() {
        let mut registry = Registry::new();

        registry.register("my-lm", ModelDraft::new("lmstudio", "local-model"), false);

        let similar = registry.find_similar("my-l", Some("lmstudio"), 5);

        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, "my-lm");
    }

    /// Similarity restated from the rules on character vectors.
    fn resembles(query: &str, candidate: &str) -> bool {
        let q: Vec<char> = query.chars().collect();
        let c: Vec<char> = candidate.chars().collect();

        let contains = candidate.contains(query) || query.contains(candidate);
        let starts_with_query = c.starts_with(&q);
        let half_prefix = q.len() > 3 && q.starts_with(&c[..(q.len() / 2).min(c.len())]);
        let shared = q.iter().zip(&c).take_while(|(a, b)| a == b).count();

        contains || starts_with_query || half_prefix || shared >= 5
    }

    #[test]
    fn validate_known_model() {
        let registry = Registry::new();

        let model = registry.validate("gpt-4o", None).unwrap();

        assert_eq!(Some(model), registry.get("gpt-4o"));
        assert_eq!(registry.validate("gpt-4o", Some("opencode")), Ok(model));
    }

    #[test]
    fn validate_resolves_engine_aliases() {
        let registry = Registry::new();

        let model = registry
            .validate("claude-haiku-3.5", Some("claude-code"))
            .unwrap();

        assert_eq!(model.engine, "claude");
    }

    #[test]
    fn validate_engine_mismatch() {
        let registry = Registry::new();

        let err = registry.validate("gpt-4o", Some("claude")).unwrap_err();

        assert_eq!(
            err,
            Error::EngineMismatch {
                id: "gpt-4o".to_string(),
                actual: "opencode".to_string(),
                requested: "claude".to_string(),
            }
        );
        assert!(err.to_string().contains("\"opencode\""));
        assert!(err.to_string().contains("\"claude\""));
    }

    #[test]
    fn validate_suggests_similar_models() {
        let registry = Registry::new();

        let err = registry.validate("minimax-m3", Some("opencode")).unwrap_err();

        assert!(matches!(err, Error::NotFoundWithSuggestions { .. }));
        assert!(!err.suggestions().is_empty());
        assert!(err.suggestions().len() <= DEFAULT_SUGGESTION_LIMIT);
        assert!(err.suggestions().iter().any(|m| m.id.starts_with("minimax")));

        let msg = err.to_string();
        assert!(msg.starts_with("model \"minimax-m3\" not found for engine \"opencode\""));
        assert!(msg.contains("minimax-m2.1 (MiniMax M2.1) [engine: opencode, cost: cheap]"));
    }

    #[test]
    fn validate_without_suggestions() {
        let registry = Registry::new();

        let err = registry.validate("totally-unknown-xyz", None).unwrap_err();

        assert_eq!(
            err,
            Error::NotFound {
                id: "totally-unknown-xyz".to_string(),
                engine: None,
            }
        );
        assert!(err.to_string().contains("omnai list models"));

        let err = registry
            .validate("totally-unknown-xyz", Some("ollama"))
            .unwrap_err();
        assert!(err.to_string().contains("omnai list models --engine ollama"));
    }

    #[test]
    fn validate_with_limit_truncates_suggestions() {
        let registry = Registry::new();

        let err = registry
            .validate_with_limit("minimax", None, 1)
            .unwrap_err();

        assert_eq!(err.suggestions().len(), 1);
    }

    proptest! {
        /// Suggestions are exactly the resembling models, in order, up to the limit.
        #[test]
        fn prop_suggestions_match_rules(
            query in prop_oneof![
                "[a-z0-9.:-]{0,16}",
                "(gpt|claude|qwen|minimax|llama|deepseek|o1)[a-z0-9.:-]{0,8}",
            ],
            limit in 0usize..8,
        ) {
            let registry = Registry::new();

            let expected: Vec<String> = registry
                .list(None)
                .into_iter()
                .filter(|m| resembles(&query, &m.id.to_lowercase()))
                .take(limit)
                .map(|m| m.id.clone())
                .collect();

            let similar: Vec<String> = registry
                .find_similar(&query, None, limit)
                .into_iter()
                .map(|m| m.id)
                .collect();

            prop_assert!(similar.len() <= limit);
            prop_assert_eq!(similar, expected);
        }

        /// Suggestions never cross the requested engine.
        #[test]
        fn prop_suggestions_respect_engine(query in "[a-z0-9.:-]{0,16}") {
            let registry = Registry::new();

            for model in registry.find_similar(&query, Some("ollama"), 10) {
                prop_assert_eq!(model.engine, "ollama");
            }
        }
    }
}
