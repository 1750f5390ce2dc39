//! Record types for models and the engines which run them.
//!
//! A [`ModelRecord`] describes one model identifier: which engine serves it, the
//! string handed to the engine, and a handful of coarse ratings used for filtering
//! and display. An [`EngineRecord`] describes one backend capable of running models.
//!
//! ## Tiers
//!
//! Cost, speed and quality are reported as enumerated tiers rather than measured
//! values. Their textual forms (e.g., `very-fast`) are part of the CLI and of the
//! configuration format and should remain stable.
//!
//! ## Custom Models
//!
//! Models registered at runtime are described with a [`ModelDraft`]. Only the
//! engine and provider model are required; everything else is backfilled with
//! defaults when the draft is turned into a [`ModelRecord`].

pub(crate) mod builtin;

use serde::{Deserialize, Serialize};

/// Coarse pricing bracket of a model.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CostTier {
    Free,
    Cheap,
    #[default]
    Medium,
    Expensive,
}

/// Relative response latency of a model.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SpeedTier {
    VeryFast,
    Fast,
    #[default]
    Medium,
    Slow,
    VerySlow,
}

/// Relative output quality of a model.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QualityTier {
    Excellent,
    #[default]
    Good,
    Fair,
    Basic,
}

/// Where an engine performs inference.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DeploymentType {
    /// Requests are sent to a hosted API.
    Cloud,
    /// Inference happens on the local machine.
    Local,
}

/// Price in USD per million tokens. Informational only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenCost {
    pub input: f64,
    pub output: f64,
}

impl TokenCost {
    pub const FREE: TokenCost = TokenCost {
        input: 0.0,
        output: 0.0,
    };

    pub const fn new(input: f64, output: f64) -> TokenCost {
        TokenCost { input, output }
    }
}

/// Metadata for a single model identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// The registry key. This may differ from [`ModelRecord::model`].
    pub id: String,
    /// Identifier of the engine which serves this model.
    pub engine: String,
    /// The model string passed to the engine.
    pub model: String,
    /// Human-readable name.
    pub full_name: String,
    /// Context window in tokens, if known.
    pub context_window: Option<u64>,
    /// Default sampling temperature, if known.
    pub default_temperature: Option<f64>,
    pub cost: CostTier,
    pub cost_per_mtok: TokenCost,
    /// Whether the model can be used without a paid plan.
    pub free_tier: bool,
    pub speed: SpeedTier,
    pub quality: QualityTier,
    /// Use-case tags such as `coding` or `reasoning`.
    pub best_for: Vec<String>,
    pub notes: String,
}

impl ModelRecord {
    pub fn is_best_for(&self, tag: &str) -> bool {
        self.best_for.iter().any(|t| t == tag)
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            engine: self.engine.clone(),
            cost: self.cost,
            speed: self.speed,
            quality: self.quality,
            model: self.model.clone(),
        }
    }
}

/// The short form of a [`ModelRecord`] returned by similarity searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub id: String,
    pub full_name: String,
    pub engine: String,
    pub cost: CostTier,
    pub speed: SpeedTier,
    pub quality: QualityTier,
    pub model: String,
}

/// Metadata for a backend capable of running models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub deployment: DeploymentType,
    pub requires_auth: bool,
    pub supports_streaming: bool,
    /// `None` when the engine picks its model from its own configuration.
    pub default_model: Option<String>,
    /// Alternate identifiers which resolve to this engine.
    pub aliases: Vec<String>,
}

impl EngineRecord {
    /// Returns true if `id` is this engine's identifier or one of its aliases.
    pub fn answers_to(&self, id: &str) -> bool {
        self.id == id || self.aliases.iter().any(|alias| alias == id)
    }
}

/// A partially specified model, as supplied by a user registering a custom model.
///
/// `engine` and `model` are required. Deserializing a draft applies the same
/// defaults as the builder, so a TOML table containing only those two keys is a
/// valid draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDraft {
    pub engine: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_temperature: Option<f64>,
    #[serde(default)]
    pub cost: CostTier,
    #[serde(default)]
    pub cost_per_mtok: TokenCost,
    #[serde(default)]
    pub free_tier: bool,
    #[serde(default)]
    pub speed: SpeedTier,
    #[serde(default)]
    pub quality: QualityTier,
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl ModelDraft {
    pub fn new(engine: impl Into<String>, model: impl Into<String>) -> ModelDraft {
        ModelDraft {
            engine: engine.into(),
            model: model.into(),
            ..ModelDraft::default()
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> ModelDraft {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn context_window(mut self, tokens: u64) -> ModelDraft {
        self.context_window = Some(tokens);
        self
    }

    pub fn default_temperature(mut self, temperature: f64) -> ModelDraft {
        self.default_temperature = Some(temperature);
        self
    }

    pub fn cost(mut self, cost: CostTier) -> ModelDraft {
        self.cost = cost;
        self
    }

    pub fn cost_per_mtok(mut self, input: f64, output: f64) -> ModelDraft {
        self.cost_per_mtok = TokenCost::new(input, output);
        self
    }

    pub fn free_tier(mut self, free_tier: bool) -> ModelDraft {
        self.free_tier = free_tier;
        self
    }

    pub fn speed(mut self, speed: SpeedTier) -> ModelDraft {
        self.speed = speed;
        self
    }

    pub fn quality(mut self, quality: QualityTier) -> ModelDraft {
        self.quality = quality;
        self
    }

    pub fn best_for<I, S>(mut self, tags: I) -> ModelDraft
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.best_for = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> ModelDraft {
        self.notes = notes.into();
        self
    }

    /// Completes the draft, keying it under `id`.
    pub fn into_record(self, id: &str) -> ModelRecord {
        ModelRecord {
            id: id.to_string(),
            full_name: self.full_name.unwrap_or_else(|| id.to_string()),
            engine: self.engine,
            model: self.model,
            context_window: self.context_window,
            default_temperature: self.default_temperature,
            cost: self.cost,
            cost_per_mtok: self.cost_per_mtok,
            free_tier: self.free_tier,
            speed: self.speed,
            quality: self.quality,
            best_for: self.best_for,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tiers_use_kebab_case() {
        assert_eq!(SpeedTier::VeryFast.to_string(), "very-fast");
        assert_eq!(SpeedTier::from_str("very-slow").unwrap(), SpeedTier::VerySlow);
        assert_eq!(CostTier::from_str("expensive").unwrap(), CostTier::Expensive);
        assert!(QualityTier::from_str("superb").is_err());

        let json = serde_json::to_string(&SpeedTier::VeryFast).unwrap();
        assert_eq!(json, "\"very-fast\"");
    }

    #[test]
    fn serde_and_display_forms_agree() {
        fn check<T>()
        where
            T: IntoEnumIterator + std::fmt::Display + Serialize,
        {
            for tier in T::iter() {
                let json = serde_json::to_string(&tier).unwrap();
                assert_eq!(json, format!("\"{}\"", tier));
            }
        }

        check::<CostTier>();
        check::<SpeedTier>();
        check::<QualityTier>();
    }

    #[test]
    fn draft_backfills_defaults() {
        let record = ModelDraft::new("ollama", "custom:latest").into_record("my-model");

        assert_eq!(record.id, "my-model");
        assert_eq!(record.full_name, "my-model");
        assert_eq!(record.cost, CostTier::Medium);
        assert_eq!(record.speed, SpeedTier::Medium);
        assert_eq!(record.quality, QualityTier::Good);
        assert!(record.best_for.is_empty());
        assert!(!record.free_tier);
        assert_eq!(record.cost_per_mtok, TokenCost::FREE);
        assert_eq!(record.notes, "");
        assert_eq!(record.context_window, None);
    }

    #[test]
    fn draft_deserializes_partial_table() {
        let draft: ModelDraft = toml::from_str(
            r#"
engine = "ollama"
model = "custom:latest"
cost = "free"
best_for = ["testing"]
"#,
        )
        .unwrap();

        assert_eq!(draft.cost, CostTier::Free);
        assert_eq!(draft.speed, SpeedTier::Medium);
        assert_eq!(draft.best_for, vec!["testing".to_string()]);

        let record = draft.into_record("custom");
        assert!(record.is_best_for("testing"));
        assert!(!record.is_best_for("coding"));
    }

    #[test]
    fn draft_requires_engine_and_model() {
        let result: Result<ModelDraft, _> = toml::from_str("model = \"custom:latest\"");

        assert!(result.is_err());
    }
}
