//! A registry of AI models and the engines which run them.
//!
//! The registry carries practical metadata for each model (cost, speed and
//! quality tiers, pricing, context window, recommended use cases) and answers
//! lookups, filtered searches, and "did you mean" suggestions for identifiers
//! which do not exist.
//!
//! ```
//! use omnai::{CostTier, Criteria, Registry};
//!
//! let registry = Registry::new();
//!
//! let sonnet = registry.get("claude-sonnet-4-20250514").unwrap();
//! assert_eq!(sonnet.engine, "claude");
//!
//! // Free models good for coding
//! let free_coding = registry.find(&Criteria::new().cost(CostTier::Free).best_for("coding"));
//! assert!(free_coding.iter().all(|m| m.cost == CostTier::Free));
//!
//! // Misspelled identifiers produce suggestions
//! let err = registry.validate("minimax-m3", Some("opencode")).unwrap_err();
//! assert!(!err.suggestions().is_empty());
//! ```
//!
//! Custom models are added with [`Registry::register`], or declared in the
//! configuration file and loaded with [`populated_registry`].

pub mod config;
pub mod models;
pub mod registry;

pub use config::{read_config, Config, CustomModel, LoadedConfig};
pub use models::{
    CostTier, DeploymentType, EngineRecord, ModelDraft, ModelRecord, ModelSummary, QualityTier,
    SpeedTier, TokenCost,
};
pub use registry::populate::populated_registry;
pub use registry::{Accept, Criteria, Error, Registry, DEFAULT_SUGGESTION_LIMIT};
