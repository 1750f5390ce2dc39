use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use super::criteria::Criteria;
use crate::models::builtin::{BUILTIN_ENGINES, BUILTIN_MODELS};
use crate::models::{EngineRecord, ModelDraft, ModelRecord};

/// The model registry: a read-only table of built-in models layered beneath a
/// writable table of custom models.
pub struct Registry {
    builtin: &'static [ModelRecord],
    builtin_index: HashMap<&'static str, usize>,
    engines: &'static [EngineRecord],
    custom: IndexMap<String, ModelRecord>,
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

impl Registry {
    /// Creates a registry holding the built-in tables and no custom models.
    pub fn new() -> Registry {
        let builtin = BUILTIN_MODELS.as_slice();

        let builtin_index = builtin
            .iter()
            .enumerate()
            .map(|(i, model)| (model.id.as_str(), i))
            .collect();

        Registry {
            builtin,
            builtin_index,
            engines: BUILTIN_ENGINES.as_slice(),
            custom: IndexMap::new(),
        }
    }

    fn builtin(&self, id: &str) -> Option<&ModelRecord> {
        self.builtin_index.get(id).map(|&i| &self.builtin[i])
    }

    fn contains(&self, id: &str) -> bool {
        self.builtin_index.contains_key(id) || self.custom.contains_key(id)
    }

    /// Every visible record: built-in models first, then custom models, each in
    /// insertion order. A custom model registered over a built-in one takes the
    /// built-in's place.
    pub(super) fn records(&self) -> impl Iterator<Item = &ModelRecord> {
        let builtin = self
            .builtin
            .iter()
            .map(|model| self.custom.get(&model.id).unwrap_or(model));

        let custom = self
            .custom
            .values()
            .filter(|model| !self.builtin_index.contains_key(model.id.as_str()));

        builtin.chain(custom)
    }

    /// Returns the model registered under `id`.
    pub fn get(&self, id: &str) -> Option<&ModelRecord> {
        self.custom.get(id).or_else(|| self.builtin(id))
    }

    /// Lists every model, optionally limited to those served by `engine`.
    pub fn list(&self, engine: Option<&str>) -> Vec<&ModelRecord> {
        match engine {
            Some(engine) => self
                .records()
                .filter(|model| self.same_engine(&model.engine, engine))
                .collect(),
            None => self.records().collect(),
        }
    }

    /// Lists the models which satisfy every constraint in `criteria`.
    pub fn find(&self, criteria: &Criteria) -> Vec<&ModelRecord> {
        let criteria =
            criteria.with_engines_resolved(|engine| self.resolve_engine(engine).to_string());

        self.records()
            .filter(|model| criteria.matches(model, self.resolve_engine(&model.engine)))
            .collect()
    }

    /// Returns the engine record for an engine identifier or one of its aliases.
    pub fn engine(&self, id: &str) -> Option<&EngineRecord> {
        self.engines.iter().find(|engine| engine.answers_to(id))
    }

    /// Returns the canonical identifier of an engine, resolving aliases.
    pub fn canonical_engine(&self, id: &str) -> Option<&str> {
        self.engine(id).map(|engine| engine.id.as_str())
    }

    /// Engines unknown to the registry (e.g., referenced only by custom models)
    /// resolve to themselves.
    pub(super) fn resolve_engine<'a>(&'a self, id: &'a str) -> &'a str {
        self.canonical_engine(id).unwrap_or(id)
    }

    pub(super) fn same_engine(&self, a: &str, b: &str) -> bool {
        self.resolve_engine(a) == self.resolve_engine(b)
    }

    /// Returns the default model of an engine. This is `None` if the engine is
    /// unknown or it is configured outside of the registry.
    pub fn get_default(&self, engine: &str) -> Option<&str> {
        self.engine(engine)?.default_model.as_deref()
    }

    pub fn list_engines(&self) -> &[EngineRecord] {
        self.engines
    }

    /// Registers a custom model under `id`.
    ///
    /// If `id` is already taken by a built-in or custom model, the registration is
    /// refused and `false` is returned unless `override_existing` is set. Fields the
    /// draft leaves unset are filled with their defaults.
    pub fn register(&mut self, id: &str, draft: ModelDraft, override_existing: bool) -> bool {
        if self.contains(id) && !override_existing {
            debug!(id, "refusing to replace an existing model");
            return false;
        }

        let record = draft.into_record(id);

        debug!(id, engine = %record.engine, override_existing, "registered custom model");

        self.custom.insert(id.to_string(), record);

        true
    }

    /// Lists the custom models in the order they were first registered.
    pub fn list_custom(&self) -> Vec<&ModelRecord> {
        self.custom.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostTier, QualityTier, SpeedTier, TokenCost};
    use std::collections::HashSet;

    #[test]
    fn builtin_models_resolve_to_themselves() {
        let registry = Registry::new();

        for model in BUILTIN_MODELS.iter() {
            let found = registry.get(&model.id).unwrap();
            assert_eq!(found.id, model.id);
        }
    }

    #[test]
    fn get_builtin_model() {
        let registry = Registry::new();

        let model = registry.get("claude-sonnet-4-20250514").unwrap();

        assert_eq!(model.engine, "claude");
        assert_eq!(model.model, "claude-sonnet-4-20250514");
        assert_eq!(model.cost, CostTier::Medium);
    }

    #[test]
    fn get_unknown_model() {
        assert!(Registry::new().get("nonexistent-model").is_none());
    }

    #[test]
    fn list_by_engine() {
        let registry = Registry::new();

        let ollama = registry.list(Some("ollama"));

        assert!(!ollama.is_empty());
        assert!(ollama.iter().all(|m| m.engine == "ollama"));
        assert_eq!(registry.list(None).len(), BUILTIN_MODELS.len());
        assert!(registry.list(Some("nonexistent")).is_empty());
    }

    #[test]
    fn list_resolves_engine_aliases() {
        let registry = Registry::new();

        assert_eq!(registry.list(Some("claude-code")), registry.list(Some("claude")));
    }

    #[test]
    fn custom_models_follow_builtin_models() {
        let mut registry = Registry::new();

        assert!(registry.register("custom-1", ModelDraft::new("ollama", "c1"), false));
        assert!(registry.register("custom-2", ModelDraft::new("ollama", "c2"), false));

        let all = registry.list(None);
        let ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(all.len(), BUILTIN_MODELS.len() + 2);
        assert_eq!(ids[ids.len() - 2..], ["custom-1", "custom-2"]);

        let custom: Vec<&str> = registry
            .list_custom()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(custom, ["custom-1", "custom-2"]);
    }

    #[test]
    fn register_backfills_defaults() {
        let mut registry = Registry::new();

        assert!(registry.register("test-model", ModelDraft::new("ollama", "test:latest"), false));

        let model = registry.get("test-model").unwrap();
        assert_eq!(model.cost, CostTier::Medium);
        assert_eq!(model.speed, SpeedTier::Medium);
        assert_eq!(model.quality, QualityTier::Good);
        assert_eq!(model.cost_per_mtok, TokenCost::FREE);
        assert!(model.best_for.is_empty());
        assert!(!model.free_tier);
        assert_eq!(model.notes, "");
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut registry = Registry::new();

        assert!(registry.register("test-dup", ModelDraft::new("ollama", "test:1"), false));
        assert!(!registry.register("test-dup", ModelDraft::new("ollama", "test:2"), false));

        assert_eq!(registry.get("test-dup").unwrap().model, "test:1");
        assert_eq!(registry.list_custom().len(), 1);
    }

    #[test]
    fn override_replaces_custom_model() {
        let mut registry = Registry::new();

        registry.register("test-override", ModelDraft::new("ollama", "test:1"), false);
        registry.register("other", ModelDraft::new("ollama", "other"), false);

        assert!(registry.register(
            "test-override",
            ModelDraft::new("ollama", "test:2"),
            true
        ));

        assert_eq!(registry.get("test-override").unwrap().model, "test:2");

        let custom = registry.list_custom();
        assert_eq!(custom[0].id, "test-override");
        assert_eq!(custom.len(), 2);
    }

    #[test]
    fn builtin_ids_are_guarded() {
        let mut registry = Registry::new();

        assert!(!registry.register("gpt-4o", ModelDraft::new("ollama", "fake"), false));
        assert_eq!(registry.get("gpt-4o").unwrap().engine, "opencode");
        assert!(registry.list_custom().is_empty());
    }

    #[test]
    fn override_shadows_builtin_model() {
        let mut registry = Registry::new();

        let position = registry
            .list(None)
            .iter()
            .position(|m| m.id == "gpt-4o")
            .unwrap();

        assert!(registry.register("gpt-4o", ModelDraft::new("ollama", "gpt-4o:local"), true));

        assert_eq!(registry.get("gpt-4o").unwrap().model, "gpt-4o:local");

        let all = registry.list(None);
        assert_eq!(all.len(), BUILTIN_MODELS.len());
        assert_eq!(all[position].model, "gpt-4o:local");
    }

    #[test]
    fn default_models() {
        let registry = Registry::new();

        assert_eq!(registry.get_default("claude-code"), Some("claude-sonnet-4-20250514"));
        assert_eq!(registry.get_default("claude"), Some("claude-sonnet-4-20250514"));
        assert_eq!(registry.get_default("ollama"), Some("qwen2.5-coder:7b"));
        assert_eq!(registry.get_default("aider"), None);
        assert_eq!(registry.get_default("nonexistent-engine"), None);
    }

    #[test]
    fn canonical_engines() {
        let registry = Registry::new();

        assert_eq!(registry.canonical_engine("claude-code"), Some("claude"));
        assert_eq!(registry.canonical_engine("codex"), Some("codex"));
        assert_eq!(registry.canonical_engine("nonexistent"), None);
    }

    #[test]
    fn builtin_tables_are_consistent() {
        let registry = Registry::new();

        let ids: HashSet<&str> = BUILTIN_MODELS.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), BUILTIN_MODELS.len(), "model identifiers must be unique");

        for model in BUILTIN_MODELS.iter() {
            assert!(!model.best_for.is_empty(), "{} has no use cases", model.id);
            assert!(model.cost_per_mtok.input >= 0.0, "{} has a negative cost", model.id);
            assert!(model.cost_per_mtok.output >= 0.0, "{} has a negative cost", model.id);
            assert!(model.context_window.is_some(), "{} has no context window", model.id);
            assert!(
                registry.engine(&model.engine).is_some(),
                "{} has an unknown engine",
                model.id
            );
        }

        for engine in registry.list_engines() {
            let default = match &engine.default_model {
                Some(default) => default,
                None => continue,
            };

            let model = registry.get(default).unwrap();
            assert_eq!(model.engine, engine.id, "default of {} is served elsewhere", engine.id);
        }
    }
}
