use std::io::{self, IsTerminal};
use std::path::PathBuf;

use omnai::{populated_registry, read_config, Registry, DEFAULT_SUGGESTION_LIMIT};

use crate::{die, warn, RequestedColorMode};

pub(crate) mod find;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod suggest;

#[derive(Clone, Copy, strum_macros::Display)]
pub(crate) enum ColorMode {
    On,
    Off,
}

impl ColorMode {
    /// Returns whether ANSI color should be used
    /// If the user has specified a preference, this is honored. This preference
    /// can be specified through the command line or the "NO_COLOR" environment
    /// variable. If the user hasn't stated a preference, color is enabled if the
    /// output is a terminal.
    pub(crate) fn resolve_auto(cm: RequestedColorMode) -> ColorMode {
        match cm {
            RequestedColorMode::Auto => {
                let disable_color =
                    std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal();

                if disable_color {
                    ColorMode::Off
                } else {
                    ColorMode::On
                }
            }
            RequestedColorMode::On => ColorMode::On,
            RequestedColorMode::Off => ColorMode::Off,
        }
    }
}

/// State shared by every command: the populated registry and the settings read
/// from the configuration.
pub(crate) struct Context {
    pub(crate) registry: Registry,
    pub(crate) suggestion_limit: usize,
}

impl Context {
    /// Load the configuration and populate the registry. Problems with the
    /// configuration file are fatal; unknown keys and refused models are not.
    pub(crate) fn load(config_path: Option<PathBuf>) -> Context {
        let loaded = match read_config(config_path) {
            Ok(loaded) => loaded,
            Err(err) => die!("{}", err),
        };

        if let Some(path) = &loaded.path {
            for key in &loaded.extraneous_keys {
                warn!(
                    "ignoring unknown key \"{}\" in config \"{}\"",
                    key,
                    path.display()
                );
            }
        }

        let (registry, refused) = populated_registry(&loaded.config);

        for id in refused {
            warn!(
                "ignoring custom model \"{}\", a model with this identifier already exists (set \"override = true\" to replace it)",
                id
            );
        }

        Context {
            registry,
            suggestion_limit: loaded
                .config
                .suggestion_limit
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }
    }

    /// Resolve an engine named on the command line, exiting if it is unknown.
    pub(crate) fn engine_arg<'a>(&'a self, id: &'a str) -> &'a str {
        match known_engine(&self.registry, id) {
            Some(engine) => engine,
            None => die!(
                "unknown engine \"{}\", run \"omnai list engines\" to see the available engines",
                id
            ),
        }
    }
}

/// Returns the canonical name of `id` if it is a built-in engine (or an alias
/// of one) or serves at least one registered model.
fn known_engine<'a>(registry: &'a Registry, id: &'a str) -> Option<&'a str> {
    match registry.canonical_engine(id) {
        Some(engine) => Some(engine),
        None if !registry.list(Some(id)).is_empty() => Some(id),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnai::ModelDraft;

    #[test]
    fn engines_of_custom_models_are_known() {
        let mut registry = Registry::new();

        registry.register("my-lm", ModelDraft::new("lmstudio", "local-model"), false);

        assert_eq!(known_engine(&registry, "lmstudio"), Some("lmstudio"));
        assert_eq!(known_engine(&registry, "claude-code"), Some("claude"));
        assert_eq!(known_engine(&registry, "ollama"), Some("ollama"));
        assert_eq!(known_engine(&registry, "nonexistent"), None);
    }

    #[test]
    fn builtin_engines_without_models_are_known() {
        let registry = Registry::new();

        assert_eq!(known_engine(&registry, "aider"), Some("aider"));
        assert_eq!(known_engine(&registry, "lmstudio"), None);
    }
}
