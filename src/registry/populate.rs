use tracing::info;

use super::registry::Registry;
use crate::config::Config;

/// Populate a registry with the built-in tables and the custom models declared in
/// the configuration.
///
/// Returns the registry along with the identifiers of custom models which were
/// refused because they already exist and do not request an override.
pub fn populated_registry(config: &Config) -> (Registry, Vec<String>) {
    let mut registry = Registry::new();
    let mut refused = Vec::new();

    for custom in &config.models {
        let accepted =
            registry.register(&custom.id, custom.draft.clone(), custom.override_existing);

        if !accepted {
            refused.push(custom.id.clone());
        }
    }

    info!(
        custom = registry.list_custom().len(),
        refused = refused.len(),
        "populated registry"
    );

    (registry, refused)
}
