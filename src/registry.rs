//! The registry answers questions about models and engines. It is a database
//! populated with the built-in model and engine tables, overlaid with any custom
//! models registered at runtime (usually from the user's configuration).
//!
//! Lookups consult the custom models before the built-in ones, so a custom model
//! registered with `override_existing` shadows the built-in model of the same name.
//! Listings and searches walk the built-in models first and then the custom
//! models, each in insertion order:
//! ```text
//! <listing> := <built-in model>* <custom model>*
//! ```
//!
//! Engines may be referred to by an alias (e.g., `claude-code` for `claude`).
//! Every operation accepting an engine resolves aliases before comparing.
//!
//! When a lookup misses, [`Registry::validate`] attaches "did you mean"
//! suggestions computed by [`Registry::find_similar`].

pub mod criteria;
pub mod populate;
#[allow(clippy::module_inception)]
pub mod registry;
pub mod suggest;

pub use criteria::{Accept, Criteria};
pub use registry::Registry;
pub use suggest::{Error, DEFAULT_SUGGESTION_LIMIT};
