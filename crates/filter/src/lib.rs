// ABOUTME: Library entry point for the Pod URL content filter.
// ABOUTME: Re-exports configuration resolution, the rewrite pass, and settings handling.

//! podfilter - turns Pod video URLs in HTML text into embedded player frames.
//!
//! The filter locates Pod video URLs in arbitrary HTML, skips the ones that
//! are already embedded, flattens hyperlinked or native-video wrappers, and
//! replaces each remaining URL with player frame markup sized by a layered
//! configuration chain (local override, context override, global settings,
//! built-in defaults).
//!
//! # Example
//!
//! ```
//! use podfilter::{EffectiveConfig, PodFilter};
//!
//! let filter = PodFilter::new(EffectiveConfig::default()).unwrap();
//! let html = filter.rewrite("watch https://pod.univ-lille.fr/video/0042-demo/");
//! assert!(html.contains("<iframe src=\"//pod.univ-lille.fr/video/0042-demo/?is_iframe=true&size=480\""));
//! ```

pub mod config;
pub mod embed;
pub mod error;
pub mod html;
pub mod rewrite;
pub mod settings;
pub mod store;

pub use crate::config::{
    resolve, ConfigOverride, ContextConfig, EffectiveConfig, GlobalSettings,
};
pub use crate::error::{FilterError, SettingsError};
pub use crate::rewrite::PodFilter;
pub use crate::settings::LocalSettings;
pub use crate::store::{Activation, ContextConfigSource, ContextId, MemoryContextStore};

/// One-shot convenience: compile a filter for `config` and rewrite `text`.
/// Prefer keeping a [`PodFilter`] around when filtering many texts with the
/// same configuration.
pub fn filter_html(text: &str, config: &EffectiveConfig) -> Result<String, FilterError> {
    Ok(PodFilter::new(config.clone())?.rewrite(text))
}
