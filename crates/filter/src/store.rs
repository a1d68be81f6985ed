// ABOUTME: Context configuration source abstraction for per-context overrides.
// ABOUTME: Provides an in-memory store with parent chains and tri-state activation.

use std::collections::HashMap;

use crate::config::ContextConfig;

/// Identifier of a context in the host platform's scope hierarchy.
pub type ContextId = u64;

/// Source of the nearest enabled contextual override.
///
/// Implementations own the actual storage; the filter only asks one
/// question per invocation.
pub trait ContextConfigSource {
    /// Returns the stored override for `context` when the filter is active
    /// there, or `None` when it is disabled or unconfigured.
    fn active_config(&self, context: ContextId) -> Option<ContextConfig>;
}

/// Whether the filter is switched on in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    On,
    Off,
    /// Defer to the parent context.
    #[default]
    Inherit,
}

#[derive(Debug, Default)]
struct ContextEntry {
    parent: Option<ContextId>,
    activation: Activation,
    config: ContextConfig,
}

/// In-memory context store, mainly for tests and embedding hosts without a
/// database-backed hierarchy.
#[derive(Debug, Default)]
pub struct MemoryContextStore {
    entries: HashMap<ContextId, ContextEntry>,
}

impl MemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `context` under `parent` (`None` for a root context).
    pub fn add_context(&mut self, context: ContextId, parent: Option<ContextId>) {
        self.entries.entry(context).or_default().parent = parent;
    }

    /// Sets the activation flag for `context`.
    pub fn set_activation(&mut self, context: ContextId, activation: Activation) {
        self.entries.entry(context).or_default().activation = activation;
    }

    /// Stores the override values for `context`.
    pub fn set_config(&mut self, context: ContextId, config: ContextConfig) {
        self.entries.entry(context).or_default().config = config;
    }

    /// Walks the parent chain; the nearest explicit flag decides. Contexts
    /// with no explicit flag anywhere in their chain are inactive.
    fn is_active(&self, context: ContextId) -> bool {
        let mut current = context;
        loop {
            let Some(entry) = self.entries.get(&current) else {
                return false;
            };
            match entry.activation {
                Activation::On => return true,
                Activation::Off => return false,
                Activation::Inherit => match entry.parent {
                    Some(parent) => current = parent,
                    None => return false,
                },
            }
        }
    }
}

impl ContextConfigSource for MemoryContextStore {
    fn active_config(&self, context: ContextId) -> Option<ContextConfig> {
        if !self.is_active(context) {
            return None;
        }
        // Values come from the queried context itself; ancestors only
        // contribute the activation decision.
        self.entries.get(&context).map(|e| e.config.clone())
    }
}
