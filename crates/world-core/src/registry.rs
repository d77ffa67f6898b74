//! The lifecycle contract and the kind registry.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result, Warning};
use crate::resources;
use crate::transport::CommandExecutor;

/// Per-kind orchestration of the object lifecycle. Attribute and state
/// payloads cross this boundary as JSON values; each implementation
/// deserializes into its own typed model.
pub trait Lifecycle {
    fn kind(&self) -> &'static str;

    /// Apply the declared attributes for the first time. Returns the
    /// persisted state on success; on any command failure nothing may
    /// be persisted, so implementations compensate partial work first.
    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value>;

    /// Refresh echoes persisted state unchanged. The remote channel
    /// offers no query for managed objects, so out-of-band drift is
    /// invisible by design.
    fn refresh(&self, state: Value) -> Result<Value> {
        Ok(state)
    }

    /// Re-issue the full command set for the new attributes. There is
    /// no differential path and no rollback of partially applied
    /// updates.
    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value>;

    /// Best-effort reversal of the object's remote effect. Failures
    /// come back as warnings so the object can be considered gone.
    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning>;

    /// Reconstruct minimal persisted state from an identity string
    /// alone, without contacting the remote side.
    fn import(&self, id: &str) -> Result<Value>;
}

impl std::fmt::Debug for dyn Lifecycle + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle").field("kind", &self.kind()).finish()
    }
}

/// Maps kind names to their lifecycle handlers.
pub struct KindRegistry {
    kinds: BTreeMap<&'static str, Box<dyn Lifecycle>>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self {
            kinds: BTreeMap::new(),
        }
    }

    /// Registry with every built-in kind installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(resources::BlockKind));
        registry.register(Box::new(resources::StairsKind));
        registry.register(Box::new(resources::ChestKind));
        registry.register(Box::new(resources::BedKind));
        registry.register(Box::new(resources::FillKind));
        registry.register(Box::new(resources::EntityKind));
        registry.register(Box::new(resources::SheepKind));
        registry.register(Box::new(resources::ZombieKind));
        registry.register(Box::new(resources::TeamKind));
        registry.register(Box::new(resources::TeamMemberKind));
        registry.register(Box::new(resources::OpKind));
        registry.register(Box::new(resources::GameruleKind));
        registry.register(Box::new(resources::GamemodeKind));
        registry.register(Box::new(resources::DaylockKind));
        registry
    }

    pub fn register(&mut self, handler: Box<dyn Lifecycle>) {
        self.kinds.insert(handler.kind(), handler);
    }

    pub fn get(&self, kind: &str) -> Result<&dyn Lifecycle> {
        self.kinds
            .get(kind)
            .map(Box::as_ref)
            .ok_or_else(|| Error::validation(format!("unknown object kind {kind:?}")))
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
