//! Hook registry — owns the ordered set of registered plugins.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use sensehub_core::error::AppError;
use sensehub_core::result::AppResult;

use super::definitions::HookPoint;
use crate::plugin::Plugin;

/// Entry in the plugin registry.
#[derive(Debug, Clone)]
struct PluginEntry {
    /// The plugin instance.
    plugin: Arc<dyn Plugin>,
    /// Cosmetic label supplied at registration. Not required to be unique.
    name: Option<String>,
}

/// Registration-ordered plugin state behind the registry lock.
#[derive(Debug, Default)]
struct RegistryState {
    /// All registered plugins, in registration order.
    entries: Vec<PluginEntry>,
    /// Hook point → plugins that declared it, in registration order.
    /// Computed at registration time so dispatch never re-checks
    /// capabilities.
    by_hook: HashMap<HookPoint, Vec<Arc<dyn Plugin>>>,
}

/// Registry of all registered plugins, organized by declared hook.
///
/// Plugin identity is pointer identity (`Arc::ptr_eq`): registering the
/// identical instance twice is a conflict, while two distinct instances of
/// the same type register independently. Mutation is conceptually
/// single-writer; the lock provides memory safety, not a concurrency
/// feature.
#[derive(Debug, Default)]
pub struct HookRegistry {
    state: RwLock<RegistryState>,
}

impl HookRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Registers a plugin with an optional cosmetic name.
    ///
    /// Fails with a conflict error if this exact instance is already
    /// registered. The plugin's declared hooks are indexed here, once,
    /// for O(1) dispatch lookup.
    pub fn register(&self, plugin: Arc<dyn Plugin>, name: Option<&str>) -> AppResult<()> {
        let mut state = self.state.write();

        if state
            .entries
            .iter()
            .any(|entry| Arc::ptr_eq(&entry.plugin, &plugin))
        {
            return Err(AppError::conflict("Plugin already registered"));
        }

        let hooks = plugin.declared_hooks();
        for hook in &hooks {
            state
                .by_hook
                .entry(*hook)
                .or_default()
                .push(Arc::clone(&plugin));
        }

        state.entries.push(PluginEntry {
            plugin,
            name: name.map(String::from),
        });

        info!(
            name = name.unwrap_or("<unnamed>"),
            hooks = hooks.len(),
            total = state.entries.len(),
            "Plugin registered"
        );

        Ok(())
    }

    /// Unregisters a previously registered plugin by identity.
    ///
    /// Fails with a not-found error if the instance was never registered.
    /// Removes exactly one entry along with its per-hook index slots.
    pub fn unregister(&self, plugin: &Arc<dyn Plugin>) -> AppResult<()> {
        let mut state = self.state.write();

        let position = state
            .entries
            .iter()
            .position(|entry| Arc::ptr_eq(&entry.plugin, plugin))
            .ok_or_else(|| AppError::not_found("Plugin is not registered"))?;

        let entry = state.entries.remove(position);

        for handlers in state.by_hook.values_mut() {
            handlers.retain(|handler| !Arc::ptr_eq(handler, plugin));
        }
        state.by_hook.retain(|_, handlers| !handlers.is_empty());

        info!(
            name = entry.name.as_deref().unwrap_or("<unnamed>"),
            total = state.entries.len(),
            "Plugin unregistered"
        );

        Ok(())
    }

    /// Returns the plugins that declared a hook, in registration order.
    pub fn handlers_for(&self, hook: HookPoint) -> Vec<Arc<dyn Plugin>> {
        let state = self.state.read();
        state.by_hook.get(&hook).cloned().unwrap_or_default()
    }

    /// Returns a read-only snapshot of `(plugin, name)` pairs in
    /// registration order. The snapshot is owned, so holders cannot
    /// corrupt registry state.
    pub fn list(&self) -> Vec<(Arc<dyn Plugin>, Option<String>)> {
        let state = self.state.read();
        state
            .entries
            .iter()
            .map(|entry| (Arc::clone(&entry.plugin), entry.name.clone()))
            .collect()
    }

    /// Returns the number of registered plugins. O(1) — backed by the
    /// entry list length, never a scan.
    pub fn count(&self) -> usize {
        self.state.read().entries.len()
    }
}
