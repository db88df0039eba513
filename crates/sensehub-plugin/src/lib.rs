//! # sensehub-plugin
//!
//! Plugin framework for SenseHub. Provides:
//!
//! - The [`Plugin`] hook contract with explicit capability declaration
//! - Hook registry with identity-checked registration
//! - Hook dispatcher with ordered fan-out and result aggregation
//! - The [`PluginManager`] facade the pipeline is driven through
//!
//! Dispatch is synchronous and in-process: one call fans out to every
//! plugin that declared the hook, in registration order, and aggregates
//! their results. A plugin error aborts the fan-out and propagates to the
//! caller unchanged.

pub mod hooks;
pub mod manager;
pub mod plugin;

pub use hooks::definitions::HookPoint;
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::registry::HookRegistry;
pub use manager::PluginManager;
pub use plugin::Plugin;
