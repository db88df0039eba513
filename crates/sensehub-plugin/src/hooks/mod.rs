//! Hook definitions, registry, and dispatcher.

pub mod definitions;
pub mod dispatcher;
pub mod registry;
