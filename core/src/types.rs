//! Shared primitive types used across the entire pipeline.

/// A product category label, one of the configured catalog.
pub type Category = String;

/// A sales region label, one of the configured catalog.
pub type Region = String;

/// A synthetic sales agent identifier, e.g. `agent_7`.
pub type AgentId = String;
