//! Task record management for Gantt.
//!
//! This module implements the task record lifecycle behind the HTTP
//! surface: validated creation, retrieval, filtered and paginated listing,
//! partial update and deletion of task records. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
